//! IV combination search.
//!
//! Inverts the CP/HP formulas: given what the trainer can see (CP, HP, the
//! stardust cost of the next power-up) find every `(level, attack, defense,
//! stamina)` that reproduces it.
//!
//! # Search order
//!
//! ```text
//! levels with matching stardust cost
//!   └─ stamina IV           → HP at level and at level + 0.5
//!        └─ attack × defense → CP at each level whose HP matched
//! ```
//!
//! HP depends only on stamina, so it is computed once per stamina value and
//! prunes the attack/defense grid for every stamina that cannot match.

pub mod sort;

pub use sort::{SortKey, SortOrder, sort_combinations};

use arrayvec::ArrayVec;

use crate::appraisal::IvBounds;
use crate::level::{Level, LevelTable, StardustQuery};
use crate::stats::{BaseStats, IvSet, calc_cp, calc_hp};

/// What the trainer observed on the creature's screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Observation {
    pub cp: u32,
    pub hp: u32,
    pub stardust: StardustQuery,
}

impl Observation {
    pub const fn new(cp: u32, hp: u32, stardust: StardustQuery) -> Self {
        Self { cp, hp, stardust }
    }
}

/// A level and IV spread consistent with an [`Observation`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combination {
    pub level: Level,
    pub attack: u8,
    pub defense: u8,
    pub stamina: u8,
    pub ivt: u8,
}

impl Combination {
    pub fn new(level: Level, ivs: IvSet) -> Self {
        Self {
            level,
            attack: ivs.attack,
            defense: ivs.defense,
            stamina: ivs.stamina,
            ivt: ivs.total(),
        }
    }

    pub const fn ivs(&self) -> IvSet {
        IvSet::new(self.attack, self.defense, self.stamina)
    }
}

/// Finds every combination that reproduces `observation`.
///
/// Returns an empty list when `stats` is `None`, when no level carries the
/// observed stardust cost, or when any bound is inverted. Stat bounds above
/// [`MAX_IV`](crate::stats::MAX_IV) are clipped. Order is unspecified; use
/// [`sort_combinations`] for presentation.
pub fn compute_iv_combinations(
    observation: &Observation,
    stats: Option<&BaseStats>,
    levels: &LevelTable,
    bounds: &IvBounds,
) -> Vec<Combination> {
    let Some(stats) = stats else {
        return Vec::new();
    };

    let mut combinations = Vec::new();
    let mut candidate_levels = 0usize;

    for entry in levels.levels_for_stardust(observation.stardust) {
        candidate_levels += 1;
        let half_step = levels.half_step(entry.level);

        for stamina in bounds.stamina.iv_values() {
            let mut matches: ArrayVec<(Level, f64), 2> = ArrayVec::new();
            if calc_hp(entry.cpm, stats.stamina, stamina) == observation.hp {
                matches.push((Level::new(entry.level), entry.cpm));
            }
            if let Some(cpm) = half_step {
                if calc_hp(cpm, stats.stamina, stamina) == observation.hp {
                    matches.push((Level::half(entry.level), cpm));
                }
            }

            for &(level, cpm) in &matches {
                for attack in bounds.attack.iv_values() {
                    for defense in bounds.defense.iv_values() {
                        let ivs = IvSet::new(attack, defense, stamina);
                        if bounds.ivt.contains(ivs.total())
                            && calc_cp(cpm, stats, &ivs) == observation.cp
                        {
                            combinations.push(Combination::new(level, ivs));
                        }
                    }
                }
            }
        }
    }

    tracing::debug!(
        cp = observation.cp,
        hp = observation.hp,
        stardust = observation.stardust.cost,
        candidate_levels,
        found = combinations.len(),
        "iv combination search finished"
    );

    combinations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appraisal::StatBounds;
    use crate::testing::standard_table as table;

    #[test]
    fn missing_stats_yield_nothing() {
        let observation = Observation::new(1339, 114, StardustQuery::new(2500));
        let found = compute_iv_combinations(&observation, None, &table(), &IvBounds::default());
        assert!(found.is_empty());
    }

    #[test]
    fn unknown_stardust_cost_yields_nothing() {
        let stats = BaseStats::new(180, 180, 180);
        let observation = Observation::new(1339, 114, StardustQuery::new(1234));
        let found =
            compute_iv_combinations(&observation, Some(&stats), &table(), &IvBounds::default());
        assert!(found.is_empty());
    }

    #[test]
    fn inverted_bounds_yield_nothing() {
        let stats = BaseStats::new(180, 180, 180);
        let observation = Observation::new(1339, 114, StardustQuery::new(2500));
        let bounds = IvBounds {
            attack: StatBounds::new(15, 0),
            ..IvBounds::default()
        };
        let found = compute_iv_combinations(&observation, Some(&stats), &table(), &bounds);
        assert!(found.is_empty());
    }

    #[test]
    fn finds_integer_level_spreads() {
        let stats = BaseStats::new(180, 180, 180);
        let observation = Observation::new(1339, 114, StardustQuery::new(2500));
        let found =
            compute_iv_combinations(&observation, Some(&stats), &table(), &IvBounds::default());

        assert_eq!(found.len(), 3);
        assert!(found.iter().all(|c| c.level == Level::new(20)));
        assert!(found.contains(&Combination::new(Level::new(20), IvSet::new(15, 13, 12))));
        assert!(found.contains(&Combination::new(Level::new(20), IvSet::new(15, 14, 11))));
        assert!(found.contains(&Combination::new(Level::new(20), IvSet::new(14, 15, 12))));
    }

    #[test]
    fn finds_half_level_spreads() {
        let stats = BaseStats::new(180, 180, 180);
        let observation = Observation::new(1275, 114, StardustQuery::new(2500));
        let found =
            compute_iv_combinations(&observation, Some(&stats), &table(), &IvBounds::default());

        assert_eq!(found.len(), 19);
        assert!(found.iter().all(|c| c.level.is_half()));
        assert!(found.contains(&Combination::new(Level::half(19), IvSet::new(10, 12, 14))));
        assert!(found.contains(&Combination::new(Level::half(20), IvSet::new(9, 0, 9))));
    }

    #[test]
    fn oversized_stat_bounds_are_clipped() {
        let stats = BaseStats::new(180, 180, 180);
        let observation = Observation::new(33, 18, StardustQuery::new(200));
        let bounds = IvBounds {
            attack: StatBounds::new(0, 200),
            defense: StatBounds::new(0, 200),
            ..IvBounds::default()
        };

        let found = compute_iv_combinations(&observation, Some(&stats), &table(), &bounds);
        let unbounded =
            compute_iv_combinations(&observation, Some(&stats), &table(), &IvBounds::default());
        assert_eq!(found, unbounded);
        assert!(found.contains(&Combination::new(Level::new(1), IvSet::perfect())));

        let above = IvBounds {
            stamina: StatBounds::new(16, 255),
            ..IvBounds::default()
        };
        assert!(compute_iv_combinations(&observation, Some(&stats), &table(), &above).is_empty());
    }

    #[test]
    fn integer_and_half_level_both_recorded_when_hp_matches_twice() {
        // Tiny stats keep CP and HP at their floor of 10 through level 2.5.
        let stats = BaseStats::new(10, 10, 10);
        let observation = Observation::new(10, 10, StardustQuery::new(200));
        let levels = table();
        let found = compute_iv_combinations(&observation, Some(&stats), &levels, &IvBounds::default());

        assert_eq!(found.len(), 4 * 16 * 16 * 16);
        for level in [Level::new(1), Level::half(1), Level::new(2), Level::half(2)] {
            assert!(found.contains(&Combination::new(level, IvSet::perfect())));
        }
        for combination in &found {
            let cpm = levels.multiplier(combination.level).unwrap();
            let ivs = combination.ivs();
            assert_eq!(calc_hp(cpm, stats.stamina, ivs.stamina), observation.hp);
            assert_eq!(calc_cp(cpm, &stats, &ivs), observation.cp);
        }
    }
}
