//! CP filter generation.
//!
//! The in-game search box accepts strings such as `150&cp1-30,cp35&hp10-20`.
//! Given an IV-total threshold, this module enumerates every (CP, HP) a
//! species can show across the level table and produces two strings:
//!
//! - **pass**: every CP and HP reachable by a spread meeting the threshold;
//! - **fail**: values reachable *only* by spreads below it.
//!
//! A creature matching the fail string is therefore certain to be below the
//! threshold, which is what makes it useful for mass transfers.

pub mod range;

pub use range::compact_ranges;

use std::collections::BTreeSet;

use crate::level::LevelTable;
use crate::species::SpeciesId;
use crate::stats::{BaseStats, IvSet, calc_cp, calc_hp};

/// IV-total thresholds offered by the filter, roughly 10% apart.
pub const IVT_TIERS: [u8; 11] = [45, 41, 36, 32, 27, 23, 18, 13, 9, 5, 0];

/// Minimum IV total for filter tier `index`.
pub fn ivt_threshold(index: usize) -> Option<u8> {
    IVT_TIERS.get(index).copied()
}

/// Inclusive range of integer levels to enumerate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelWindow {
    pub min: u16,
    pub max: u16,
}

impl LevelWindow {
    pub const fn new(min: u16, max: u16) -> Self {
        Self { min, max }
    }
}

/// Knobs for [`build_cp_filters_with`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CpFilterOptions {
    /// Minimum IV total a spread needs to pass.
    pub min_ivt: u8,
    pub min_attack: u8,
    pub min_defense: u8,
    pub min_stamina: u8,
    /// Levels to enumerate; the whole table when `None`.
    pub window: Option<LevelWindow>,
}

impl CpFilterOptions {
    pub const fn new(min_ivt: u8) -> Self {
        Self {
            min_ivt,
            min_attack: 0,
            min_defense: 0,
            min_stamina: 0,
            window: None,
        }
    }

    pub const fn with_window(mut self, window: LevelWindow) -> Self {
        self.window = Some(window);
        self
    }

    pub const fn with_min_ivs(mut self, attack: u8, defense: u8, stamina: u8) -> Self {
        self.min_attack = attack;
        self.min_defense = defense;
        self.min_stamina = stamina;
        self
    }

    fn passes(&self, ivs: &IvSet) -> bool {
        ivs.total() >= self.min_ivt
            && ivs.attack >= self.min_attack
            && ivs.defense >= self.min_defense
            && ivs.stamina >= self.min_stamina
    }
}

/// Pass and fail search strings. Either may be empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CpFilter {
    pub pass: String,
    pub fail: String,
}

impl CpFilter {
    pub fn is_empty(&self) -> bool {
        self.pass.is_empty() && self.fail.is_empty()
    }
}

/// Builds the CP filter for a threshold over the whole level table.
///
/// Any missing input (no species selected, no stats, unknown threshold tier)
/// yields two empty strings.
pub fn build_cp_filters(
    levels: &LevelTable,
    stats: Option<&BaseStats>,
    species: Option<&SpeciesId>,
    min_ivt: Option<u8>,
) -> CpFilter {
    match (stats, species, min_ivt) {
        (Some(stats), Some(species), Some(min_ivt)) => {
            build_cp_filters_with(levels, stats, species, &CpFilterOptions::new(min_ivt))
        }
        _ => CpFilter::default(),
    }
}

#[derive(Default)]
struct ValueSets {
    cp: BTreeSet<u32>,
    hp: BTreeSet<u32>,
}

impl ValueSets {
    fn serialize(&self, dex: u16) -> String {
        let cp = compact_ranges(self.cp.iter().copied());
        let hp = compact_ranges(self.hp.iter().copied());
        if cp.is_empty() || hp.is_empty() {
            return String::new();
        }
        format!("{dex}&{}&{}", prefixed("cp", &cp), prefixed("hp", &hp))
    }
}

fn prefixed(prefix: &str, ranges: &[String]) -> String {
    ranges
        .iter()
        .map(|range| format!("{prefix}{range}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Builds the CP filter with per-stat minimums and an optional level window.
///
/// Every integer level in the window is enumerated, plus the half level above
/// it when that half level is still inside the window and the table.
pub fn build_cp_filters_with(
    levels: &LevelTable,
    stats: &BaseStats,
    species: &SpeciesId,
    options: &CpFilterOptions,
) -> CpFilter {
    let window = options
        .window
        .unwrap_or(LevelWindow::new(1, levels.max_level()));
    let top = window.max.min(levels.max_level());

    let mut good = ValueSets::default();
    let mut bad = ValueSets::default();

    for entry in levels
        .entries()
        .filter(|entry| entry.level >= window.min && entry.level <= top)
    {
        let half_step = if entry.level < top {
            levels.half_step(entry.level)
        } else {
            None
        };

        for cpm in core::iter::once(entry.cpm).chain(half_step) {
            for ivs in IvSet::all() {
                let sets = if options.passes(&ivs) {
                    &mut good
                } else {
                    &mut bad
                };
                sets.cp.insert(calc_cp(cpm, stats, &ivs));
                sets.hp.insert(calc_hp(cpm, stats.stamina, ivs.stamina));
            }
        }
    }

    bad.cp.retain(|cp| !good.cp.contains(cp));
    bad.hp.retain(|hp| !good.hp.contains(hp));

    let dex = species.dex_number();
    let filter = CpFilter {
        pass: good.serialize(dex),
        fail: bad.serialize(dex),
    };

    tracing::debug!(
        species = %species,
        min_ivt = options.min_ivt,
        window_min = window.min,
        window_max = top,
        pass_cp = good.cp.len(),
        fail_cp = bad.cp.len(),
        "cp filter built"
    );

    filter
}
