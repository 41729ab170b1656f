mod common;

use std::collections::HashSet;

use common::level_table;
use pogo_core::{
    AppraisalInput, AppraisalTier, BaseStats, Combination, IvBounds, Observation, SortKey,
    SortOrder, StardustQuery, StatBounds, calc_cp, calc_hp, compute_iv_combinations,
    sort_combinations,
};

const STATS: BaseStats = BaseStats::new(180, 180, 180);

fn search(cp: u32, hp: u32, stardust: u32, bounds: &IvBounds) -> Vec<Combination> {
    let observation = Observation::new(cp, hp, StardustQuery::new(stardust));
    compute_iv_combinations(&observation, Some(&STATS), &level_table(), bounds)
}

fn assert_round_trip(found: &[Combination], cp: u32, hp: u32) {
    let levels = level_table();
    for combination in found {
        let cpm = levels
            .multiplier(combination.level)
            .expect("combination level exists in table");
        let ivs = combination.ivs();
        assert_eq!(calc_cp(cpm, &STATS, &ivs), cp, "{combination:?}");
        assert_eq!(calc_hp(cpm, STATS.stamina, ivs.stamina), hp, "{combination:?}");
        assert_eq!(combination.ivt, ivs.total());
    }
}

#[test]
fn level_twenty_band_with_top_tier_appraisal() {
    let bounds = AppraisalInput {
        ivt: Some(AppraisalTier::Amazing),
        ..Default::default()
    }
    .resolve();
    assert_eq!(bounds.ivt, StatBounds::new(37, 45));

    let found = search(1339, 114, 2500, &bounds);

    assert!(!found.is_empty());
    assert!(found.iter().all(|c| bounds.ivt.contains(c.ivt)));
    assert_round_trip(&found, 1339, 114);
}

#[test]
fn unreachable_readings_are_empty_not_errors() {
    let bounds = AppraisalInput {
        ivt: Some(AppraisalTier::Amazing),
        ..Default::default()
    }
    .resolve();

    assert!(search(999_999, 100, 2500, &bounds).is_empty());
    // Too low for any stamina IV in the level 19-20.5 band.
    assert!(search(1500, 100, 2500, &bounds).is_empty());
}

#[test]
fn round_trip_holds_across_bands() {
    let levels = level_table();
    let observations = [
        (1339, 114, 2500),
        (1275, 114, 2500),
        (33, 18, 200),
        (2374, 154, 10000),
    ];
    for (cp, hp, stardust) in observations {
        let found = search(cp, hp, stardust, &IvBounds::default());
        assert!(!found.is_empty(), "no spreads for cp {cp} hp {hp}");
        assert_round_trip(&found, cp, hp);
        for combination in &found {
            let cost = levels.stardust_cost(combination.level.integer(), false);
            assert_eq!(cost, Some(stardust));
        }
    }
}

#[test]
fn widening_attack_bounds_yields_superset() {
    let narrow = IvBounds {
        attack: AppraisalTier::Amazing.iv_range(),
        ..IvBounds::default()
    };
    let wide = IvBounds::default();

    let narrow_found: HashSet<Combination> = search(1339, 114, 2500, &narrow).into_iter().collect();
    let wide_found: HashSet<Combination> = search(1339, 114, 2500, &wide).into_iter().collect();

    assert!(!narrow_found.is_empty());
    assert!(narrow_found.is_subset(&wide_found));
    assert!(narrow_found.len() < wide_found.len());
}

#[test]
fn sorted_results_lead_with_best_total() {
    let found = search(1275, 114, 2500, &IvBounds::default());
    let sorted = sort_combinations(&found, SortKey::Ivt, SortOrder::Descending);
    let best = found.iter().map(|c| c.ivt).max().unwrap();

    assert_eq!(sorted[0].ivt, best);
    assert!(sorted.windows(2).all(|pair| pair[0].ivt >= pair[1].ivt));

    let by_level = sort_combinations(&sorted, SortKey::Lv, SortOrder::Ascending);
    assert!(by_level.windows(2).all(|pair| pair[0].level <= pair[1].level));
    assert_eq!(sorted[0].ivt, best);
}

#[test]
fn search_is_idempotent() {
    let bounds = IvBounds::default();
    assert_eq!(search(1275, 114, 2500, &bounds), search(1275, 114, 2500, &bounds));
}

#[test]
fn lucky_discount_selects_same_levels() {
    let observation = Observation::new(1339, 114, StardustQuery::lucky(1250));
    let lucky = compute_iv_combinations(
        &observation,
        Some(&STATS),
        &level_table(),
        &IvBounds::default(),
    );
    assert_eq!(lucky, search(1339, 114, 2500, &IvBounds::default()));
}
