//! CP, HP and half-level multiplier formulas.

use super::base::{BaseStats, IvSet};

/// Lowest HP the game ever reports.
pub const MIN_HP: u32 = 10;

/// Lowest CP the game ever reports.
pub const MIN_CP: u32 = 10;

/// Squared-multiplier increments between an integer level and its half level,
/// indexed by `⌊level / 10⌋`.
///
/// Values from the gamemaster; see <https://pokemongo.gamepress.gg/cp-multiplier>.
pub const CPM_STEPS: [f64; 4] = [
    0.009426125469,
    0.008919025675,
    0.008924905903,
    0.00445946079,
];

/// Health points at multiplier `cpm`.
pub fn calc_hp(cpm: f64, base_stamina: u16, iv_stamina: u8) -> u32 {
    let hp = (cpm * f64::from(base_stamina + u16::from(iv_stamina))).floor();
    (hp as u32).max(MIN_HP)
}

/// Combat power at multiplier `cpm`.
pub fn calc_cp(cpm: f64, stats: &BaseStats, ivs: &IvSet) -> u32 {
    let attack = f64::from(stats.attack + u16::from(ivs.attack)) * cpm;
    let defense = f64::from(stats.defense + u16::from(ivs.defense)) * cpm;
    let stamina = f64::from(stats.stamina + u16::from(ivs.stamina)) * cpm;

    let cp = (0.1 * attack * defense.sqrt() * stamina.sqrt()).floor();
    (cp as u32).max(MIN_CP)
}

/// Multiplier of the half level above integer `level`.
///
/// Returns `None` when the level lies past the step table, which is how the
/// level cap ends up without a half step.
pub fn cpm_step(cpm: f64, level: u32) -> Option<f64> {
    let step = CPM_STEPS.get((level / 10) as usize)?;
    Some((cpm * cpm + step).sqrt())
}
