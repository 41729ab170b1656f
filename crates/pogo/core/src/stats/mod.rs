//! Species stats, individual values and the combat formulas over them.
//!
//! # Formulas
//!
//! ```text
//! HP = max(10, ⌊cpm × (baseSta + ivSta)⌋)
//! CP = max(10, ⌊0.1 × atk × √def × √sta⌋)   where stat = (base + iv) × cpm
//! half-level cpm = √(cpm² + CPM_STEPS[⌊level / 10⌋])
//! ```
//!
//! The IV search and the CP filter both go through these functions, so a
//! combination found by one is always reproducible by the other.

pub mod base;
pub mod formula;

pub use base::{BaseStats, IvSet, MAX_IV, MAX_IVT};
pub use formula::{CPM_STEPS, MIN_CP, MIN_HP, calc_cp, calc_hp, cpm_step};
