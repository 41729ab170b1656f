//! Deterministic IV/CP inference shared by every Pokemon GO front-end.
//!
//! `pogo-core` owns the game's combat formulas and the two searches built on
//! them: reconstructing the hidden IVs behind an observed CP/HP reading, and
//! generating in-game search strings that separate creatures above an IV
//! threshold from those below it. Every API is a pure function over data the
//! caller supplies; content loading lives in `pogo-content`.
pub mod appraisal;
pub mod error;
pub mod filter;
pub mod level;
pub mod oracle;
pub mod search;
pub mod species;
pub mod stats;

#[cfg(test)]
mod testing;

pub use appraisal::{AppraisalInput, AppraisalTier, IvBounds, StatBounds, Team};
pub use error::{EngineError, ErrorSeverity, TableError};
pub use filter::{
    CpFilter, CpFilterOptions, IVT_TIERS, LevelWindow, build_cp_filters, build_cp_filters_with,
    compact_ranges, ivt_threshold,
};
pub use level::{Level, LevelEntry, LevelTable, StardustQuery};
pub use oracle::SpeciesOracle;
pub use search::{
    Combination, Observation, SortKey, SortOrder, compute_iv_combinations, sort_combinations,
};
pub use species::{InvalidSpeciesId, SpeciesId};
pub use stats::{BaseStats, CPM_STEPS, IvSet, MAX_IV, MAX_IVT, calc_cp, calc_hp, cpm_step};
