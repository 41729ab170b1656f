//! Data-driven content definitions and loaders.
//!
//! This crate turns the curated content bundle into the plain data the engine
//! consumes:
//! - Species dictionary with base stats (data-driven via RON)
//! - CP multipliers, stardust costs and lucky discount (data-driven via TOML)
//! - Encounter level ranges (data-driven via TOML)
//!
//! Content is read-only once loaded; the engine never sees file formats.

pub mod encounter;
pub mod pokedex;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use encounter::{Encounter, EncounterKind};
pub use pokedex::{Pokedex, PokedexEntry, Species};

#[cfg(feature = "loaders")]
pub use loaders::{Content, ContentFactory, PokedexLoader, UpgradeLoader, UpgradeSettings};
