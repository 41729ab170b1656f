//! Subcommand implementations.

mod appraise;
mod cp_filter;
mod species;
mod stardust;

pub use appraise::Appraise;
pub use cp_filter::CpFilterCmd;
pub use species::ListSpecies;
pub use stardust::Stardust;

use anyhow::{Context, Result};
use pogo_content::{Content, ContentFactory};
use pogo_core::{AppraisalTier, SpeciesId};

use crate::config::CliConfig;

pub(crate) fn load_content(config: &CliConfig) -> Result<Content> {
    ContentFactory::new(&config.data_dir)
        .load()
        .with_context(|| format!("loading content from {}", config.data_dir.display()))
}

/// Accepts a tier name (`amazing`) or index (`3`).
pub(crate) fn parse_tier(value: &str) -> Result<AppraisalTier, String> {
    value
        .parse()
        .ok()
        .or_else(|| value.parse::<usize>().ok().and_then(AppraisalTier::from_index))
        .ok_or_else(|| format!("unknown appraisal tier {value:?} (poor, decent, strong, amazing or 0-3)"))
}

pub(crate) fn parse_species(value: &str) -> Result<SpeciesId, String> {
    value.parse().map_err(|e| format!("{e}"))
}
