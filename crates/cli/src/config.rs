//! CLI configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use pogo_core::{SortKey, SortOrder, Team};

/// Defaults the command-line flags fall back to.
#[derive(Clone, Debug)]
pub struct CliConfig {
    pub data_dir: PathBuf,
    pub team: Option<Team>,
    pub sort_key: SortKey,
    pub sort_order: SortOrder,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(Self::DEFAULT_DATA_DIR),
            team: None,
            sort_key: SortKey::default(),
            sort_order: SortOrder::default(),
        }
    }
}

impl CliConfig {
    pub const DEFAULT_DATA_DIR: &'static str = "data";

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `POGO_DATA_DIR` - Content directory (default: `data`)
    /// - `POGO_TEAM` - Team name or index for appraisal phrases (default: none)
    /// - `POGO_SORT_KEY` - Combination sort key: ivt, att, def, sta, lv (default: ivt)
    /// - `POGO_SORT_ORDER` - asc/desc or 1/-1 (default: desc)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds configuration from any key lookup; unparseable values keep defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = lookup("POGO_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }

        config.team = lookup("POGO_TEAM").and_then(|team| Team::parse(&team));

        if let Some(key) = lookup("POGO_SORT_KEY").and_then(|key| key.parse().ok()) {
            config.sort_key = key;
        }

        if let Some(order) = lookup("POGO_SORT_ORDER").and_then(|order| order.parse().ok()) {
            config.sort_order = order;
        }

        config
    }
}
