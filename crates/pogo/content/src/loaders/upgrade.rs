//! Level-upgrade settings loader.
//!
//! ```toml
//! [upgrade]
//! cp_multipliers = [0.094, 0.16639787, ...]
//! stardust_costs = [200, 200, ...]
//! lucky_stardust_scalar = 0.5
//!
//! [[encounters]]
//! kind = "wild"
//! min_level = 1
//! max_level = 30
//! weather_level_bonus = 5
//! weather_min_iv = 4
//! ```

use std::path::Path;

use pogo_core::LevelTable;
use serde::{Deserialize, Serialize};

use crate::encounter::{Encounter, EncounterKind};
use crate::loaders::{LoadResult, read_file};

/// Raw `[upgrade]` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpgradeTable {
    pub cp_multipliers: Vec<f64>,
    pub stardust_costs: Vec<u32>,
    #[serde(default = "default_lucky_scalar")]
    pub lucky_stardust_scalar: f64,
}

fn default_lucky_scalar() -> f64 {
    LevelTable::DEFAULT_LUCKY_SCALAR
}

/// File layout of `upgrade.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpgradeFile {
    pub upgrade: UpgradeTable,
    #[serde(default)]
    pub encounters: Vec<Encounter>,
}

/// Validated upgrade settings.
#[derive(Debug, Clone)]
pub struct UpgradeSettings {
    pub levels: LevelTable,
    pub encounters: Vec<Encounter>,
}

impl UpgradeSettings {
    pub fn encounter(&self, kind: EncounterKind) -> Option<&Encounter> {
        self.encounters.iter().find(|encounter| encounter.kind == kind)
    }
}

/// Loader for level-upgrade settings from TOML files.
pub struct UpgradeLoader;

impl UpgradeLoader {
    /// Load upgrade settings from a TOML file.
    pub fn load(path: &Path) -> LoadResult<UpgradeSettings> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse upgrade settings from TOML text.
    pub fn parse(content: &str) -> LoadResult<UpgradeSettings> {
        let file: UpgradeFile = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse upgrade TOML: {}", e))?;

        let UpgradeTable {
            cp_multipliers,
            stardust_costs,
            lucky_stardust_scalar,
        } = file.upgrade;

        let levels = LevelTable::new(cp_multipliers, stardust_costs)
            .map_err(|e| anyhow::anyhow!("Invalid level table: {}", e))?
            .with_lucky_scalar(lucky_stardust_scalar);

        for encounter in &file.encounters {
            if encounter.min_level == 0 || encounter.min_level > encounter.max_level {
                anyhow::bail!(
                    "Invalid {} encounter levels: {}..={}",
                    encounter.kind,
                    encounter.min_level,
                    encounter.max_level
                );
            }
        }

        tracing::debug!(
            max_level = levels.max_level(),
            encounters = file.encounters.len(),
            "upgrade settings parsed"
        );

        Ok(UpgradeSettings {
            levels,
            encounters: file.encounters,
        })
    }
}
