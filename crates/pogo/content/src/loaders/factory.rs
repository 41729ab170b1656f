//! Content factory for building the content bundle from data files.

use std::path::{Path, PathBuf};

use pogo_core::LevelTable;

use crate::encounter::{Encounter, EncounterKind};
use crate::loaders::{LoadResult, PokedexLoader, UpgradeLoader, UpgradeSettings};
use crate::pokedex::Pokedex;

/// Everything the engine needs, loaded once.
#[derive(Debug, Clone)]
pub struct Content {
    pub pokedex: Pokedex,
    pub levels: LevelTable,
    pub encounters: Vec<Encounter>,
}

impl Content {
    pub fn encounter(&self, kind: EncounterKind) -> Option<&Encounter> {
        self.encounters.iter().find(|encounter| encounter.kind == kind)
    }
}

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── upgrade.toml
/// └── pokedex.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load level tables and encounters from `upgrade.toml`.
    pub fn load_upgrade(&self) -> LoadResult<UpgradeSettings> {
        let path = self.data_dir.join("upgrade.toml");
        UpgradeLoader::load(&path)
    }

    /// Load the species dictionary from `pokedex.ron`.
    pub fn load_pokedex(&self) -> LoadResult<Pokedex> {
        let path = self.data_dir.join("pokedex.ron");
        PokedexLoader::load(&path)
    }

    /// Load the full content bundle.
    pub fn load(&self) -> LoadResult<Content> {
        let UpgradeSettings { levels, encounters } = self.load_upgrade()?;
        let pokedex = self.load_pokedex()?;

        tracing::info!(
            data_dir = %self.data_dir.display(),
            species = pokedex.len(),
            max_level = levels.max_level(),
            "content loaded"
        );

        Ok(Content {
            pokedex,
            levels,
            encounters,
        })
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
