//! Species dictionary loader.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};
use crate::pokedex::{Pokedex, PokedexEntry};

/// Species dictionary structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokedexFile {
    pub pokemon: Vec<PokedexEntry>,
}

/// Loader for the species dictionary from RON files.
pub struct PokedexLoader;

impl PokedexLoader {
    /// Load the species dictionary from a RON file.
    pub fn load(path: &Path) -> LoadResult<Pokedex> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse the species dictionary from RON text.
    ///
    /// Duplicate ids are rejected.
    pub fn parse(content: &str) -> LoadResult<Pokedex> {
        let file: PokedexFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse pokedex RON: {}", e))?;

        let mut seen = HashSet::new();
        for entry in &file.pokemon {
            if !seen.insert(&entry.id) {
                anyhow::bail!("Duplicate pokedex entry: {}", entry.id);
            }
        }

        let missing = file
            .pokemon
            .iter()
            .filter(|entry| entry.stats.is_none() && !entry.id.is_form())
            .count();
        if missing > 0 {
            tracing::warn!(missing, "pokedex entries without base stats");
        }

        Ok(Pokedex::new(file.pokemon))
    }
}
