use anyhow::Result;
use clap::Args;
use pogo_core::SpeciesOracle;

use super::load_content;
use crate::config::CliConfig;

/// List species in the content bundle
#[derive(Args)]
pub struct ListSpecies {
    /// Filter by name fragment or id prefix
    #[arg(long)]
    query: Option<String>,
}

impl ListSpecies {
    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        let content = load_content(config)?;
        let pokedex = &content.pokedex;

        let entries: Vec<_> = match &self.query {
            Some(query) => pokedex.search(query).collect(),
            None => pokedex.list().collect(),
        };

        for entry in entries {
            match pokedex.base_stats(&entry.id) {
                Some(stats) => println!(
                    "{:<6} {:<20} {:>3}/{:>3}/{:>3}",
                    entry.id, entry.name, stats.attack, stats.defense, stats.stamina
                ),
                None => println!("{:<6} {:<20} -", entry.id, entry.name),
            }
        }
        Ok(())
    }
}
