use anyhow::{Context, Result, bail};
use clap::Args;
use pogo_content::EncounterKind;
use pogo_core::{
    CpFilterOptions, IVT_TIERS, SpeciesId, SpeciesOracle, build_cp_filters_with, ivt_threshold,
};

use super::{load_content, parse_species};
use crate::config::CliConfig;

/// Generate pass/fail search strings for an IV threshold
#[derive(Args)]
pub struct CpFilterCmd {
    /// Species id, e.g. 0150 or 0026A
    #[arg(long, value_parser = parse_species)]
    species: SpeciesId,

    /// Threshold tier: 0 = 100%, 1 = 91%, ... 10 = 0%
    #[arg(long, default_value_t = 0)]
    tier: usize,

    /// Minimum attack IV to pass
    #[arg(long, default_value_t = 0)]
    min_att: u8,

    /// Minimum defense IV to pass
    #[arg(long, default_value_t = 0)]
    min_def: u8,

    /// Minimum stamina IV to pass
    #[arg(long, default_value_t = 0)]
    min_sta: u8,

    /// Restrict levels to an encounter kind (wild, hatch, raid, quest)
    #[arg(long)]
    encounter: Option<EncounterKind>,

    /// Apply the encounter's weather-boost levels and IV floor
    #[arg(long, requires = "encounter")]
    weather: bool,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

impl CpFilterCmd {
    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        let content = load_content(config)?;

        let Some(min_ivt) = ivt_threshold(self.tier) else {
            bail!("tier must be between 0 and {}", IVT_TIERS.len() - 1);
        };
        let stats = content
            .pokedex
            .base_stats(&self.species)
            .with_context(|| format!("no base stats for species {}", self.species))?;

        let mut options =
            CpFilterOptions::new(min_ivt).with_min_ivs(self.min_att, self.min_def, self.min_sta);
        if let Some(kind) = self.encounter {
            let encounter = content
                .encounter(kind)
                .with_context(|| format!("content has no {kind} encounter levels"))?;
            options = encounter.filter_options(options, self.weather);
        }

        let filter = build_cp_filters_with(&content.levels, &stats, &self.species, &options);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&filter)?);
        } else {
            println!("pass: {}", filter.pass);
            println!("fail: {}", filter.fail);
        }
        Ok(())
    }
}
