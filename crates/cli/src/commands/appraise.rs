use anyhow::{Result, bail};
use clap::Args;
use pogo_core::{
    AppraisalInput, AppraisalTier, Combination, MAX_IVT, Observation, SortKey, SortOrder,
    SpeciesId, SpeciesOracle, StardustQuery, Team, compute_iv_combinations, sort_combinations,
};
use serde::Serialize;

use super::{load_content, parse_species, parse_tier};
use crate::config::CliConfig;

/// List IV combinations matching a CP/HP reading
#[derive(Args)]
pub struct Appraise {
    /// Species id, e.g. 0150 or 0026A
    #[arg(long, value_parser = parse_species)]
    species: SpeciesId,

    /// Observed combat power
    #[arg(long)]
    cp: u32,

    /// Observed health points
    #[arg(long)]
    hp: u32,

    /// Stardust cost of the next power-up
    #[arg(long)]
    stardust: u32,

    /// Creature is lucky (discounted stardust)
    #[arg(long)]
    lucky: bool,

    /// Overall appraisal tier (poor, decent, strong, amazing or 0-3)
    #[arg(long, value_parser = parse_tier)]
    ivt_tier: Option<AppraisalTier>,

    /// Best-stat appraisal tier (poor, decent, strong, amazing or 0-3)
    #[arg(long, value_parser = parse_tier)]
    iv_tier: Option<AppraisalTier>,

    /// Attack was called out as a best stat
    #[arg(long)]
    att: bool,

    /// Defense was called out as a best stat
    #[arg(long)]
    def: bool,

    /// Stamina was called out as a best stat
    #[arg(long)]
    sta: bool,

    /// Sort key: ivt, att, def, sta, lv (overrides POGO_SORT_KEY)
    #[arg(long)]
    sort: Option<SortKey>,

    /// Sort order: asc or desc (overrides POGO_SORT_ORDER)
    #[arg(long)]
    order: Option<SortOrder>,

    /// Team whose leader phrases to print (overrides POGO_TEAM)
    #[arg(long, value_parser = |s: &str| Team::parse(s).ok_or_else(|| format!("unknown team {s:?}")))]
    team: Option<Team>,

    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct AppraisalReport<'a> {
    species: &'a SpeciesId,
    name: &'a str,
    observation: Observation,
    combinations: Vec<Combination>,
}

impl Appraise {
    fn input(&self) -> AppraisalInput {
        AppraisalInput {
            ivt: self.ivt_tier,
            iv: self.iv_tier,
            att: self.att,
            def: self.def,
            sta: self.sta,
        }
    }

    fn stardust(&self) -> StardustQuery {
        if self.lucky {
            StardustQuery::lucky(self.stardust)
        } else {
            StardustQuery::new(self.stardust)
        }
    }

    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        let content = load_content(config)?;
        let Some(name) = content.pokedex.name(&self.species) else {
            bail!("unknown species {}", self.species);
        };
        let stats = content.pokedex.base_stats(&self.species);
        if stats.is_none() {
            tracing::warn!(species = %self.species, "species has no base stats");
        }

        if !content.levels.stardust_options(self.lucky).contains(&self.stardust) {
            tracing::warn!(
                stardust = self.stardust,
                lucky = self.lucky,
                "stardust cost does not appear in the level table"
            );
        }

        let observation = Observation::new(self.cp, self.hp, self.stardust());
        let bounds = self.input().resolve();
        let found = compute_iv_combinations(&observation, stats.as_ref(), &content.levels, &bounds);

        let key = self.sort.unwrap_or(config.sort_key);
        let order = self.order.unwrap_or(config.sort_order);
        let combinations = sort_combinations(&found, key, order);

        if self.json {
            let report = AppraisalReport {
                species: &self.species,
                name,
                observation,
                combinations,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }

        if let Some(team) = self.team.or(config.team) {
            self.print_phrases(team, name);
        }
        print_table(name, &combinations);
        Ok(())
    }

    fn print_phrases(&self, team: Team, name: &str) {
        println!("{}:", team.leader());
        if let Some(tier) = self.ivt_tier {
            println!("  \"{}\"", team.ivt_response(tier, name));
        }
        if let Some(tier) = self.iv_tier {
            println!("  \"{}\"", team.iv_response(tier));
        }
    }
}

fn print_table(name: &str, combinations: &[Combination]) {
    if combinations.is_empty() {
        println!("No IV combinations match this {name}.");
        return;
    }

    println!("{} combination(s) for {name}", combinations.len());
    println!("{:>6} {:>4} {:>4} {:>4} {:>4} {:>5}", "lv", "att", "def", "sta", "ivt", "%");
    for combination in combinations {
        println!(
            "{:>6} {:>4} {:>4} {:>4} {:>4} {:>4}%",
            combination.level.to_string(),
            combination.attack,
            combination.defense,
            combination.stamina,
            combination.ivt,
            percent(combination.ivt),
        );
    }
}

/// IV total as a rounded percentage of the maximum.
fn percent(ivt: u8) -> u32 {
    (f64::from(ivt) / f64::from(MAX_IVT) * 100.0).round() as u32
}
