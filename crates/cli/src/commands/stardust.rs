use anyhow::Result;
use clap::Args;

use super::load_content;
use crate::config::CliConfig;

/// List stardust cost options
#[derive(Args)]
pub struct Stardust {
    /// Show lucky (discounted) costs
    #[arg(long)]
    lucky: bool,
}

impl Stardust {
    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        let content = load_content(config)?;
        for cost in content.levels.stardust_options(self.lucky) {
            let levels: Vec<String> = content
                .levels
                .entries()
                .filter(|entry| content.levels.stardust_cost(entry.level, self.lucky) == Some(cost))
                .map(|entry| entry.level.to_string())
                .collect();
            println!("{cost:>6}  lv {}", levels.join(", "));
        }
        Ok(())
    }
}
