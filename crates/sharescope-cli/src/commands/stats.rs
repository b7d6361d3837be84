//! Statistics command.

use anyhow::Result;
use clap::Args;

use sharescope_core::GraphStore;

use crate::config::AppConfig;
use crate::output;

#[derive(Args)]
pub struct StatsArgs {
    /// Print statistics as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn execute(args: StatsArgs, config: &AppConfig) -> Result<()> {
    let client = super::connect_graph(&config.graph).await?;
    let stats = client.statistics().await?;

    if args.json {
        super::print_json(&stats)
    } else {
        output::print_statistics(&stats);
        Ok(())
    }
}
