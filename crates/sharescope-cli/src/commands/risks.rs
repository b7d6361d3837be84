//! Access-risk report commands.

use anyhow::Result;
use clap::Subcommand;

use sharescope_core::{GraphStore, DEFAULT_RESULT_LIMIT};

use crate::config::AppConfig;
use crate::output;

#[derive(Subcommand)]
pub enum RisksCommands {
    /// Items shared with anyone
    Public {
        /// Maximum rows to return (at most 100)
        #[arg(long, default_value_t = DEFAULT_RESULT_LIMIT)]
        limit: usize,
        /// Print rows as JSON
        #[arg(long)]
        json: bool,
    },

    /// Items reachable by grantees who lack access to the top-level folder
    Inheritance {
        /// Maximum rows to return (at most 100)
        #[arg(long, default_value_t = DEFAULT_RESULT_LIMIT)]
        limit: usize,
        /// Print rows as JSON
        #[arg(long)]
        json: bool,
    },
}

pub async fn execute(cmd: RisksCommands, config: &AppConfig) -> Result<()> {
    let client = super::connect_graph(&config.graph).await?;

    match cmd {
        RisksCommands::Public { limit, json } => {
            let items = client.public_exposure(limit).await?;
            if json {
                return super::print_json(&items);
            }
            output::print_public_items(&items);
        }
        RisksCommands::Inheritance { limit, json } => {
            let findings = client.broken_inheritance(limit).await?;
            if json {
                return super::print_json(&findings);
            }
            output::print_findings(&findings);
        }
    }

    Ok(())
}
