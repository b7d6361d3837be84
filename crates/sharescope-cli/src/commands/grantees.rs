//! Grantee report commands.

use anyhow::Result;
use clap::Subcommand;

use sharescope_core::GraphStore;

use crate::config::AppConfig;
use crate::output;

#[derive(Subcommand)]
pub enum GranteeCommands {
    /// List grantees by the number of items they can access
    List {
        /// Print rows as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the items a grantee can access
    Files {
        /// Grantee email, domain, or "anyone"
        email: String,
        /// Print rows as JSON
        #[arg(long)]
        json: bool,
    },
}

pub async fn execute(cmd: GranteeCommands, config: &AppConfig) -> Result<()> {
    let client = super::connect_graph(&config.graph).await?;

    match cmd {
        GranteeCommands::List { json } => {
            let grantees = client.grantee_summary().await?;
            if json {
                return super::print_json(&grantees);
            }
            output::print_grantees(&grantees);
        }
        GranteeCommands::Files { email, json } => {
            let files = client.grantee_files(&email).await?;
            if json {
                return super::print_json(&files);
            }
            output::print_grantee_files(&email, &files);
        }
    }

    Ok(())
}
