//! Graph maintenance commands.

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;

use sharescope_graph::queries::statistics;
use sharescope_graph::{schema, GraphClient};

use crate::config::AppConfig;

#[derive(Subcommand)]
pub enum GraphCommands {
    /// Create constraints and indexes
    Init,

    /// Show graph status
    Status,

    /// Delete every node and relationship
    Reset {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

pub async fn execute(cmd: GraphCommands, config: &AppConfig) -> Result<()> {
    let client = super::connect_graph(&config.graph).await?;

    match cmd {
        GraphCommands::Init => cmd_init(&client).await,
        GraphCommands::Status => cmd_status(&client, config).await,
        GraphCommands::Reset { yes } => cmd_reset(&client, yes).await,
    }
}

async fn cmd_init(client: &GraphClient) -> Result<()> {
    schema::initialize_schema(client).await?;
    println!("{}", "Graph schema initialized.".green());
    Ok(())
}

/// Show graph status (node/relationship counts, last crawl time).
async fn cmd_status(client: &GraphClient, config: &AppConfig) -> Result<()> {
    println!("{}", "Sharing Graph Status".bold());
    println!("{}", "─".repeat(40));

    println!("  Server:        {}", config.graph.uri.cyan());
    let counts = client.get_counts().await?;
    println!("  Nodes:         {}", counts.nodes.to_string().cyan());
    println!("  Relationships: {}", counts.relationships.to_string().cyan());

    match statistics::last_crawled_at(client).await? {
        Some(time) => println!("  Last crawl:    {}", time.green()),
        None => println!("  Last crawl:    {}", "never".yellow()),
    }

    println!("{}", "─".repeat(40));

    Ok(())
}

async fn cmd_reset(client: &GraphClient, yes: bool) -> Result<()> {
    if !yes {
        anyhow::bail!("Refusing to delete the graph without --yes");
    }
    schema::reset_graph(client).await?;
    println!("{}", "Graph cleared.".yellow());
    Ok(())
}
