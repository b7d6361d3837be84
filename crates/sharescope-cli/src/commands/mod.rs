//! CLI command definitions and handlers.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use sharescope_graph::{GraphClient, GraphConfig};

use crate::config::AppConfig;

pub mod browse;
pub mod crawl;
pub mod grantees;
pub mod graph;
pub mod risks;
pub mod stats;

/// Sharescope - Drive sharing inventory and access-risk reports
#[derive(Parser)]
#[command(name = "sharescope")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to sharescope.toml (defaults to ./sharescope.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Also write logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Crawl Drive and merge the result into the graph
    Crawl(crawl::CrawlArgs),

    /// Access-risk reports
    #[command(subcommand)]
    Risks(risks::RisksCommands),

    /// Show aggregate graph statistics
    Stats(stats::StatsArgs),

    /// Grantee reports
    #[command(subcommand)]
    Grantees(grantees::GranteeCommands),

    /// List the children of a folder in the graph
    Browse(browse::BrowseArgs),

    /// Graph maintenance commands
    #[command(subcommand)]
    Graph(graph::GraphCommands),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        let config = AppConfig::load(self.config.as_deref())?;

        match self.command {
            Commands::Crawl(args) => crawl::execute(args, &config).await,
            Commands::Risks(cmd) => risks::execute(cmd, &config).await,
            Commands::Stats(args) => stats::execute(args, &config).await,
            Commands::Grantees(cmd) => grantees::execute(cmd, &config).await,
            Commands::Browse(args) => browse::execute(args, &config).await,
            Commands::Graph(cmd) => graph::execute(cmd, &config).await,
        }
    }
}

/// Connect to Neo4j, failing fast when the server is unreachable.
pub(crate) async fn connect_graph(config: &GraphConfig) -> Result<GraphClient> {
    tracing::debug!(uri = %config.uri, database = %config.database, "Connecting to Neo4j");
    tokio::time::timeout(Duration::from_secs(10), GraphClient::connect(config))
        .await
        .with_context(|| format!("Timed out connecting to Neo4j at {}", config.uri))?
        .with_context(|| format!("Could not connect to Neo4j at {}", config.uri))
}

/// Print a value as pretty JSON on stdout.
pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_crawl_with_folder() {
        let cli = Cli::try_parse_from(["sharescope", "crawl", "--folder", "Projects", "--token", "tok"]).unwrap();
        match cli.command {
            Commands::Crawl(args) => {
                assert_eq!(args.folder.as_deref(), Some("Projects"));
                assert_eq!(args.token.as_deref(), Some("tok"));
                assert!(!args.memory);
            }
            _ => panic!("expected crawl"),
        }
    }

    #[test]
    fn test_parse_risk_limits() {
        let cli = Cli::try_parse_from(["sharescope", "risks", "inheritance", "--limit", "25", "--json"]).unwrap();
        match cli.command {
            Commands::Risks(risks::RisksCommands::Inheritance { limit, json }) => {
                assert_eq!(limit, 25);
                assert!(json);
            }
            _ => panic!("expected risks inheritance"),
        }
    }

    #[test]
    fn test_browse_defaults_to_root() {
        let cli = Cli::try_parse_from(["sharescope", "browse"]).unwrap();
        match cli.command {
            Commands::Browse(args) => assert_eq!(args.folder_id, "root"),
            _ => panic!("expected browse"),
        }
    }

    #[test]
    fn test_reset_defaults_to_unconfirmed() {
        let cli = Cli::try_parse_from(["sharescope", "graph", "reset"]).unwrap();
        assert!(matches!(cli.command, Commands::Graph(graph::GraphCommands::Reset { yes: false })));
    }
}
