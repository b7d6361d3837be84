//! Crawl command.

use std::time::Duration;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use sharescope_core::{AccessToken, GraphStore};
use sharescope_drive::{run_crawl, DriveClient};
use sharescope_graph::{schema, MemoryGraph};

use crate::config::{AppConfig, ACCESS_TOKEN_ENV};
use crate::output;

#[derive(Args)]
pub struct CrawlArgs {
    /// Name of the folder to start from (defaults to the Drive root)
    #[arg(long)]
    pub folder: Option<String>,

    /// OAuth access token for the Drive API
    #[arg(long, env = ACCESS_TOKEN_ENV, hide_env_values = true)]
    pub token: Option<String>,

    /// Crawl into an in-memory graph and print statistics, leaving Neo4j untouched
    #[arg(long)]
    pub memory: bool,

    /// Print the outcome as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn execute(args: CrawlArgs, config: &AppConfig) -> Result<()> {
    // Checked before any remote call.
    let token = AccessToken::from_option(args.token)?;
    let drive = DriveClient::new(token, &config.drive)?;
    let folder = args.folder.as_deref();

    if args.memory {
        let store = MemoryGraph::new();
        let spinner = crawl_spinner(folder)?;
        let result = run_crawl(&drive, &store, folder, &config.crawl).await;
        spinner.finish_and_clear();
        let outcome = result?;

        if args.json {
            return super::print_json(&outcome);
        }
        output::print_crawl_outcome(&outcome);
        println!();
        output::print_statistics(&store.statistics().await?);
        return Ok(());
    }

    let client = super::connect_graph(&config.graph).await?;
    schema::initialize_schema(&client).await?;

    let spinner = crawl_spinner(folder)?;
    let result = run_crawl(&drive, &client, folder, &config.crawl).await;
    spinner.finish_and_clear();
    let outcome = result?;

    if args.json {
        super::print_json(&outcome)
    } else {
        output::print_crawl_outcome(&outcome);
        Ok(())
    }
}

fn crawl_spinner(folder: Option<&str>) -> Result<ProgressBar> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")?);
    spinner.set_message(format!(
        "Crawling {}...",
        folder.unwrap_or("root").bold()
    ));
    spinner.enable_steady_tick(Duration::from_millis(120));
    Ok(spinner)
}
