//! Folder browsing command.

use anyhow::Result;
use clap::Args;

use sharescope_core::{GraphStore, ROOT_FOLDER_ID};

use crate::config::AppConfig;
use crate::output;

#[derive(Args)]
pub struct BrowseArgs {
    /// Folder id to list; "root" lists the top of every crawled tree
    #[arg(default_value = ROOT_FOLDER_ID)]
    pub folder_id: String,

    /// Print the listing as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn execute(args: BrowseArgs, config: &AppConfig) -> Result<()> {
    let client = super::connect_graph(&config.graph).await?;
    let listing = client.browse_folder(&args.folder_id).await?;

    if args.json {
        super::print_json(&listing)
    } else {
        output::print_listing(&args.folder_id, &listing);
        Ok(())
    }
}
