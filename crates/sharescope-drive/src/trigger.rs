//! Crawl trigger: resolve, crawl, then ingest.

use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use sharescope_core::{CrawlOutcome, GraphStore, SharescopeResult};

use crate::client::DriveApi;
use crate::crawler::{CrawlConfig, Crawler};
use crate::resolver::resolve_start_folder;

/// Crawl a subtree and merge it into the graph.
///
/// Nothing is written unless the resolver and the whole crawl succeed, so a
/// failed or abandoned call leaves the graph as it was.
pub async fn run_crawl<D, S>(
    api: &D,
    store: &S,
    folder_name: Option<&str>,
    config: &CrawlConfig,
) -> SharescopeResult<CrawlOutcome>
where
    D: DriveApi + ?Sized,
    S: GraphStore + ?Sized,
{
    let crawl_id = Uuid::new_v4();

    crawl_and_ingest(api, store, folder_name, config)
        .instrument(info_span!("crawl", %crawl_id))
        .await
}

async fn crawl_and_ingest<D, S>(
    api: &D,
    store: &S,
    folder_name: Option<&str>,
    config: &CrawlConfig,
) -> SharescopeResult<CrawlOutcome>
where
    D: DriveApi + ?Sized,
    S: GraphStore + ?Sized,
{
    let start_id = resolve_start_folder(api, folder_name).await?;
    info!(start_id = %start_id, "Starting crawl from folder");

    let items = Crawler::new(api, config).crawl(&start_id).await?;

    if !items.is_empty() {
        let crawled_at = chrono::Utc::now().to_rfc3339();
        let report = store.ingest(&items, &crawled_at).await?;
        info!(
            items = report.items,
            containment_edges = report.containment_edges,
            grants = report.grants,
            skipped_grants = report.skipped_grants,
            "Ingested crawl into graph"
        );
    }

    info!(count = items.len(), "Crawl complete");
    Ok(CrawlOutcome {
        success: true,
        count: items.len(),
    })
}
