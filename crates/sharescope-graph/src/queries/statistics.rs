//! Aggregate graph statistics.

use anyhow::Result;
use neo4rs::Query;

use sharescope_core::GraphStatistics;

use crate::GraphClient;

/// Item, folder, grantee and grant counts. An empty graph yields zeros.
pub async fn statistics(client: &GraphClient) -> Result<GraphStatistics> {
    let items_query = Query::new(
        "MATCH (i:Item)
         RETURN count(i) as total,
                count(CASE WHEN size([(i)-[:CONTAINS]->() | 1]) > 0 THEN 1 END) as folders"
            .to_string(),
    );
    let rows = client.query(items_query).await?;
    let (total, folders) = match rows.into_iter().next() {
        Some(row) => (
            row.get::<i64>("total").unwrap_or(0),
            row.get::<i64>("folders").unwrap_or(0),
        ),
        None => (0, 0),
    };

    let grantees: i64 = client
        .query_scalar(Query::new("MATCH (g:Grantee) RETURN count(g) as count".to_string()), "count")
        .await?
        .unwrap_or(0);

    let grants: i64 = client
        .query_scalar(
            Query::new("MATCH (:Grantee)-[p:HAS_PERMISSION]->(:Item) RETURN count(p) as count".to_string()),
            "count",
        )
        .await?
        .unwrap_or(0);

    Ok(GraphStatistics::from_counts(
        total.max(0) as u64,
        folders.max(0) as u64,
        grantees.max(0) as u64,
        grants.max(0) as u64,
    ))
}

/// Most recent `lastCrawledAt` stamp, if anything has been ingested.
pub async fn last_crawled_at(client: &GraphClient) -> Result<Option<String>> {
    let query = Query::new("MATCH (i:Item) RETURN max(i.lastCrawledAt) as last".to_string());
    let last: Option<Option<String>> = client.query_scalar(query, "last").await?;
    Ok(last.flatten())
}
