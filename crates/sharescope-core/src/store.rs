//! The graph store seam.
//!
//! Ingestion and the risk analyzer only talk to the graph through this
//! trait. The Neo4j adapter and the in-memory store both implement it.

use async_trait::async_trait;

use crate::error::SharescopeResult;
use crate::findings::{
    FolderListing, GranteeFile, GranteeSummary, GraphStatistics, InheritanceFinding, IngestReport,
    PublicItem,
};
use crate::model::DriveItem;

/// Row cap for list-returning risk queries.
pub const DEFAULT_RESULT_LIMIT: usize = 100;

#[async_trait]
pub trait GraphStore: Send + Sync {
    /// Merge a complete crawl into the graph as one all-or-nothing batch.
    ///
    /// Re-ingesting the same items must not change node or edge counts.
    async fn ingest(&self, items: &[DriveItem], crawled_at: &str) -> SharescopeResult<IngestReport>;

    /// Items granted to a grantee of type `anyone`, each at most once.
    ///
    /// `limit` above [`DEFAULT_RESULT_LIMIT`] is capped to it.
    async fn public_exposure(&self, limit: usize) -> SharescopeResult<Vec<PublicItem>>;

    /// One row per (top-level folder, descendant, extra grantee), capped like
    /// [`GraphStore::public_exposure`].
    async fn broken_inheritance(&self, limit: usize) -> SharescopeResult<Vec<InheritanceFinding>>;

    async fn statistics(&self) -> SharescopeResult<GraphStatistics>;

    /// Grantees ordered by the number of items they can reach.
    async fn grantee_summary(&self) -> SharescopeResult<Vec<GranteeSummary>>;

    /// Items a grantee email can access, ordered by name.
    async fn grantee_files(&self, email: &str) -> SharescopeResult<Vec<GranteeFile>>;

    /// Direct children of a folder; `"root"` lists the children of every root item.
    async fn browse_folder(&self, folder_id: &str) -> SharescopeResult<FolderListing>;
}
