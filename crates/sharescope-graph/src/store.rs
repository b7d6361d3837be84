//! [`GraphStore`] implementation for the Neo4j client.

use async_trait::async_trait;

use sharescope_core::{
    DriveItem, FolderListing, GranteeFile, GranteeSummary, GraphStatistics, GraphStore,
    InheritanceFinding, IngestReport, PublicItem, SharescopeError, SharescopeResult,
    DEFAULT_RESULT_LIMIT,
};

use crate::queries::{browse, grantees, risks, statistics};
use crate::{ingest, GraphClient};

fn read_error(err: anyhow::Error) -> SharescopeError {
    SharescopeError::store(format!("{:#}", err))
}

#[async_trait]
impl GraphStore for GraphClient {
    async fn ingest(&self, items: &[DriveItem], crawled_at: &str) -> SharescopeResult<IngestReport> {
        ingest::ingest_items(self, items, crawled_at)
            .await
            .map_err(|e| SharescopeError::ingestion(format!("{:#}", e)))
    }

    async fn public_exposure(&self, limit: usize) -> SharescopeResult<Vec<PublicItem>> {
        risks::public_exposure(self, limit.min(DEFAULT_RESULT_LIMIT)).await.map_err(read_error)
    }

    async fn broken_inheritance(&self, limit: usize) -> SharescopeResult<Vec<InheritanceFinding>> {
        risks::broken_inheritance(self, limit.min(DEFAULT_RESULT_LIMIT)).await.map_err(read_error)
    }

    async fn statistics(&self) -> SharescopeResult<GraphStatistics> {
        statistics::statistics(self).await.map_err(read_error)
    }

    async fn grantee_summary(&self) -> SharescopeResult<Vec<GranteeSummary>> {
        grantees::grantee_summary(self).await.map_err(read_error)
    }

    async fn grantee_files(&self, email: &str) -> SharescopeResult<Vec<GranteeFile>> {
        if email.trim().is_empty() {
            return Err(SharescopeError::validation("grantee email is required"));
        }
        grantees::grantee_files(self, email.trim()).await.map_err(read_error)
    }

    async fn browse_folder(&self, folder_id: &str) -> SharescopeResult<FolderListing> {
        browse::browse_folder(self, folder_id).await.map_err(read_error)
    }
}
