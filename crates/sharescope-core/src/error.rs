//! Centralized error types for Sharescope.

use thiserror::Error;

/// Main error type for crawl, ingestion and query operations.
#[derive(Error, Debug)]
pub enum SharescopeError {
    #[error("Credential error: {0}")]
    Credential(String),

    #[error("Folder not found: {0}")]
    NotFound(String),

    #[error("Failed to list folder '{folder_id}': {message}")]
    RemoteList { folder_id: String, message: String },

    #[error("Crawl aborted: more than {limit} items discovered")]
    CrawlLimit { limit: usize },

    #[error("Graph ingestion failed: {0}")]
    IngestionWrite(String),

    #[error("Graph store query failed: {0}")]
    StoreConnectivity(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for Sharescope operations.
pub type SharescopeResult<T> = Result<T, SharescopeError>;

impl SharescopeError {
    /// Create a remote listing error for a folder.
    pub fn remote_list(folder_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::RemoteList {
            folder_id: folder_id.into(),
            message: message.into(),
        }
    }

    /// Create an ingestion error.
    pub fn ingestion(msg: impl Into<String>) -> Self {
        Self::IngestionWrite(msg.into())
    }

    /// Create a query-time store error.
    pub fn store(msg: impl Into<String>) -> Self {
        Self::StoreConnectivity(msg.into())
    }

    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
