//! Query result rows and crawl/ingest reports.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Result of a crawl trigger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrawlOutcome {
    pub success: bool,
    pub count: usize,
}

/// Statement counts issued by one ingestion batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestReport {
    pub items: usize,
    pub containment_edges: usize,
    pub grants: usize,
    pub skipped_grants: usize,
}

/// An item shared with "anyone".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicItem {
    pub id: String,
    pub name: String,
    pub owner: String,
    pub web_view_link: String,
}

/// A grantee reaching a descendant without direct access to its top-level folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InheritanceFinding {
    pub name: String,
    pub link: String,
    pub extra_user: String,
    pub parent_name: String,
    pub top_level_folder: String,
}

/// Aggregate graph counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphStatistics {
    pub total_files: u64,
    pub folder_count: u64,
    pub file_count: u64,
    pub user_count: u64,
    pub permission_count: u64,
}

impl GraphStatistics {
    /// Build from raw counts, deriving `file_count`.
    pub fn from_counts(total_files: u64, folder_count: u64, user_count: u64, permission_count: u64) -> Self {
        Self {
            total_files,
            folder_count,
            file_count: total_files.saturating_sub(folder_count),
            user_count,
            permission_count,
        }
    }
}

/// A grantee and how many items it can reach.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GranteeSummary {
    pub email: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub file_count: u64,
}

/// An item a given grantee can access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GranteeFile {
    pub id: String,
    pub name: String,
    pub web_view_link: String,
    pub role: String,
}

/// A grant shown next to a browsed entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryGrant {
    #[serde(rename = "type")]
    pub kind: String,
    pub email: String,
    pub role: String,
}

/// One direct child of a browsed folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowseEntry {
    pub id: String,
    pub name: String,
    pub is_folder: bool,
    pub permissions: Vec<EntryGrant>,
}

/// Children of a folder, split by kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderListing {
    pub folders: Vec<BrowseEntry>,
    pub files: Vec<BrowseEntry>,
}

impl FolderListing {
    pub fn from_entries(entries: impl IntoIterator<Item = BrowseEntry>) -> Self {
        let (folders, files) = entries.into_iter().partition(|e| e.is_folder);
        Self { folders, files }
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty() && self.files.is_empty()
    }
}

/// Group inheritance findings by their top-level folder, in name order.
pub fn group_by_top_level_folder(
    findings: &[InheritanceFinding],
) -> BTreeMap<&str, Vec<&InheritanceFinding>> {
    let mut groups: BTreeMap<&str, Vec<&InheritanceFinding>> = BTreeMap::new();
    for finding in findings {
        groups
            .entry(finding.top_level_folder.as_str())
            .or_default()
            .push(finding);
    }
    groups
}
