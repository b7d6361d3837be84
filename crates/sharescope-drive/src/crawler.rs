//! Depth-first tree crawler.
//!
//! Walks folders with an explicit work stack so very deep trees do not grow
//! the call stack. Every folder is listed to exhaustion before its
//! subfolders are expanded.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use sharescope_core::{DriveItem, SharescopeError, SharescopeResult};

use crate::client::DriveApi;

/// Largest page size Drive accepts.
const MAX_PAGE_SIZE: u32 = 1000;

/// Crawl settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CrawlConfig {
    /// Folder names whose whole subtree is left out (exact match).
    pub skip_folders: Vec<String>,
    pub page_size: u32,
    /// Abort instead of ingesting when more items than this are found.
    pub max_items: Option<usize>,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            skip_folders: vec!["Personal".to_string()],
            page_size: 200,
            max_items: None,
        }
    }
}

impl CrawlConfig {
    /// Skip-list check; files are never skipped.
    pub fn should_skip(&self, item: &DriveItem) -> bool {
        item.is_folder() && self.skip_folders.iter().any(|name| *name == item.name)
    }

    fn effective_page_size(&self) -> u32 {
        self.page_size.clamp(1, MAX_PAGE_SIZE)
    }
}

/// Crawls one subtree through a [`DriveApi`].
pub struct Crawler<'a, D: DriveApi + ?Sized> {
    api: &'a D,
    config: &'a CrawlConfig,
}

impl<'a, D: DriveApi + ?Sized> Crawler<'a, D> {
    pub fn new(api: &'a D, config: &'a CrawlConfig) -> Self {
        Self { api, config }
    }

    /// Every item below `start_id`, each reported once.
    ///
    /// Fails as a whole if any folder page cannot be listed.
    pub async fn crawl(&self, start_id: &str) -> SharescopeResult<Vec<DriveItem>> {
        info!(start_id, "Starting crawl");

        let mut stack = vec![start_id.to_string()];
        let mut expanded: HashSet<String> = HashSet::new();
        let mut seen: HashSet<String> = HashSet::new();
        let mut items = Vec::new();
        let mut skipped = 0usize;

        while let Some(folder_id) = stack.pop() {
            // A folder reachable through two parents is only listed once.
            if !expanded.insert(folder_id.clone()) {
                continue;
            }

            let children = self.list_folder(&folder_id).await?;
            let mut subfolders = Vec::new();

            for child in children {
                if self.config.should_skip(&child) {
                    debug!(folder_id = %child.id, name = %child.name, "Skipping folder");
                    skipped += 1;
                    continue;
                }
                if !seen.insert(child.id.clone()) {
                    continue;
                }
                if child.is_folder() {
                    subfolders.push(child.id.clone());
                }
                items.push(child);

                if let Some(limit) = self.config.max_items {
                    if items.len() > limit {
                        return Err(SharescopeError::CrawlLimit { limit });
                    }
                }
            }

            // Reverse so the first listed subfolder is expanded first.
            stack.extend(subfolders.into_iter().rev());
        }

        info!(items = items.len(), folders = expanded.len(), skipped, "Crawl finished");
        Ok(items)
    }

    /// All direct children of one folder, following continuation tokens.
    async fn list_folder(&self, folder_id: &str) -> SharescopeResult<Vec<DriveItem>> {
        let mut children = Vec::new();
        let mut tokens_used: HashSet<String> = HashSet::new();
        let mut page_token: Option<String> = None;
        let mut pages = 0usize;

        loop {
            let page = self
                .api
                .list_children(folder_id, page_token.as_deref(), self.config.effective_page_size())
                .await?;
            pages += 1;
            children.extend(page.files);

            match page.next_page_token {
                None => break,
                Some(token) => {
                    if !tokens_used.insert(token.clone()) {
                        return Err(SharescopeError::remote_list(
                            folder_id,
                            format!("pagination repeated token '{}'", token),
                        ));
                    }
                    page_token = Some(token);
                }
            }
        }

        debug!(folder_id, pages, children = children.len(), "Folder listed");
        Ok(children)
    }
}
