//! In-memory Drive fake for crawler tests.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;

use sharescope_core::{
    DriveItem, Owner, Permission, SharescopeError, SharescopeResult, FOLDER_MIME_TYPE,
};

use crate::client::{DriveApi, FilePage};

/// Drive fake serving pre-built pages per folder.
#[derive(Default)]
pub struct FakeDrive {
    pages: HashMap<String, Vec<Vec<DriveItem>>>,
    failing: HashSet<String>,
    calls: Mutex<Vec<String>>,
}

impl FakeDrive {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `items` as a single page of `folder_id`.
    pub fn with_folder(self, folder_id: &str, items: Vec<DriveItem>) -> Self {
        self.with_pages(folder_id, vec![items])
    }

    pub fn with_pages(mut self, folder_id: &str, pages: Vec<Vec<DriveItem>>) -> Self {
        self.pages.insert(folder_id.to_string(), pages);
        self
    }

    pub fn failing_on(mut self, folder_id: &str) -> Self {
        self.failing.insert(folder_id.to_string());
        self
    }

    /// Folder ids listed so far, one entry per page request.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DriveApi for FakeDrive {
    async fn list_children(
        &self,
        folder_id: &str,
        page_token: Option<&str>,
        _page_size: u32,
    ) -> SharescopeResult<FilePage> {
        self.calls.lock().unwrap().push(folder_id.to_string());

        if self.failing.contains(folder_id) {
            return Err(SharescopeError::remote_list(folder_id, "Drive API error (500)"));
        }

        let pages = match self.pages.get(folder_id) {
            Some(pages) => pages,
            None => return Ok(FilePage::default()),
        };
        let index: usize = page_token
            .and_then(|t| t.rsplit(':').next())
            .and_then(|n| n.parse().ok())
            .unwrap_or(0);

        let files = pages.get(index).cloned().unwrap_or_default();
        let next_page_token = (index + 1 < pages.len()).then(|| format!("{}:{}", folder_id, index + 1));
        Ok(FilePage { next_page_token, files })
    }

    async fn find_folder_by_name(&self, name: &str) -> SharescopeResult<Option<String>> {
        let mut folder_ids: Vec<&String> = self.pages.keys().collect();
        folder_ids.sort();
        for folder_id in folder_ids {
            for page in &self.pages[folder_id] {
                if let Some(hit) = page.iter().find(|i| i.is_folder() && i.name == name) {
                    return Ok(Some(hit.id.clone()));
                }
            }
        }
        Ok(None)
    }
}

pub fn folder(id: &str, name: &str, parent: &str) -> DriveItem {
    DriveItem {
        id: id.to_string(),
        name: name.to_string(),
        mime_type: FOLDER_MIME_TYPE.to_string(),
        owners: vec![Owner {
            email_address: Some("owner@x.com".to_string()),
            display_name: None,
        }],
        web_view_link: Some(format!("https://drive.google.com/drive/folders/{}", id)),
        parents: vec![parent.to_string()],
        permissions: Vec::new(),
    }
}

pub fn file(id: &str, name: &str, parent: &str) -> DriveItem {
    DriveItem {
        mime_type: "text/plain".to_string(),
        web_view_link: Some(format!("https://drive.google.com/file/d/{}/view", id)),
        ..folder(id, name, parent)
    }
}

pub fn grant(id: &str, kind: &str, email: Option<&str>, role: &str) -> Permission {
    Permission {
        id: Some(id.to_string()),
        kind: Some(kind.to_string()),
        role: Some(role.to_string()),
        email_address: email.map(String::from),
        ..Default::default()
    }
}
