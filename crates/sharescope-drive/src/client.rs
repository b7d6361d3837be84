//! Drive v3 HTTP client.
//!
//! Only two calls are needed: list the children of a folder one page at a
//! time, and look a folder up by name.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::debug;

use sharescope_core::{AccessToken, DriveItem, SharescopeError, SharescopeResult, FOLDER_MIME_TYPE};

/// Default Drive API base URL.
pub const DEFAULT_DRIVE_API: &str = "https://www.googleapis.com/drive/v3";

/// Fields requested for every listed item.
const LIST_FIELDS: &str =
    "nextPageToken, files(id, name, owners, webViewLink, parents, permissions, mimeType)";

/// Remote listing and search capability the crawler depends on.
#[async_trait]
pub trait DriveApi: Send + Sync {
    /// Fetch one page of the non-trashed direct children of `folder_id`.
    async fn list_children(
        &self,
        folder_id: &str,
        page_token: Option<&str>,
        page_size: u32,
    ) -> SharescopeResult<FilePage>;

    /// Id of the first non-trashed folder named exactly `name`.
    async fn find_folder_by_name(&self, name: &str) -> SharescopeResult<Option<String>>;
}

/// One page of a `files.list` response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilePage {
    #[serde(default)]
    pub next_page_token: Option<String>,
    #[serde(default)]
    pub files: Vec<DriveItem>,
}

/// HTTP settings for the Drive client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DriveConfig {
    pub api_base: String,
    pub timeout_secs: u64,
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_DRIVE_API.to_string(),
            timeout_secs: 30,
        }
    }
}

/// Drive client bound to a single access token.
#[derive(Clone)]
pub struct DriveClient {
    base_url: String,
    token: AccessToken,
    client: reqwest::Client,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    files: Vec<SearchHit>,
}

#[derive(Deserialize)]
struct SearchHit {
    id: String,
}

impl DriveClient {
    pub fn new(token: AccessToken, config: &DriveConfig) -> SharescopeResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SharescopeError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: config.api_base.trim_end_matches('/').to_string(),
            token,
            client,
        })
    }

    async fn get_files<T: serde::de::DeserializeOwned>(
        &self,
        params: &[(&str, String)],
        context: &str,
    ) -> SharescopeResult<T> {
        let response = self
            .client
            .get(format!("{}/files", self.base_url))
            .bearer_auth(self.token.secret())
            .query(params)
            .send()
            .await
            .map_err(|e| SharescopeError::remote_list(context, format!("request failed: {}", e)))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(SharescopeError::Credential(format!(
                "Drive rejected the access token while listing '{}'",
                context
            )));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SharescopeError::remote_list(
                context,
                format!("Drive API error ({}): {}", status, body),
            ));
        }

        response
            .json()
            .await
            .map_err(|e| SharescopeError::remote_list(context, format!("invalid response: {}", e)))
    }
}

#[async_trait]
impl DriveApi for DriveClient {
    async fn list_children(
        &self,
        folder_id: &str,
        page_token: Option<&str>,
        page_size: u32,
    ) -> SharescopeResult<FilePage> {
        let mut params = vec![
            ("q", children_query(folder_id)),
            ("fields", LIST_FIELDS.to_string()),
            ("pageSize", page_size.to_string()),
        ];
        if let Some(token) = page_token {
            params.push(("pageToken", token.to_string()));
        }

        let page: FilePage = self.get_files(&params, folder_id).await?;
        debug!(folder_id, files = page.files.len(), more = page.next_page_token.is_some(), "Listed page");
        Ok(page)
    }

    async fn find_folder_by_name(&self, name: &str) -> SharescopeResult<Option<String>> {
        let params = [
            ("q", folder_name_query(name)),
            ("fields", "files(id, name)".to_string()),
            ("pageSize", "1".to_string()),
        ];

        let response: SearchResponse = self.get_files(&params, name).await?;
        Ok(response.files.into_iter().next().map(|hit| hit.id))
    }
}

/// Escape a value for a single-quoted Drive query literal.
pub fn escape_query_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

fn children_query(folder_id: &str) -> String {
    format!("'{}' in parents and trashed = false", escape_query_value(folder_id))
}

fn folder_name_query(name: &str) -> String {
    format!(
        "mimeType = '{}' and name = '{}' and trashed = false",
        FOLDER_MIME_TYPE,
        escape_query_value(name)
    )
}
