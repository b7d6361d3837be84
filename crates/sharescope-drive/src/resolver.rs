//! Resolves a human-supplied folder name to a crawl starting point.

use tracing::info;

use sharescope_core::{SharescopeError, SharescopeResult, ROOT_FOLDER_ID};

use crate::client::DriveApi;

/// Resolve the crawl start folder.
///
/// No name, a blank name, or any casing of `"root"` selects the tree root
/// without a remote call. Any other name is looked up exactly as given; a
/// name that matches no folder is `NotFound`.
pub async fn resolve_start_folder<D>(api: &D, folder_name: Option<&str>) -> SharescopeResult<String>
where
    D: DriveApi + ?Sized,
{
    let name = match folder_name {
        None => return Ok(ROOT_FOLDER_ID.to_string()),
        Some(name) if name.trim().is_empty() || name.trim().eq_ignore_ascii_case(ROOT_FOLDER_ID) => {
            return Ok(ROOT_FOLDER_ID.to_string())
        }
        Some(name) => name,
    };

    info!(folder_name = name, "Searching for folder by name");
    match api.find_folder_by_name(name).await? {
        Some(id) => Ok(id),
        None => Err(SharescopeError::NotFound(format!("Folder \"{}\" not found.", name))),
    }
}
