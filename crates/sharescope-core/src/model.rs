//! Storage item and permission models.
//!
//! These mirror the subset of the Drive v3 `files` resource the crawler asks
//! for, so a listing page deserializes straight into them.

use serde::{Deserialize, Serialize};

/// MIME type Drive uses for folders.
pub const FOLDER_MIME_TYPE: &str = "application/vnd.google-apps.folder";

/// Provider alias for the root of the user's tree.
pub const ROOT_FOLDER_ID: &str = "root";

/// Owner placeholder when the provider returns no owner.
pub const UNKNOWN_OWNER: &str = "unknown";

/// Email placeholder for grantees that carry neither email nor domain.
pub const ANYONE_EMAIL: &str = "anyone";

/// A file or folder discovered by the crawler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveItem {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub mime_type: String,
    #[serde(default)]
    pub owners: Vec<Owner>,
    #[serde(default)]
    pub web_view_link: Option<String>,
    #[serde(default)]
    pub parents: Vec<String>,
    #[serde(default)]
    pub permissions: Vec<Permission>,
}

impl DriveItem {
    pub fn is_folder(&self) -> bool {
        self.mime_type == FOLDER_MIME_TYPE
    }

    /// Email of the primary owner, or `"unknown"`.
    pub fn owner(&self) -> &str {
        self.owners
            .first()
            .and_then(|o| o.email_address.as_deref())
            .unwrap_or(UNKNOWN_OWNER)
    }

    pub fn web_view_link(&self) -> &str {
        self.web_view_link.as_deref().unwrap_or("")
    }
}

/// Owner entry of a Drive item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    #[serde(default)]
    pub email_address: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// A permission grant attached to a Drive item.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Permission {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub email_address: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub inherited: Option<bool>,
    #[serde(default)]
    pub permission_details: Vec<PermissionDetail>,
}

/// Shared-drive permission detail; carries the provider's inheritance flag.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionDetail {
    #[serde(default)]
    pub inherited: Option<bool>,
    #[serde(default)]
    pub inherited_from: Option<String>,
}

impl Permission {
    /// The grantee's identity: email, else domain, else `"anyone"`.
    pub fn grantee_email(&self) -> &str {
        self.email_address
            .as_deref()
            .or(self.domain.as_deref())
            .unwrap_or(ANYONE_EMAIL)
    }

    pub fn grantee_kind(&self) -> GranteeKind {
        GranteeKind::from_str(self.kind.as_deref().unwrap_or(""))
    }

    pub fn role(&self) -> &str {
        self.role.as_deref().unwrap_or("")
    }

    /// Provider inheritance flag. Stored for display only.
    pub fn is_inherited(&self) -> bool {
        self.inherited
            .unwrap_or_else(|| self.permission_details.iter().any(|d| d.inherited == Some(true)))
    }
}

/// Kind of entity holding a permission.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GranteeKind {
    User,
    Group,
    Domain,
    Anyone,
    Other(String),
}

impl GranteeKind {
    /// Parse from the provider string.
    pub fn from_str(s: &str) -> Self {
        match s {
            "user" => Self::User,
            "group" => Self::Group,
            "domain" => Self::Domain,
            "anyone" => Self::Anyone,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::User => "user",
            Self::Group => "group",
            Self::Domain => "domain",
            Self::Anyone => "anyone",
            Self::Other(s) => s.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_listing_entry() {
        let json = r#"{
            "id": "1AbC",
            "name": "Budget.xlsx",
            "mimeType": "application/vnd.google-apps.spreadsheet",
            "owners": [{"emailAddress": "owner@x.com", "displayName": "Owner"}],
            "webViewLink": "https://drive.google.com/file/d/1AbC/view",
            "parents": ["0Folder"],
            "permissions": [
                {"id": "anyoneWithLink", "type": "anyone", "role": "reader"},
                {"id": "123", "type": "user", "role": "writer", "emailAddress": "bob@y.com"}
            ]
        }"#;

        let item: DriveItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.owner(), "owner@x.com");
        assert!(!item.is_folder());
        assert_eq!(item.parents, vec!["0Folder".to_string()]);
        assert_eq!(item.permissions[0].grantee_kind(), GranteeKind::Anyone);
        assert_eq!(item.permissions[0].grantee_email(), "anyone");
        assert_eq!(item.permissions[1].grantee_email(), "bob@y.com");
    }

    #[test]
    fn test_missing_owner_is_unknown() {
        let item: DriveItem =
            serde_json::from_str(r#"{"id": "x", "mimeType": "application/vnd.google-apps.folder"}"#)
                .unwrap();
        assert_eq!(item.owner(), "unknown");
        assert!(item.is_folder());
        assert_eq!(item.web_view_link(), "");
    }

    #[test]
    fn test_domain_grantee_uses_domain_as_email() {
        let perm = Permission {
            id: Some("d1".into()),
            kind: Some("domain".into()),
            domain: Some("example.com".into()),
            ..Default::default()
        };
        assert_eq!(perm.grantee_email(), "example.com");
        assert_eq!(perm.grantee_kind(), GranteeKind::Domain);
    }

    #[test]
    fn test_inherited_from_permission_details() {
        let perm: Permission = serde_json::from_str(
            r#"{"id": "p", "type": "user", "permissionDetails": [{"inherited": true, "inheritedFrom": "0F"}]}"#,
        )
        .unwrap();
        assert!(perm.is_inherited());
        assert!(!Permission::default().is_inherited());
    }

    #[test]
    fn test_grantee_kind_round_trip() {
        for s in ["user", "group", "domain", "anyone", "deleted"] {
            assert_eq!(GranteeKind::from_str(s).as_str(), s);
        }
    }
}
