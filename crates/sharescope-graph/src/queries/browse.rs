//! Folder browsing over the ingested tree.

use anyhow::Result;
use neo4rs::Query;
use serde::Deserialize;

use sharescope_core::{BrowseEntry, EntryGrant, FolderListing, ROOT_FOLDER_ID};

use crate::GraphClient;

/// Grant map as collected by the browse queries; OPTIONAL MATCH misses are all null.
#[derive(Debug, Deserialize)]
struct CollectedGrant {
    #[serde(rename = "type")]
    kind: Option<String>,
    email: Option<String>,
    role: Option<String>,
}

/// Direct children of `folder_id`, or of every root item for `"root"`.
pub async fn browse_folder(client: &GraphClient, folder_id: &str) -> Result<FolderListing> {
    let query = if folder_id == ROOT_FOLDER_ID {
        Query::new(
            "MATCH (root:Item)
             WHERE NOT (root)<-[:CONTAINS]-(:Item)
             MATCH (root)-[:CONTAINS]->(child:Item)
             WITH DISTINCT child
             OPTIONAL MATCH (grantee:Grantee)-[p:HAS_PERMISSION]->(child)
             RETURN child.id as id,
                    COALESCE(child.name, '') as name,
                    size([(child)-[:CONTAINS]->() | 1]) > 0 as isFolder,
                    collect({type: grantee.type, email: grantee.email, role: p.role}) as permissions
             ORDER BY name, id"
                .to_string(),
        )
    } else {
        Query::new(
            "MATCH (parent:Item {id: $folder_id})-[:CONTAINS]->(child:Item)
             OPTIONAL MATCH (grantee:Grantee)-[p:HAS_PERMISSION]->(child)
             RETURN child.id as id,
                    COALESCE(child.name, '') as name,
                    size([(child)-[:CONTAINS]->() | 1]) > 0 as isFolder,
                    collect({type: grantee.type, email: grantee.email, role: p.role}) as permissions
             ORDER BY name, id"
                .to_string(),
        )
        .param("folder_id", folder_id)
    };

    let rows = client.query(query).await?;
    let mut entries = Vec::with_capacity(rows.len());
    for row in rows {
        let collected: Vec<CollectedGrant> = row.get("permissions").unwrap_or_default();
        entries.push(BrowseEntry {
            id: row.get("id").unwrap_or_default(),
            name: row.get("name").unwrap_or_default(),
            is_folder: row.get("isFolder").unwrap_or(false),
            permissions: collected.into_iter().filter_map(into_entry_grant).collect(),
        });
    }

    Ok(FolderListing::from_entries(entries))
}

/// Drop the all-null placeholder produced for children without grants.
fn into_entry_grant(grant: CollectedGrant) -> Option<EntryGrant> {
    let role = grant.role?;
    Some(EntryGrant {
        kind: grant.kind.unwrap_or_default(),
        email: grant.email.unwrap_or_default(),
        role,
    })
}
