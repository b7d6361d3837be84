//! Access-risk queries.
//!
//! Broken inheritance is computed from topology: a descendant's direct
//! grantees are compared with the direct grantees of its top-level folder
//! (an immediate child folder of a root item), not with its immediate
//! parent. The stored `inherited` flag is not consulted.

use anyhow::Result;
use neo4rs::Query;

use sharescope_core::{InheritanceFinding, PublicItem, DEFAULT_RESULT_LIMIT};

use crate::GraphClient;

/// Row cap as a Cypher parameter; never above [`DEFAULT_RESULT_LIMIT`].
fn capped_limit(limit: usize) -> i64 {
    limit.min(DEFAULT_RESULT_LIMIT) as i64
}

/// Items granted to a grantee of type `anyone`.
pub async fn public_exposure(client: &GraphClient, limit: usize) -> Result<Vec<PublicItem>> {
    let query = Query::new(
        "MATCH (i:Item)
         WHERE (i)<-[:HAS_PERMISSION]-(:Grantee {type: 'anyone'})
         RETURN i.id as id,
                COALESCE(i.name, '') as name,
                COALESCE(i.owner, 'unknown') as owner,
                COALESCE(i.webViewLink, '') as webViewLink
         LIMIT $limit"
            .to_string(),
    )
    .param("limit", capped_limit(limit));

    let rows = client.query(query).await?;
    let mut items = Vec::with_capacity(rows.len());
    for row in rows {
        let id: String = row.get("id").unwrap_or_default();
        if id.is_empty() {
            continue;
        }
        items.push(PublicItem {
            id,
            name: row.get("name").unwrap_or_default(),
            owner: row.get("owner").unwrap_or_default(),
            web_view_link: row.get("webViewLink").unwrap_or_default(),
        });
    }

    Ok(items)
}

/// Descendants reachable by grantees who lack direct access to the top-level folder.
///
/// One row per (top-level folder, descendant, extra grantee). A descendant
/// under two top-level folders is reported for each of them.
pub async fn broken_inheritance(client: &GraphClient, limit: usize) -> Result<Vec<InheritanceFinding>> {
    let query = Query::new(
        "MATCH (root:Item)
         WHERE NOT (root)<-[:CONTAINS]-(:Item)
         MATCH (root)-[:CONTAINS]->(top:Item)
         MATCH (top)-[:CONTAINS*]->(child:Item)
         WITH DISTINCT top, child
         MATCH (childGrantee:Grantee)-[:HAS_PERMISSION]->(child)
         WITH top, child, collect(DISTINCT childGrantee.email) as childEmails
         OPTIONAL MATCH (topGrantee:Grantee)-[:HAS_PERMISSION]->(top)
         WITH top, child, childEmails, collect(DISTINCT topGrantee.email) as topEmails
         WITH top, child, [email IN childEmails WHERE NOT email IN topEmails] as extraEmails
         WHERE size(extraEmails) > 0
         UNWIND extraEmails as extraUser
         RETURN COALESCE(child.name, '') as name,
                COALESCE(child.webViewLink, '') as link,
                extraUser,
                COALESCE(top.name, '') as parentName,
                COALESCE(top.name, '') as topLevelFolder
         LIMIT $limit"
            .to_string(),
    )
    .param("limit", capped_limit(limit));

    let rows = client.query(query).await?;
    let mut findings = Vec::with_capacity(rows.len());
    for row in rows {
        findings.push(InheritanceFinding {
            name: row.get("name").unwrap_or_default(),
            link: row.get("link").unwrap_or_default(),
            extra_user: row.get("extraUser").unwrap_or_default(),
            parent_name: row.get("parentName").unwrap_or_default(),
            top_level_folder: row.get("topLevelFolder").unwrap_or_default(),
        });
    }

    Ok(findings)
}
