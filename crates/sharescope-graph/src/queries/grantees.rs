//! Grantee-centric queries.

use anyhow::Result;
use neo4rs::Query;

use sharescope_core::{GranteeFile, GranteeSummary};

use crate::GraphClient;

/// Every grantee (by email and type) with the number of items it can access.
pub async fn grantee_summary(client: &GraphClient) -> Result<Vec<GranteeSummary>> {
    let query = Query::new(
        "MATCH (g:Grantee)-[:HAS_PERMISSION]->(i:Item)
         RETURN g.email as email,
                COALESCE(g.type, '') as type,
                count(DISTINCT i) as fileCount
         ORDER BY fileCount DESC, email"
            .to_string(),
    );

    let rows = client.query(query).await?;
    let mut grantees = Vec::with_capacity(rows.len());
    for row in rows {
        grantees.push(GranteeSummary {
            email: row.get("email").unwrap_or_default(),
            kind: row.get("type").unwrap_or_default(),
            file_count: row.get::<i64>("fileCount").unwrap_or(0).max(0) as u64,
        });
    }

    Ok(grantees)
}

/// Items a grantee email can access, with the granted role.
pub async fn grantee_files(client: &GraphClient, email: &str) -> Result<Vec<GranteeFile>> {
    let query = Query::new(
        "MATCH (g:Grantee {email: $email})-[r:HAS_PERMISSION]->(i:Item)
         RETURN i.id as id,
                COALESCE(i.name, '') as name,
                COALESCE(i.webViewLink, '') as webViewLink,
                COALESCE(r.role, '') as role
         ORDER BY name, id"
            .to_string(),
    )
    .param("email", email);

    let rows = client.query(query).await?;
    let mut files = Vec::with_capacity(rows.len());
    for row in rows {
        files.push(GranteeFile {
            id: row.get("id").unwrap_or_default(),
            name: row.get("name").unwrap_or_default(),
            web_view_link: row.get("webViewLink").unwrap_or_default(),
            role: row.get("role").unwrap_or_default(),
        });
    }

    Ok(files)
}
