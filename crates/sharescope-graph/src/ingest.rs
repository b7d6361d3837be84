//! Crawl ingestion into the sharing graph.
//!
//! A crawl is first flattened into an [`IngestPlan`] (item writes,
//! containment edges, permission grants) and then issued as MERGE
//! statements inside one transaction:
//! - (:Item {id}) with name/owner/link/mime overwritten
//! - (:Item)-[:CONTAINS]->(:Item), parents created as placeholders
//! - (:Grantee {id})-[:HAS_PERMISSION {role, inherited}]->(:Item)

use std::collections::{BTreeMap, BTreeSet};

use anyhow::Result;
use neo4rs::Query;
use tracing::debug;

use sharescope_core::{DriveItem, IngestReport};

use crate::GraphClient;

/// Descriptive attributes of one Item node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemWrite {
    pub id: String,
    pub name: String,
    pub owner: String,
    pub web_view_link: String,
    pub mime_type: String,
}

/// One permission grant keyed by grantee id and item id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrantWrite {
    pub grantee_id: String,
    pub item_id: String,
    pub email: String,
    pub kind: String,
    pub role: String,
    pub inherited: bool,
}

/// Deduplicated writes derived from one crawl.
#[derive(Debug, Clone, Default)]
pub struct IngestPlan {
    pub items: Vec<ItemWrite>,
    /// (parent id, child id)
    pub containment: Vec<(String, String)>,
    pub grants: Vec<GrantWrite>,
    pub skipped_grants: usize,
}

impl IngestPlan {
    /// Flatten crawled items.
    ///
    /// Later occurrences of an item or grant overwrite earlier ones, matching
    /// what repeated MERGE ... SET would leave behind. Grants without a
    /// provider id are skipped.
    pub fn from_items(items: &[DriveItem]) -> Self {
        let mut item_writes: BTreeMap<&str, ItemWrite> = BTreeMap::new();
        let mut containment: BTreeSet<(String, String)> = BTreeSet::new();
        let mut grants: BTreeMap<(String, String), GrantWrite> = BTreeMap::new();
        let mut skipped_grants = 0;

        for item in items {
            item_writes.insert(
                item.id.as_str(),
                ItemWrite {
                    id: item.id.clone(),
                    name: item.name.clone(),
                    owner: item.owner().to_string(),
                    web_view_link: item.web_view_link().to_string(),
                    mime_type: item.mime_type.clone(),
                },
            );

            for parent_id in item.parents.iter().filter(|p| !p.is_empty()) {
                containment.insert((parent_id.clone(), item.id.clone()));
            }

            for perm in &item.permissions {
                let Some(grantee_id) = perm.id.as_deref().filter(|id| !id.is_empty()) else {
                    debug!(item_id = %item.id, "Skipping permission without id");
                    skipped_grants += 1;
                    continue;
                };
                grants.insert(
                    (grantee_id.to_string(), item.id.clone()),
                    GrantWrite {
                        grantee_id: grantee_id.to_string(),
                        item_id: item.id.clone(),
                        email: perm.grantee_email().to_string(),
                        kind: perm.grantee_kind().as_str().to_string(),
                        role: perm.role().to_string(),
                        inherited: perm.is_inherited(),
                    },
                );
            }
        }

        Self {
            items: item_writes.into_values().collect(),
            containment: containment.into_iter().collect(),
            grants: grants.into_values().collect(),
            skipped_grants,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn report(&self) -> IngestReport {
        IngestReport {
            items: self.items.len(),
            containment_edges: self.containment.len(),
            grants: self.grants.len(),
            skipped_grants: self.skipped_grants,
        }
    }

    /// Cypher statements in dependency order: items, then edges.
    pub fn to_queries(&self, crawled_at: &str) -> Vec<Query> {
        let mut queries = Vec::with_capacity(self.items.len() + self.containment.len() + self.grants.len());

        for item in &self.items {
            queries.push(
                Query::new(
                    "MERGE (i:Item {id: $id})
                     SET i.name = $name,
                         i.owner = $owner,
                         i.webViewLink = $web_view_link,
                         i.mimeType = $mime_type,
                         i.lastCrawledAt = $crawled_at"
                        .to_string(),
                )
                .param("id", item.id.as_str())
                .param("name", item.name.as_str())
                .param("owner", item.owner.as_str())
                .param("web_view_link", item.web_view_link.as_str())
                .param("mime_type", item.mime_type.as_str())
                .param("crawled_at", crawled_at),
            );
        }

        for (parent_id, child_id) in &self.containment {
            queries.push(
                Query::new(
                    "MATCH (c:Item {id: $child_id})
                     MERGE (p:Item {id: $parent_id})
                     MERGE (p)-[:CONTAINS]->(c)"
                        .to_string(),
                )
                .param("parent_id", parent_id.as_str())
                .param("child_id", child_id.as_str()),
            );
        }

        for grant in &self.grants {
            queries.push(
                Query::new(
                    "MATCH (i:Item {id: $item_id})
                     MERGE (g:Grantee {id: $grantee_id})
                     SET g.email = $email,
                         g.type = $type
                     MERGE (g)-[r:HAS_PERMISSION]->(i)
                     SET r.role = $role,
                         r.inherited = $inherited"
                        .to_string(),
                )
                .param("item_id", grant.item_id.as_str())
                .param("grantee_id", grant.grantee_id.as_str())
                .param("email", grant.email.as_str())
                .param("type", grant.kind.as_str())
                .param("role", grant.role.as_str())
                .param("inherited", grant.inherited),
            );
        }

        queries
    }
}

/// Merge a crawl into Neo4j as a single transaction.
pub async fn ingest_items(client: &GraphClient, items: &[DriveItem], crawled_at: &str) -> Result<IngestReport> {
    let plan = IngestPlan::from_items(items);
    let report = plan.report();
    if plan.is_empty() {
        return Ok(report);
    }

    let queries = plan.to_queries(crawled_at);
    debug!(statements = queries.len(), "Submitting ingestion transaction");
    client.run_in_transaction(queries).await?;

    Ok(report)
}
