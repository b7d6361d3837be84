//! Neo4j schema initialization (constraints and indexes).

use anyhow::Result;
use neo4rs::Query;
use tracing::{info, warn};

use crate::GraphClient;

/// Cypher statements for schema initialization.
const SCHEMA_STATEMENTS: &[&str] = &[
    // Merge keys
    "CREATE CONSTRAINT item_id IF NOT EXISTS FOR (i:Item) REQUIRE i.id IS UNIQUE",
    "CREATE CONSTRAINT grantee_id IF NOT EXISTS FOR (g:Grantee) REQUIRE g.id IS UNIQUE",
    // Lookups used by the risk and grantee queries
    "CREATE INDEX grantee_type IF NOT EXISTS FOR (g:Grantee) ON (g.type)",
    "CREATE INDEX grantee_email IF NOT EXISTS FOR (g:Grantee) ON (g.email)",
];

/// Initialize Neo4j schema with constraints and indexes.
///
/// Safe to run multiple times - uses IF NOT EXISTS clauses.
pub async fn initialize_schema(client: &GraphClient) -> Result<()> {
    info!("Initializing Neo4j schema...");

    for statement in SCHEMA_STATEMENTS {
        client.execute(Query::new(statement.to_string())).await?;
    }

    info!("Neo4j schema initialized ({} statements)", SCHEMA_STATEMENTS.len());
    Ok(())
}

/// Delete every node and relationship in the database.
pub async fn reset_graph(client: &GraphClient) -> Result<()> {
    warn!("Deleting all nodes and relationships");
    client
        .execute(Query::new("MATCH (n) DETACH DELETE n".to_string()))
        .await
}
