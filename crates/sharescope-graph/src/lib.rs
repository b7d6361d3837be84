//! # Sharescope Graph
//!
//! Neo4j sharing graph for Sharescope.
//!
//! Merges crawl results into `(:Item)` / `(:Grantee)` nodes joined by
//! `CONTAINS` and `HAS_PERMISSION` relationships, and answers the risk
//! queries over them. [`MemoryGraph`] implements the same store contract
//! in-process.

pub mod client;
pub mod ingest;
pub mod memory;
pub mod queries;
pub mod schema;
mod store;

pub use client::{GraphClient, GraphConfig, GraphCounts};
pub use ingest::{ingest_items, IngestPlan};
pub use memory::MemoryGraph;
