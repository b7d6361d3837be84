//! # Sharescope Drive
//!
//! Walks a Drive folder tree and hands the complete result to a graph store.
//!
//! The crawl is fail-fast: any listing error aborts the whole crawl, and
//! ingestion only starts once every folder has been listed.

pub mod client;
pub mod crawler;
pub mod resolver;
pub mod trigger;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{DriveApi, DriveClient, DriveConfig, FilePage};
pub use crawler::{CrawlConfig, Crawler};
pub use resolver::resolve_start_folder;
pub use trigger::run_crawl;
