//! Sharescope Core Library
//!
//! Domain models, the error taxonomy and the graph store seam shared by the
//! crawler, the Neo4j adapter and the CLI.

pub mod error;
pub mod findings;
pub mod model;
pub mod store;
pub mod token;

pub use error::{SharescopeError, SharescopeResult};
pub use findings::{
    BrowseEntry, CrawlOutcome, EntryGrant, FolderListing, GranteeFile, GranteeSummary,
    GraphStatistics, InheritanceFinding, IngestReport, PublicItem, group_by_top_level_folder,
};
pub use model::{DriveItem, GranteeKind, Owner, Permission, FOLDER_MIME_TYPE, ROOT_FOLDER_ID};
pub use store::{GraphStore, DEFAULT_RESULT_LIMIT};
pub use token::AccessToken;
