//! Storage backends for contribution counting
//!
//! Stored publications and their discipline tags back the fixed-increment
//! counting pass. The primary implementation is `SqliteStore`.

mod import;
mod sqlite;
mod traits;

pub use import::{import_catalog, ImportSummary};
pub use sqlite::SqliteStore;
pub use traits::{ContributionStore, OpenStore, StorageError, StorageResult, StoredPublication};
