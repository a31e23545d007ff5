//! Storage trait definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Date parsing error: {0}")]
    DateParse(String),

    #[error("Invalid publication count: {0}")]
    InvalidCount(i64),

    #[error("Scientist not found: {0}")]
    ScientistNotFound(String),

    #[error("Store lock poisoned")]
    LockPoisoned,
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// A scientist's publications in one journal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredPublication {
    /// Scientist name as imported
    pub scientist: String,
    /// Publication key: the normalized journal title
    pub key: String,
    /// Number of publications the scientist has in this journal
    pub count: u32,
    /// When the record was last written
    pub imported_at: DateTime<Utc>,
}

impl StoredPublication {
    pub fn new(scientist: impl Into<String>, key: impl Into<String>, count: u32) -> Self {
        Self {
            scientist: scientist.into(),
            key: key.into(),
            count,
            imported_at: Utc::now(),
        }
    }
}

/// Trait for contribution storage backends
///
/// Implementations must be thread-safe (Send + Sync) to support
/// concurrent access from multiple threads.
pub trait ContributionStore: Send + Sync {
    // === Publication Operations ===

    /// Create or replace a scientist's publication record for one journal
    fn save_publication(&self, publication: &StoredPublication) -> StorageResult<()>;

    /// Publications of a scientist (name match ignores case and padding)
    fn load_publications(&self, scientist: &str) -> StorageResult<Vec<StoredPublication>>;

    /// Distinct scientist names, sorted
    fn list_scientists(&self) -> StorageResult<Vec<String>>;

    // === Discipline Tag Operations ===

    /// Replace the discipline tags recorded against a publication key
    fn save_discipline_tags(&self, key: &str, disciplines: &[String]) -> StorageResult<()>;

    /// Discipline tags of a publication key, in recorded order
    fn load_discipline_tags(&self, key: &str) -> StorageResult<Vec<String>>;

    // === Master Discipline List ===

    /// Replace the master discipline list
    fn save_discipline_list(&self, names: &[String]) -> StorageResult<()>;

    /// The master discipline list, in its original order
    fn load_discipline_list(&self) -> StorageResult<Vec<String>>;

    // === Bulk Operations ===

    /// Replace everything the store holds in one step
    ///
    /// Publications and tags not listed here are removed. On error the
    /// previous contents are left untouched.
    fn replace_contents(
        &self,
        publications: &[StoredPublication],
        tags: &[(String, Vec<String>)],
        disciplines: &[String],
    ) -> StorageResult<()>;
}

/// Extension trait for opening stores from paths
pub trait OpenStore: ContributionStore + Sized {
    /// Open or create a store at the given path
    fn open(path: impl AsRef<Path>) -> StorageResult<Self>;

    /// Create an in-memory store (useful for testing)
    fn open_in_memory() -> StorageResult<Self>;
}
