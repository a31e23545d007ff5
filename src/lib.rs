//! ScienceFuzz: fuzzy evidence aggregation for scientists' publications
//!
//! Combines independent, weighted pieces of evidence (publications in
//! journals, journals mapped to disciplines, disciplines mapped to domains)
//! into one contribution score per category using the probabilistic sum
//! `S(x, y) = x + y - x·y`.
//!
//! # Core Concepts
//!
//! - **EvidenceSet**: raw weight observations per category
//! - **Aggregator**: reduces each category's weights with a combination rule
//! - **CategoryScore**: one score per category, in a defined order
//! - **Catalog**: read-only publications, journals and disciplines
//!
//! # Example
//!
//! ```
//! use sciencefuzz::{Aggregator, Coverage, EvidenceSet};
//!
//! let evidence: EvidenceSet = [("Physics", 1.0), ("chemistry", 0.5)].into_iter().collect();
//! let scores = Aggregator::new().aggregate(&evidence, Coverage::PresentOnly);
//! assert_eq!(scores.get("physics"), Some(1.0));
//! ```

pub mod catalog;
pub mod config;
mod contributions;
mod profile;
pub mod scoring;
pub mod storage;

pub use catalog::{Catalog, CatalogError, Discipline, Journal, Publication};
pub use config::{ConfigError, ScoringConfig};
pub use contributions::discipline_contributions;
pub use profile::{DisciplineResult, JournalTally, ProfileScorer, ScientistProfile};
pub use scoring::{
    Aggregator, CategoryScore, ChartSeries, CombinationRule, Coverage, DisciplineWeights,
    DomainWeights, EvidenceSet, ProbabilisticSum, ScoredCategory,
};
pub use storage::{
    import_catalog, ContributionStore, ImportSummary, OpenStore, SqliteStore, StorageError,
    StorageResult,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
