//! Evidence collection and probabilistic-sum aggregation
//!
//! Records flow through a collector into an [`EvidenceSet`], which an
//! [`Aggregator`] reduces to a [`CategoryScore`]. Both stages are pure:
//! every call builds its own sets and shares nothing.

mod aggregate;
mod collect;
mod combine;
mod evidence;
mod weights;

pub use aggregate::{Aggregator, CategoryScore, ChartSeries, Coverage, ScoredCategory};
pub use collect::{
    collect_fixed_increment, collect_from_discipline_scores, collect_from_journals,
    resolve_journals, TaggedPublication,
};
pub use combine::{probabilistic_sum, CombinationRule, ProbabilisticSum};
pub use evidence::EvidenceSet;
pub use weights::{DisciplineWeights, DomainWeights, UNIT_INCREMENT};
