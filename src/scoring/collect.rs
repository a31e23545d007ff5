//! Evidence collectors
//!
//! Each collector maps source records onto `(category, weight)` observations
//! using caller-supplied lookup tables. Unresolved lookups contribute no
//! evidence; they are never errors.

use super::aggregate::CategoryScore;
use super::evidence::EvidenceSet;
use super::weights::{DisciplineWeights, DomainWeights};
use crate::catalog::{split_categories, Discipline, Journal, Publication, TitleIndex};

/// A stored publication with its discipline tags, as seen by the counting pass
#[derive(Debug, Clone, PartialEq)]
pub struct TaggedPublication {
    /// Publication key (the normalized journal title)
    pub key: String,
    /// How many times the scientist published there
    pub count: u32,
    /// Disciplines recorded against the publication
    pub disciplines: Vec<String>,
}

/// Journals of each of `scientist`'s publications, one entry per publication
///
/// Publications whose journal is not catalogued are skipped.
pub fn resolve_journals<'a>(
    scientist: &str,
    publications: &'a [Publication],
    journals: &'a TitleIndex<Journal>,
) -> Vec<&'a Journal> {
    publications
        .iter()
        .filter(|p| p.is_by(scientist))
        .filter_map(|p| journals.get(&p.journal))
        .collect()
}

/// Discipline evidence from the journals a scientist published in
///
/// Every resolved publication adds `weights.a` to its journal's slot-A
/// discipline, `weights.b` to slot B and `weights.c` to each overflow entry.
pub fn collect_from_journals(
    scientist: &str,
    publications: &[Publication],
    journals: &TitleIndex<Journal>,
    weights: &DisciplineWeights,
) -> EvidenceSet {
    let mut evidence = EvidenceSet::new();
    let resolved = resolve_journals(scientist, publications, journals);

    for journal in &resolved {
        evidence.push(&journal.discipline_a, weights.a);
        evidence.push(&journal.discipline_b, weights.b);
        for discipline in split_categories(&journal.disciplines_c) {
            evidence.push(&discipline, weights.c);
        }
    }

    tracing::debug!(
        scientist,
        journals = resolved.len(),
        disciplines = evidence.len(),
        observations = evidence.observation_count(),
        "collected discipline evidence"
    );
    evidence
}

/// Domain evidence from already-scored disciplines
///
/// Each scored, catalogued discipline adds `weights.a` to every domain in its
/// A list and `weights.b` to every domain in its B list. The discipline's own
/// score only selects which disciplines take part; it does not scale the
/// propagated weight.
pub fn collect_from_discipline_scores(
    discipline_scores: &CategoryScore,
    disciplines: &TitleIndex<Discipline>,
    weights: &DomainWeights,
) -> EvidenceSet {
    let mut evidence = EvidenceSet::new();

    for scored in discipline_scores.iter() {
        let Some(discipline) = disciplines.get(&scored.name) else {
            continue;
        };
        for domain in split_categories(&discipline.domains_a) {
            evidence.push(&domain, weights.a);
        }
        for domain in split_categories(&discipline.domains_b) {
            evidence.push(&domain, weights.b);
        }
    }

    tracing::debug!(
        disciplines = discipline_scores.len(),
        domains = evidence.len(),
        observations = evidence.observation_count(),
        "collected domain evidence"
    );
    evidence
}

/// Discipline evidence from stored publication tags
///
/// Every tag of a publication receives `increment` once per unit of the
/// publication's count.
pub fn collect_fixed_increment(publications: &[TaggedPublication], increment: f64) -> EvidenceSet {
    let mut evidence = EvidenceSet::new();

    for publication in publications {
        for discipline in &publication.disciplines {
            evidence.push_repeated(discipline, increment, publication.count);
        }
    }

    tracing::debug!(
        publications = publications.len(),
        disciplines = evidence.len(),
        observations = evidence.observation_count(),
        "collected fixed-increment evidence"
    );
    evidence
}
