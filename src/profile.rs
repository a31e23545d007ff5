//! Scientist profiles: the discipline pass followed by the domain pass
//!
//! ```
//! use sciencefuzz::{Catalog, Journal, ProfileScorer, Publication, ScoringConfig};
//!
//! let catalog = Catalog::new(
//!     vec![Publication::new("A", "J1")],
//!     vec![Journal::new("J1").with_discipline_a("Physics")],
//!     vec![],
//! );
//! let profile = ProfileScorer::new(&catalog, ScoringConfig::default()).profile("A");
//! assert_eq!(profile.disciplines.get("physics"), Some(1.0));
//! ```

use crate::catalog::{normalize, Catalog};
use crate::config::ScoringConfig;
use crate::scoring::{
    collect_from_discipline_scores, collect_from_journals, resolve_journals, Aggregator,
    CategoryScore, ChartSeries, CombinationRule, Coverage, ProbabilisticSum,
};
use serde::Serialize;

/// A journal the scientist published in, with the number of publications
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JournalTally {
    pub title: String,
    pub count: usize,
}

/// A scored discipline with the raw domain lists from its catalog entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisciplineResult {
    pub name: String,
    pub value: f64,
    /// Empty when the discipline is not catalogued
    pub domains_a: String,
    pub domains_b: String,
}

/// Discipline and domain contributions of one scientist
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScientistProfile {
    pub scientist: String,
    /// Ordered by journal title
    pub journals: Vec<JournalTally>,
    /// Ordered by discipline name
    pub disciplines: CategoryScore,
    /// Same order as `disciplines`
    pub discipline_details: Vec<DisciplineResult>,
    /// First-seen order while walking `disciplines`
    pub domains: CategoryScore,
}

impl ScientistProfile {
    pub fn discipline_chart(&self) -> ChartSeries {
        self.disciplines.chart_series()
    }

    pub fn domain_chart(&self) -> ChartSeries {
        self.domains.chart_series()
    }
}

/// Builds [`ScientistProfile`]s from a catalog snapshot
pub struct ProfileScorer<'a, R = ProbabilisticSum> {
    catalog: &'a Catalog,
    config: ScoringConfig,
    aggregator: Aggregator<R>,
}

impl<'a> ProfileScorer<'a, ProbabilisticSum> {
    pub fn new(catalog: &'a Catalog, config: ScoringConfig) -> Self {
        Self {
            catalog,
            config,
            aggregator: Aggregator::new(),
        }
    }
}

impl<'a, R: CombinationRule> ProfileScorer<'a, R> {
    /// Use a custom aggregator
    pub fn with_aggregator(
        catalog: &'a Catalog,
        config: ScoringConfig,
        aggregator: Aggregator<R>,
    ) -> Self {
        Self {
            catalog,
            config,
            aggregator,
        }
    }

    /// Discipline scores, ordered by name
    pub fn discipline_scores(&self, scientist: &str) -> CategoryScore {
        let evidence = collect_from_journals(
            scientist,
            self.catalog.publications(),
            self.catalog.journals(),
            &self.config.disciplines,
        );
        self.aggregator
            .aggregate(&evidence, Coverage::PresentOnly)
            .sorted_by_name()
    }

    /// Domain scores derived from discipline scores
    ///
    /// Domains keep traversal order: disciplines in the order given, and
    /// within each discipline its A domains before its B domains.
    pub fn domain_scores(&self, discipline_scores: &CategoryScore) -> CategoryScore {
        let evidence = collect_from_discipline_scores(
            discipline_scores,
            self.catalog.disciplines(),
            &self.config.domains,
        );
        self.aggregator.aggregate(&evidence, Coverage::PresentOnly)
    }

    /// Journals of the scientist's publications with publication counts
    pub fn journal_tallies(&self, scientist: &str) -> Vec<JournalTally> {
        let mut tallies: Vec<(String, JournalTally)> = Vec::new();
        let resolved = resolve_journals(
            scientist,
            self.catalog.publications(),
            self.catalog.journals(),
        );
        for journal in resolved {
            let key = normalize(&journal.title);
            match tallies.iter_mut().find(|(k, _)| *k == key) {
                Some((_, tally)) => tally.count += 1,
                None => tallies.push((
                    key,
                    JournalTally {
                        title: journal.title.clone(),
                        count: 1,
                    },
                )),
            }
        }
        let mut tallies: Vec<JournalTally> = tallies.into_iter().map(|(_, t)| t).collect();
        tallies.sort_by(|a, b| a.title.cmp(&b.title));
        tallies
    }

    /// Run both passes for a scientist
    pub fn profile(&self, scientist: &str) -> ScientistProfile {
        let journals = self.journal_tallies(scientist);
        let disciplines = self.discipline_scores(scientist);
        let domains = self.domain_scores(&disciplines);

        let discipline_details = disciplines
            .iter()
            .map(|scored| {
                let entry = self.catalog.disciplines().get(&scored.name);
                DisciplineResult {
                    name: scored.name.clone(),
                    value: scored.value,
                    domains_a: entry.map(|d| d.domains_a.clone()).unwrap_or_default(),
                    domains_b: entry.map(|d| d.domains_b.clone()).unwrap_or_default(),
                }
            })
            .collect();

        tracing::info!(
            scientist,
            journals = journals.len(),
            disciplines = disciplines.len(),
            domains = domains.len(),
            "scored scientist"
        );

        ScientistProfile {
            scientist: scientist.trim().to_string(),
            journals,
            disciplines,
            discipline_details,
            domains,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Discipline, Journal, Publication};
    use crate::scoring::{DisciplineWeights, DomainWeights};

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    fn catalog() -> Catalog {
        Catalog::new(
            vec![
                Publication::new("A", "J1"),
                Publication::new("A", "J2"),
                Publication::new("A", "j2"),
                Publication::new("A", "Missing Journal"),
                Publication::new("B", "J3"),
            ],
            vec![
                Journal::new("J2")
                    .with_discipline_a("Physics")
                    .with_discipline_b("Chemistry"),
                Journal::new("J1").with_discipline_a("Physics"),
                Journal::new("J3").with_disciplines_c("Biology,Zoology"),
            ],
            vec![
                Discipline::new("Physics").with_domains_a("Natural Sciences"),
                Discipline::new("Chemistry")
                    .with_domains_a("Natural Sciences")
                    .with_domains_b("Engineering"),
            ],
        )
    }

    #[test]
    fn discipline_pass_is_sorted_by_name() {
        let catalog = catalog();
        let scorer = ProfileScorer::new(&catalog, ScoringConfig::default());
        let scores = scorer.discipline_scores("A");

        assert_eq!(scores.names().collect::<Vec<_>>(), vec!["chemistry", "physics"]);
        assert!(approx_eq(scores.get("physics").unwrap(), 1.0));
        assert!(approx_eq(scores.get("chemistry").unwrap(), 0.75));
    }

    #[test]
    fn domain_pass_uses_slot_weights() {
        let catalog = catalog();
        let config = ScoringConfig {
            disciplines: DisciplineWeights::default(),
            domains: DomainWeights { a: 0.4, b: 0.3 },
        };
        let profile = ProfileScorer::new(&catalog, config).profile("A");

        // natural sciences: 0.4 from chemistry, 0.4 from physics
        assert!(approx_eq(profile.domains.get("natural sciences").unwrap(), 0.64));
        assert!(approx_eq(profile.domains.get("engineering").unwrap(), 0.3));
        assert_eq!(
            profile.domains.names().collect::<Vec<_>>(),
            vec!["natural sciences", "engineering"]
        );
    }

    #[test]
    fn domains_keep_traversal_order() {
        let catalog = Catalog::new(
            vec![Publication::new("A", "J1")],
            vec![Journal::new("J1")
                .with_discipline_a("Physics")
                .with_discipline_b("Astronomy")],
            vec![
                Discipline::new("Physics")
                    .with_domains_a("Zeta, Alpha")
                    .with_domains_b("Beta"),
                Discipline::new("Astronomy").with_domains_a("Omega"),
            ],
        );
        let profile = ProfileScorer::new(&catalog, ScoringConfig::default()).profile("A");

        // astronomy is scored before physics; each keeps A before B
        assert_eq!(
            profile.domains.names().collect::<Vec<_>>(),
            vec!["omega", "zeta", "alpha", "beta"]
        );
    }

    struct Maximum;

    impl CombinationRule for Maximum {
        fn combine(&self, acc: f64, weight: f64) -> f64 {
            acc.max(weight)
        }
    }

    #[test]
    fn custom_aggregator_drives_both_passes() {
        let catalog = catalog();
        let aggregator = Aggregator::with_rule(Maximum);
        let profile =
            ProfileScorer::with_aggregator(&catalog, ScoringConfig::default(), aggregator)
                .profile("A");

        // chemistry appears twice at 0.5; max keeps 0.5 where the sum gives 0.75
        assert_eq!(profile.disciplines.get("chemistry"), Some(0.5));
        assert_eq!(profile.disciplines.get("physics"), Some(1.0));
        assert_eq!(profile.domains.get("natural sciences"), Some(1.0));
        assert_eq!(profile.domains.get("engineering"), Some(0.5));
    }

    #[test]
    fn journal_tallies_count_publications_per_journal() {
        let catalog = catalog();
        let tallies = ProfileScorer::new(&catalog, ScoringConfig::default()).journal_tallies("a");

        assert_eq!(
            tallies,
            vec![
                JournalTally {
                    title: "J1".into(),
                    count: 1,
                },
                JournalTally {
                    title: "J2".into(),
                    count: 2,
                },
            ]
        );
    }

    #[test]
    fn discipline_details_carry_domain_lists() {
        let catalog = catalog();
        let profile = ProfileScorer::new(&catalog, ScoringConfig::default()).profile("B");

        // Biology and zoology are not catalogued disciplines
        assert_eq!(profile.discipline_details.len(), 2);
        assert!(profile.discipline_details.iter().all(|d| d.domains_a.is_empty()));
        assert!(profile.domains.is_empty());

        let profile = ProfileScorer::new(&catalog, ScoringConfig::default()).profile("A");
        let chemistry = &profile.discipline_details[0];
        assert_eq!(chemistry.name, "chemistry");
        assert_eq!(chemistry.domains_b, "Engineering");
    }

    #[test]
    fn unknown_scientist_has_empty_profile() {
        let catalog = catalog();
        let profile = ProfileScorer::new(&catalog, ScoringConfig::default()).profile("Nobody");
        assert!(profile.journals.is_empty());
        assert!(profile.disciplines.is_empty());
        assert!(profile.domains.is_empty());
        assert_eq!(profile.discipline_chart(), ChartSeries::default());
    }
}
