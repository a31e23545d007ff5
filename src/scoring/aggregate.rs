//! Aggregation of an EvidenceSet into a CategoryScore

use super::combine::{CombinationRule, ProbabilisticSum};
use super::evidence::EvidenceSet;
use crate::catalog::normalize;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One category's aggregated score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCategory {
    pub name: String,
    pub value: f64,
}

/// Aggregated score per category, in a defined order
///
/// Names are normalized. Serializes as a list of `{ name, value }` rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<ScoredCategory>", into = "Vec<ScoredCategory>")]
pub struct CategoryScore {
    entries: Vec<ScoredCategory>,
    index: HashMap<String, usize>,
}

impl CategoryScore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a category's score, appending it if absent
    fn insert(&mut self, name: String, value: f64) {
        match self.index.get(&name) {
            Some(&i) => self.entries[i].value = value,
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push(ScoredCategory { name, value });
            }
        }
    }

    /// Score of a category (lookup is normalized)
    pub fn get(&self, category: &str) -> Option<f64> {
        self.index
            .get(&normalize(category))
            .map(|&i| self.entries[i].value)
    }

    pub fn contains(&self, category: &str) -> bool {
        self.index.contains_key(&normalize(category))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScoredCategory> {
        self.entries.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reorder by category name, ascending
    pub fn sorted_by_name(mut self) -> Self {
        self.entries.sort_by(|a, b| a.name.cmp(&b.name));
        self.reindex();
        self
    }

    /// Label and value arrays in the current order
    pub fn chart_series(&self) -> ChartSeries {
        ChartSeries {
            labels: self.entries.iter().map(|e| e.name.clone()).collect(),
            values: self.entries.iter().map(|e| e.value).collect(),
        }
    }

    fn reindex(&mut self) {
        self.index = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.name.clone(), i))
            .collect();
    }
}

impl From<Vec<ScoredCategory>> for CategoryScore {
    fn from(rows: Vec<ScoredCategory>) -> Self {
        let mut score = Self::new();
        for row in rows {
            score.insert(normalize(&row.name), row.value);
        }
        score
    }
}

impl From<CategoryScore> for Vec<ScoredCategory> {
    fn from(score: CategoryScore) -> Self {
        score.entries
    }
}

/// Parallel label/value arrays for chart consumers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    /// Labels as a JSON array
    pub fn labels_json(&self) -> String {
        serde_json::Value::from(self.labels.clone()).to_string()
    }

    /// Values as a JSON array
    pub fn values_json(&self) -> String {
        serde_json::Value::from(self.values.clone()).to_string()
    }
}

/// Which categories appear in an aggregation's output
#[derive(Debug, Clone, Copy, Default)]
pub enum Coverage<'a> {
    /// Only categories with at least one observation, in evidence order
    #[default]
    PresentOnly,
    /// Every category in the master list, in master order, absent ones at 0;
    /// observed categories missing from the list follow in evidence order
    Union(&'a [String]),
}

/// Reduces EvidenceSets to CategoryScores with a combination rule
#[derive(Debug, Clone, Default)]
pub struct Aggregator<R = ProbabilisticSum> {
    rule: R,
}

impl Aggregator<ProbabilisticSum> {
    pub fn new() -> Self {
        Self {
            rule: ProbabilisticSum,
        }
    }
}

impl<R: CombinationRule> Aggregator<R> {
    /// Create an aggregator with a custom combination rule
    pub fn with_rule(rule: R) -> Self {
        Self { rule }
    }

    /// Reduce every category of `evidence` independently
    pub fn aggregate(&self, evidence: &EvidenceSet, coverage: Coverage<'_>) -> CategoryScore {
        let mut score = CategoryScore::new();

        if let Coverage::Union(master) = coverage {
            for name in master {
                let key = normalize(name);
                if !key.is_empty() && !score.index.contains_key(&key) {
                    score.insert(key, self.rule.identity());
                }
            }
        }

        for (category, weights) in evidence.iter() {
            score.insert(category.to_string(), self.rule.reduce(weights));
        }

        tracing::trace!(
            categories = score.len(),
            observed = evidence.len(),
            "aggregated evidence"
        );
        score
    }
}
