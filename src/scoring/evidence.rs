//! EvidenceSet: per-category weight observations prior to reduction

use crate::catalog::normalize;
use std::collections::HashMap;

/// Raw weights observed per category
///
/// Categories and their weights keep insertion order so that floating-point
/// accumulation is reproducible. Keys are normalized on insertion; blank
/// categories are dropped, so every present category has at least one weight.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EvidenceSet {
    entries: Vec<(String, Vec<f64>)>,
    index: HashMap<String, usize>,
}

impl EvidenceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one observation of `weight` for `category`
    ///
    /// Returns false (and records nothing) when the category is blank.
    pub fn push(&mut self, category: &str, weight: f64) -> bool {
        let key = normalize(category);
        if key.is_empty() {
            return false;
        }
        match self.index.get(&key) {
            Some(&i) => self.entries[i].1.push(weight),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, vec![weight]));
            }
        }
        true
    }

    /// Record `weight` `times` times for `category`
    pub fn push_repeated(&mut self, category: &str, weight: f64, times: u32) {
        for _ in 0..times {
            if !self.push(category, weight) {
                return;
            }
        }
    }

    /// Weights observed for a category (lookup is normalized)
    pub fn weights(&self, category: &str) -> Option<&[f64]> {
        self.index
            .get(&normalize(category))
            .map(|&i| self.entries[i].1.as_slice())
    }

    pub fn contains(&self, category: &str) -> bool {
        self.index.contains_key(&normalize(category))
    }

    /// Categories with their weights, in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.entries.iter().map(|(k, w)| (k.as_str(), w.as_slice()))
    }

    /// Categories in insertion order
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Number of distinct categories
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of observations across all categories
    pub fn observation_count(&self) -> usize {
        self.entries.iter().map(|(_, w)| w.len()).sum()
    }
}

impl<'a> Extend<(&'a str, f64)> for EvidenceSet {
    fn extend<I: IntoIterator<Item = (&'a str, f64)>>(&mut self, iter: I) {
        for (category, weight) in iter {
            self.push(category, weight);
        }
    }
}

impl<'a> FromIterator<(&'a str, f64)> for EvidenceSet {
    fn from_iter<I: IntoIterator<Item = (&'a str, f64)>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn differently_cased_mentions_collapse_to_one_key() {
        let set: EvidenceSet = [("  Physics ", 0.2), ("physics", 0.5), ("PHYSICS", 1.0)]
            .into_iter()
            .collect();

        assert_eq!(set.len(), 1);
        assert_eq!(set.weights("physics"), Some(&[0.2, 0.5, 1.0][..]));
        assert_eq!(set.categories().collect::<Vec<_>>(), vec!["physics"]);
    }

    #[test]
    fn blank_categories_are_dropped() {
        let mut set = EvidenceSet::new();
        assert!(!set.push("", 1.0));
        assert!(!set.push("   ", 1.0));
        assert!(set.is_empty());
        assert_eq!(set.observation_count(), 0);
    }

    #[test]
    fn categories_keep_insertion_order() {
        let set: EvidenceSet = [("zoology", 1.0), ("biology", 0.5), ("zoology", 0.2)]
            .into_iter()
            .collect();
        assert_eq!(set.categories().collect::<Vec<_>>(), vec!["zoology", "biology"]);
        assert_eq!(set.observation_count(), 3);
    }

    #[test]
    fn push_repeated_records_each_unit() {
        let mut set = EvidenceSet::new();
        set.push_repeated("X", 0.001, 3);
        set.push_repeated("Y", 0.001, 0);
        assert_eq!(set.weights("x").map(<[f64]>::len), Some(3));
        assert!(!set.contains("y"));
    }
}
