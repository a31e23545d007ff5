//! Populate a contribution store from a catalog snapshot

use super::traits::{ContributionStore, StorageResult, StoredPublication};
use crate::catalog::{normalize, Catalog};
use serde::Serialize;
use std::collections::HashSet;

/// What an import wrote
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub scientists: usize,
    /// Distinct (scientist, journal) publication records
    pub publications: usize,
    /// Publication keys that received discipline tags
    pub tagged_journals: usize,
    pub disciplines: usize,
}

/// Replace the store's contents with a catalog's publications, discipline
/// tags and discipline list
///
/// Publications are tallied per (scientist, journal): repeated publications
/// in one journal become a single record with a count. Every catalogued
/// journal behind those records has its disciplines (slots A, B and C)
/// recorded as the tags of its publication key. Records from an earlier
/// import that the catalog no longer holds are removed.
pub fn import_catalog(
    store: &dyn ContributionStore,
    catalog: &Catalog,
) -> StorageResult<ImportSummary> {
    let mut tallies: Vec<StoredPublication> = Vec::new();
    for publication in catalog.publications() {
        let scientist = publication.author.trim();
        let key = normalize(&publication.journal);
        if scientist.is_empty() || key.is_empty() {
            continue;
        }
        let existing = tallies
            .iter_mut()
            .find(|t| normalize(&t.scientist) == normalize(scientist) && t.key == key);
        match existing {
            Some(tally) => tally.count += 1,
            None => tallies.push(StoredPublication::new(scientist, key, 1)),
        }
    }

    let mut scientists = HashSet::new();
    let mut tagged = HashSet::new();
    let mut tags: Vec<(String, Vec<String>)> = Vec::new();
    for tally in &tallies {
        scientists.insert(normalize(&tally.scientist));
        if tagged.contains(&tally.key) {
            continue;
        }
        if let Some(journal) = catalog.journals().get(&tally.key) {
            tags.push((tally.key.clone(), journal.disciplines()));
            tagged.insert(tally.key.clone());
        }
    }

    let names: Vec<String> = catalog
        .discipline_names()
        .iter()
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect();
    store.replace_contents(&tallies, &tags, &names)?;

    let summary = ImportSummary {
        scientists: scientists.len(),
        publications: tallies.len(),
        tagged_journals: tags.len(),
        disciplines: names.len(),
    };
    tracing::info!(
        scientists = summary.scientists,
        publications = summary.publications,
        tagged_journals = summary.tagged_journals,
        disciplines = summary.disciplines,
        "imported catalog"
    );
    Ok(summary)
}
