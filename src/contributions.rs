//! Discipline-contribution counting from stored publications
//!
//! Every tag of every stored publication adds [`UNIT_INCREMENT`] once per
//! unit of the publication's count. The result lists every discipline of the
//! stored master list, in master order, with unobserved disciplines at 0.

use crate::catalog::normalize;
use crate::scoring::{
    collect_fixed_increment, Aggregator, CategoryScore, Coverage, TaggedPublication, UNIT_INCREMENT,
};
use crate::storage::{ContributionStore, StorageError, StorageResult};
use std::collections::HashSet;

/// Count discipline contributions for a scientist
///
/// Returns [`StorageError::ScientistNotFound`] when the scientist has no
/// stored publications. Tags missing from the master list still score and
/// follow the listed disciplines.
pub fn discipline_contributions(
    store: &dyn ContributionStore,
    scientist: &str,
) -> StorageResult<CategoryScore> {
    let stored = store.load_publications(scientist)?;
    if stored.is_empty() {
        return Err(StorageError::ScientistNotFound(scientist.trim().to_string()));
    }

    let mut publications = Vec::with_capacity(stored.len());
    for publication in stored {
        let disciplines = store.load_discipline_tags(&publication.key)?;
        publications.push(TaggedPublication {
            key: publication.key,
            count: publication.count,
            disciplines,
        });
    }

    let master = store.load_discipline_list()?;
    let evidence = collect_fixed_increment(&publications, UNIT_INCREMENT);
    let score = Aggregator::new().aggregate(&evidence, Coverage::Union(&master));

    // Unlisted categories are always the tail of a union aggregation.
    let unlisted = count_unlisted(&score, &master);
    if unlisted > 0 {
        let unlisted: Vec<&str> = score.names().skip(score.len() - unlisted).collect();
        tracing::warn!(scientist, ?unlisted, "discipline tags missing from the master list");
    }

    tracing::debug!(
        scientist,
        publications = publications.len(),
        disciplines = score.len(),
        "counted discipline contributions"
    );
    Ok(score)
}

/// Number of scored categories that are not in the master list
fn count_unlisted(score: &CategoryScore, master: &[String]) -> usize {
    let listed: HashSet<String> = master.iter().map(|name| normalize(name)).collect();
    score.names().filter(|name| !listed.contains(*name)).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{OpenStore, SqliteStore, StoredPublication};

    fn store_with(master: &[&str]) -> SqliteStore {
        let store = SqliteStore::open_in_memory().unwrap();
        let names: Vec<String> = master.iter().map(|s| s.to_string()).collect();
        store.save_discipline_list(&names).unwrap();
        store
    }

    #[test]
    fn single_publication_scores_one_increment() {
        let store = store_with(&["X", "Y", "Z"]);
        store.save_publication(&StoredPublication::new("A", "J1", 1)).unwrap();
        store.save_discipline_tags("J1", &["X".to_string()]).unwrap();

        let score = discipline_contributions(&store, "A").unwrap();
        assert_eq!(score.get("X"), Some(0.001));
        assert_eq!(score.get("Y"), Some(0.0));
        assert_eq!(score.get("Z"), Some(0.0));
        assert_eq!(score.names().collect::<Vec<_>>(), vec!["x", "y", "z"]);
    }

    // 0.001 -> 0.001999 -> 0.002997001
    #[test]
    fn count_of_three_chains_the_increment() {
        let store = store_with(&["X"]);
        store.save_publication(&StoredPublication::new("A", "J1", 3)).unwrap();
        store.save_discipline_tags("J1", &["X".to_string()]).unwrap();

        let score = discipline_contributions(&store, "A").unwrap();
        assert!((score.get("X").unwrap() - 0.002997001).abs() < 1e-15);
    }

    #[test]
    fn counts_accumulate_across_publications() {
        let store = store_with(&["X", "Y"]);
        store.save_publication(&StoredPublication::new("A", "J1", 1)).unwrap();
        store.save_publication(&StoredPublication::new("A", "J2", 1)).unwrap();
        store.save_discipline_tags("J1", &["X".to_string(), "Y".to_string()]).unwrap();
        store.save_discipline_tags("J2", &["X".to_string()]).unwrap();

        let score = discipline_contributions(&store, "A").unwrap();
        assert!((score.get("X").unwrap() - 0.001999).abs() < 1e-15);
        assert_eq!(score.get("Y"), Some(0.001));
    }

    #[test]
    fn unlisted_tags_follow_master_order() {
        let store = store_with(&["Y"]);
        store.save_publication(&StoredPublication::new("A", "J1", 1)).unwrap();
        store.save_discipline_tags("J1", &["W".to_string()]).unwrap();

        let score = discipline_contributions(&store, "A").unwrap();
        assert_eq!(score.names().collect::<Vec<_>>(), vec!["y", "w"]);
        assert_eq!(score.get("w"), Some(0.001));
    }

    #[test]
    fn unknown_scientist_is_not_found() {
        let store = store_with(&["X"]);
        let err = discipline_contributions(&store, "Nobody").unwrap_err();
        assert!(matches!(err, StorageError::ScientistNotFound(name) if name == "Nobody"));
    }
}
