//! Read-only catalogs supplied to the scoring passes
//!
//! Publications, journals and disciplines are looked up by title. Every
//! lookup key is normalized with [`normalize`] so that differently cased or
//! padded mentions of the same title resolve to the same entry.

mod index;
mod records;
mod snapshot;

pub use index::{TitleIndex, Titled};
pub use records::{Discipline, Journal, Publication};
pub use snapshot::{Catalog, CatalogError, CatalogFile, CatalogResult};

/// Normalize a title or category identifier: trimmed and lower-cased.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Split a comma-joined category list into normalized, non-blank entries.
pub fn split_categories(raw: &str) -> impl Iterator<Item = String> + '_ {
    raw.split(',').map(normalize).filter(|entry| !entry.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize("  Physics "), "physics");
        assert_eq!(normalize("PHYSICS"), "physics");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn split_categories_drops_blank_entries() {
        let entries: Vec<String> = split_categories(" Biology, ,CHEMISTRY ,,").collect();
        assert_eq!(entries, vec!["biology", "chemistry"]);
    }

    #[test]
    fn split_categories_of_blank_string_is_empty() {
        assert_eq!(split_categories("").count(), 0);
        assert_eq!(split_categories("  ").count(), 0);
    }
}
