//! Catalog: the read-only snapshot handed to a scoring pass

use super::index::TitleIndex;
use super::normalize;
use super::records::{Discipline, Journal, Publication};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported catalog format: {0}")]
    UnsupportedFormat(String),
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// On-disk catalog layout
///
/// `discipline_names` is the master discipline list; when absent the
/// discipline titles are used in catalog order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub publications: Vec<Publication>,
    #[serde(default)]
    pub journals: Vec<Journal>,
    #[serde(default)]
    pub disciplines: Vec<Discipline>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discipline_names: Option<Vec<String>>,
}

/// Publications, journals and disciplines available to the scoring passes
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    publications: Vec<Publication>,
    journals: TitleIndex<Journal>,
    disciplines: TitleIndex<Discipline>,
    discipline_names: Vec<String>,
}

impl Catalog {
    /// Create a catalog whose master discipline list is the discipline titles
    pub fn new(
        publications: Vec<Publication>,
        journals: Vec<Journal>,
        disciplines: Vec<Discipline>,
    ) -> Self {
        let discipline_names = disciplines.iter().map(|d| d.title.clone()).collect();
        Self {
            publications,
            journals: TitleIndex::new(journals),
            disciplines: TitleIndex::new(disciplines),
            discipline_names,
        }
    }

    /// Replace the master discipline list
    pub fn with_discipline_names(mut self, names: Vec<String>) -> Self {
        self.discipline_names = names;
        self
    }

    /// Load a catalog from a `.yaml`, `.yml` or `.json` file
    pub fn load(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        let file: CatalogFile = match extension.as_str() {
            "yaml" | "yml" => serde_yaml::from_str(&contents)?,
            "json" => serde_json::from_str(&contents)?,
            other => return Err(CatalogError::UnsupportedFormat(other.to_string())),
        };

        let catalog = Self::from(file);
        tracing::debug!(
            path = %path.display(),
            publications = catalog.publications.len(),
            journals = catalog.journals.len(),
            disciplines = catalog.disciplines.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    /// Parse a catalog from a YAML document
    pub fn from_yaml_str(yaml: &str) -> CatalogResult<Self> {
        let file: CatalogFile = serde_yaml::from_str(yaml)?;
        Ok(Self::from(file))
    }

    pub fn publications(&self) -> &[Publication] {
        &self.publications
    }

    /// Publications authored by `scientist` (case and padding ignored)
    pub fn publications_by<'a>(
        &'a self,
        scientist: &'a str,
    ) -> impl Iterator<Item = &'a Publication> + 'a {
        self.publications.iter().filter(move |p| p.is_by(scientist))
    }

    pub fn journals(&self) -> &TitleIndex<Journal> {
        &self.journals
    }

    pub fn disciplines(&self) -> &TitleIndex<Discipline> {
        &self.disciplines
    }

    /// Master discipline list, in its original order
    pub fn discipline_names(&self) -> &[String] {
        &self.discipline_names
    }

    /// Distinct publication authors, in first-seen order
    pub fn scientists(&self) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        self.publications
            .iter()
            .filter(|p| seen.insert(normalize(&p.author)))
            .map(|p| p.author.trim().to_string())
            .collect()
    }
}

impl From<CatalogFile> for Catalog {
    fn from(file: CatalogFile) -> Self {
        let catalog = Catalog::new(file.publications, file.journals, file.disciplines);
        match file.discipline_names {
            Some(names) => catalog.with_discipline_names(names),
            None => catalog,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const CATALOG_YAML: &str = r#"
publications:
  - author: Naukowiec_1
    journal: Journal of Physics
  - author: naukowiec_1
    journal: Chemistry Letters
  - author: Naukowiec_2
    journal: Journal of Physics
journals:
  - title: Journal of Physics
    discipline_a: Physics
  - title: Chemistry Letters
    discipline_a: Chemistry
    discipline_b: Physics
disciplines:
  - title: Physics
    domains_a: Natural Sciences
  - title: Chemistry
    domains_a: Natural Sciences
    domains_b: Engineering
"#;

    #[test]
    fn parses_yaml_catalog() {
        let catalog = Catalog::from_yaml_str(CATALOG_YAML).unwrap();
        assert_eq!(catalog.publications().len(), 3);
        assert_eq!(catalog.journals().len(), 2);
        assert_eq!(catalog.disciplines().len(), 2);
        assert_eq!(catalog.discipline_names(), ["Physics", "Chemistry"]);
    }

    #[test]
    fn publications_by_matches_case_insensitively() {
        let catalog = Catalog::from_yaml_str(CATALOG_YAML).unwrap();
        assert_eq!(catalog.publications_by("NAUKOWIEC_1 ").count(), 2);
        assert_eq!(catalog.publications_by("nobody").count(), 0);
    }

    #[test]
    fn scientists_are_distinct_in_first_seen_order() {
        let catalog = Catalog::from_yaml_str(CATALOG_YAML).unwrap();
        assert_eq!(catalog.scientists(), vec!["Naukowiec_1", "Naukowiec_2"]);
    }

    #[test]
    fn explicit_discipline_names_override_titles() {
        let file = CatalogFile {
            discipline_names: Some(vec!["X".into(), "Y".into()]),
            ..Default::default()
        };
        let catalog = Catalog::from(file);
        assert_eq!(catalog.discipline_names(), ["X", "Y"]);
    }

    #[test]
    fn loads_json_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"{{"journals": [{{"title": "Nature", "discipline_a": "Biology"}}]}}"#
        )
        .unwrap();

        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog.journals().get("nature").unwrap().discipline_a, "Biology");
        assert!(catalog.publications().is_empty());
    }

    #[test]
    fn rejects_unknown_extension() {
        let file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        let err = Catalog::load(file.path()).unwrap_err();
        assert!(matches!(err, CatalogError::UnsupportedFormat(ext) if ext == "csv"));
    }
}
