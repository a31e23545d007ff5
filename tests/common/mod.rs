//! Shared fixtures for integration tests
//!
//! A small catalog of two scientists, three catalogued journals (plus one
//! uncatalogued) and three disciplines,
//! available both in memory and as a YAML file on disk.

#![allow(dead_code)]

use sciencefuzz::{Catalog, Discipline, Journal, Publication};
use std::io::Write;
use tempfile::NamedTempFile;

pub const CATALOG_YAML: &str = r#"
publications:
  - author: Naukowiec_1
    journal: Journal of Physics
    title: On Quanta
    formal_type: article
  - author: Naukowiec_1
    journal: Physical Chemistry Letters
  - author: naukowiec_1
    journal: physical chemistry letters
  - author: Naukowiec_1
    journal: Proceedings of Nowhere
  - author: Naukowiec_2
    journal: Annals of Biology
journals:
  - title: Journal of Physics
    discipline_a: Physics
  - title: Physical Chemistry Letters
    discipline_a: Chemistry
    discipline_b: Physics
    disciplines_c: "Materials Science, "
  - title: Annals of Biology
    discipline_a: Biology
disciplines:
  - title: Physics
    domains_a: Natural Sciences
  - title: Chemistry
    domains_a: Natural Sciences
    domains_b: Engineering
  - title: Biology
    domains_a: "Natural Sciences, Life Sciences"
discipline_names:
  - Physics
  - Chemistry
  - Biology
  - Materials Science
"#;

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-12
}

/// The fixture catalog, parsed in memory
pub fn fixture_catalog() -> Catalog {
    Catalog::from_yaml_str(CATALOG_YAML).expect("fixture catalog parses")
}

/// The fixture catalog written to a temporary `.yaml` file
pub fn fixture_catalog_file() -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("create temp catalog");
    file.write_all(CATALOG_YAML.as_bytes()).expect("write temp catalog");
    file
}

/// Scientist "A" with publications in J1 (A=Physics) and J2 (A=Physics, B=Chemistry)
pub fn two_journal_catalog() -> Catalog {
    Catalog::new(
        vec![Publication::new("A", "J1"), Publication::new("A", "J2")],
        vec![
            Journal::new("J1").with_discipline_a("Physics"),
            Journal::new("J2")
                .with_discipline_a("Physics")
                .with_discipline_b("Chemistry"),
        ],
        vec![Discipline::new("Physics"), Discipline::new("Chemistry")],
    )
}
