//! Catalog record types

use super::index::Titled;
use serde::{Deserialize, Serialize};

/// A publication attributed to a scientist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    /// Author (scientist) name as recorded
    pub author: String,
    /// Full title of the journal the publication appeared in
    pub journal: String,
    /// Publication title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Abbreviated journal title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journal_short: Option<String>,
    /// Formal publication type (article, review, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formal_type: Option<String>,
}

impl Publication {
    /// Create a publication record for an author and journal
    pub fn new(author: impl Into<String>, journal: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            journal: journal.into(),
            title: None,
            journal_short: None,
            formal_type: None,
        }
    }

    /// Set the publication title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the formal publication type
    pub fn with_formal_type(mut self, formal_type: impl Into<String>) -> Self {
        self.formal_type = Some(formal_type.into());
        self
    }

    /// Whether this publication belongs to `scientist` (case and padding ignored)
    pub fn is_by(&self, scientist: &str) -> bool {
        super::normalize(&self.author) == super::normalize(scientist)
    }
}

/// A journal and the disciplines it publishes in
///
/// Slot A is the primary discipline, slot B the secondary one; `disciplines_c`
/// is a comma-joined overflow list. Blank slots carry no discipline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Journal {
    pub title: String,
    #[serde(default)]
    pub discipline_a: String,
    #[serde(default)]
    pub discipline_b: String,
    #[serde(default)]
    pub disciplines_c: String,
}

impl Journal {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_discipline_a(mut self, discipline: impl Into<String>) -> Self {
        self.discipline_a = discipline.into();
        self
    }

    pub fn with_discipline_b(mut self, discipline: impl Into<String>) -> Self {
        self.discipline_b = discipline.into();
        self
    }

    pub fn with_disciplines_c(mut self, disciplines: impl Into<String>) -> Self {
        self.disciplines_c = disciplines.into();
        self
    }

    /// All normalized disciplines of this journal, A then B then C, without duplicates
    pub fn disciplines(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        let slots = [&self.discipline_a, &self.discipline_b];
        let candidates = slots
            .into_iter()
            .map(|slot| super::normalize(slot))
            .filter(|d| !d.is_empty())
            .chain(super::split_categories(&self.disciplines_c));
        for discipline in candidates {
            if !out.contains(&discipline) {
                out.push(discipline);
            }
        }
        out
    }
}

impl Titled for Journal {
    fn title(&self) -> &str {
        &self.title
    }
}

/// A discipline and the domains it belongs to
///
/// Both slots are comma-joined domain lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discipline {
    pub title: String,
    #[serde(default)]
    pub domains_a: String,
    #[serde(default)]
    pub domains_b: String,
}

impl Discipline {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_domains_a(mut self, domains: impl Into<String>) -> Self {
        self.domains_a = domains.into();
        self
    }

    pub fn with_domains_b(mut self, domains: impl Into<String>) -> Self {
        self.domains_b = domains.into();
        self
    }
}

impl Titled for Discipline {
    fn title(&self) -> &str {
        &self.title
    }
}
