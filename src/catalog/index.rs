//! Title-keyed lookup over catalog records

use super::normalize;
use std::collections::HashMap;

/// A record addressable by its title
pub trait Titled {
    fn title(&self) -> &str;
}

/// Records indexed by normalized title
///
/// Keeps records in their original order. When several records share a
/// normalized title, lookups resolve to the first one.
#[derive(Debug, Clone)]
pub struct TitleIndex<T> {
    records: Vec<T>,
    by_title: HashMap<String, usize>,
}

impl<T: Titled> TitleIndex<T> {
    pub fn new(records: Vec<T>) -> Self {
        let mut by_title = HashMap::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            by_title.entry(normalize(record.title())).or_insert(i);
        }
        Self { records, by_title }
    }

    /// Resolve a record by title (case and padding ignored)
    pub fn get(&self, title: &str) -> Option<&T> {
        self.by_title
            .get(&normalize(title))
            .and_then(|&i| self.records.get(i))
    }

    pub fn contains(&self, title: &str) -> bool {
        self.by_title.contains_key(&normalize(title))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T: Titled> Default for TitleIndex<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T: Titled> FromIterator<T> for TitleIndex<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
