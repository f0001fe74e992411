//! The normalized-name membership index.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::normalize_name;
use crate::catalog::{CatalogStore, PublicationRecord};

/// The curated-list document as fetched from its source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CuratedDocument {
    pub names: Vec<String>,
}

/// Set of normalized curated names, checked against normalized record names.
#[derive(Debug, Clone, Default)]
pub struct CuratedIndex {
    keys: HashSet<String>,
}

impl CuratedIndex {
    /// Build the index from raw display names.
    ///
    /// Pure and total: empty or garbage input yields an empty or partial
    /// set, never an error. Names that normalize to the empty string are
    /// dropped.
    pub fn build<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keys = names
            .into_iter()
            .map(|n| normalize_name(n.as_ref()))
            .filter(|k| !k.is_empty())
            .collect();
        Self { keys }
    }

    /// Whether a catalog record belongs to the curated subset.
    pub fn contains(&self, record: &PublicationRecord) -> bool {
        self.keys.contains(&normalize_name(&record.name))
    }

    /// Number of curated names with no matching catalog record.
    ///
    /// A diagnostic, not a correctness gate: it never removes entries from
    /// the result, it only lets the UI warn that N names didn't resolve.
    pub fn missing_count(&self, catalog: &CatalogStore) -> usize {
        let catalog_keys: HashSet<String> = catalog
            .publications()
            .iter()
            .map(|r| normalize_name(&r.name))
            .collect();
        self.keys.iter().filter(|k| !catalog_keys.contains(*k)).count()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
