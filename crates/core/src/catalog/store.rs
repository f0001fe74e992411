//! The in-memory catalog store, write-once per session.

use chrono::{DateTime, Utc};
use tracing::info;

use super::{CatalogDocument, CatalogError, CatalogStats, FilterVocabulary, PublicationRecord};
use crate::metrics;
use crate::source::DocumentSource;

/// Immutable store of publication records and filter vocabularies.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    publications: Vec<PublicationRecord>,
    vocabulary: FilterVocabulary,
    loaded_at: DateTime<Utc>,
}

impl CatalogStore {
    /// Fetch and parse the catalog document from its source.
    pub async fn load(source: &dyn DocumentSource) -> Result<Self, CatalogError> {
        let body = source
            .fetch()
            .await
            .map_err(|e| CatalogError::Unreachable(e.to_string()))
            .inspect_err(|_| metrics::CATALOG_LOADS.with_label_values(&["unreachable"]).inc())?;

        let document: CatalogDocument = serde_json::from_str(&body).map_err(|e| {
            metrics::CATALOG_LOADS.with_label_values(&["malformed"]).inc();
            CatalogError::Malformed(e.to_string())
        })?;

        let store = Self::from_document(document);
        metrics::CATALOG_LOADS.with_label_values(&["ok"]).inc();
        info!(
            source = %source.describe(),
            publications = store.len(),
            "Catalog loaded"
        );
        Ok(store)
    }

    /// Build a store from an already-parsed document.
    pub fn from_document(document: CatalogDocument) -> Self {
        Self {
            publications: document.publications,
            vocabulary: document.filters,
            loaded_at: Utc::now(),
        }
    }

    /// An empty store for the degraded "data unavailable" state.
    pub fn empty() -> Self {
        Self {
            publications: Vec::new(),
            vocabulary: FilterVocabulary::default(),
            loaded_at: Utc::now(),
        }
    }

    pub fn publications(&self) -> &[PublicationRecord] {
        &self.publications
    }

    pub fn vocabulary(&self) -> &FilterVocabulary {
        &self.vocabulary
    }

    pub fn len(&self) -> usize {
        self.publications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.publications.is_empty()
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            total_publications: self.publications.len(),
            distinct_genres: self.vocabulary.genres.len(),
            distinct_regions: self.vocabulary.regions.len(),
            loaded_at: self.loaded_at,
        }
    }
}
