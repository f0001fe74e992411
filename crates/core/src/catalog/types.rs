//! Types for the publication catalog.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single publication entry in the catalog.
///
/// Wire names are camelCase to match the document emitted by the upstream
/// conversion tooling. Every non-key field is defaulted rather than
/// rejected: a record with a missing price is a free record, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicationRecord {
    /// Unique id within the catalog.
    pub id: u64,
    /// Display name (unique-ish, not enforced).
    pub name: String,
    /// Genre tags, zero or more.
    #[serde(default)]
    pub genres: Vec<String>,
    /// Price in whole or fractional currency units. Missing defaults to 0.
    #[serde(default)]
    pub price: f64,
    /// Domain authority score. 0 means unknown and displays as a placeholder.
    #[serde(default)]
    pub domain_authority: u32,
    /// Free-text turnaround estimate (e.g. "3 days", "2 weeks"), may be empty.
    #[serde(default)]
    pub turnaround_time: String,
    /// Free-text geography label, may be empty.
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub sponsored: bool,
    #[serde(default)]
    pub indexed: bool,
    #[serde(default)]
    pub do_follow: bool,
    /// Descriptive fields carried through for display, unused by filtering.
    #[serde(default)]
    pub publication_type: String,
    #[serde(default)]
    pub lifespan: String,
    #[serde(default)]
    pub mention_style: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub image: String,
}

/// Precomputed filter option lists, supplied alongside the records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterVocabulary {
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub regions: Vec<String>,
    #[serde(default)]
    pub publication_types: Vec<String>,
}

/// The catalog document as fetched from its source.
///
/// Both top-level keys are required; a document missing either is malformed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub publications: Vec<PublicationRecord>,
    pub filters: FilterVocabulary,
}

/// Catalog statistics for the stats endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogStats {
    /// Total publication records.
    pub total_publications: usize,
    /// Distinct genre values in the vocabulary.
    pub distinct_genres: usize,
    /// Distinct region values in the vocabulary.
    pub distinct_regions: usize,
    /// When the catalog was loaded.
    pub loaded_at: chrono::DateTime<chrono::Utc>,
}

/// Errors for catalog loading.
///
/// Both variants surface to the user as the single "data unavailable"
/// notice; the portal stays usable with an empty record set.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog unreachable: {0}")]
    Unreachable(String),

    #[error("Malformed catalog document: {0}")]
    Malformed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_defaults_missing_fields() {
        let json = r#"{"id": 7, "name": "Wired"}"#;
        let record: PublicationRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.id, 7);
        assert_eq!(record.name, "Wired");
        assert!(record.genres.is_empty());
        assert_eq!(record.price, 0.0);
        assert_eq!(record.domain_authority, 0);
        assert_eq!(record.turnaround_time, "");
        assert_eq!(record.region, "");
        assert!(!record.sponsored);
        assert!(!record.indexed);
        assert!(!record.do_follow);
    }

    #[test]
    fn test_record_camel_case_wire_names() {
        let json = r#"{
            "id": 1,
            "name": "Forbes",
            "domainAuthority": 94,
            "turnaroundTime": "3 days",
            "doFollow": true,
            "publicationType": "News"
        }"#;
        let record: PublicationRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.domain_authority, 94);
        assert_eq!(record.turnaround_time, "3 days");
        assert!(record.do_follow);
        assert_eq!(record.publication_type, "News");
    }

    #[test]
    fn test_document_requires_top_level_keys() {
        let missing_filters = r#"{"publications": []}"#;
        assert!(serde_json::from_str::<CatalogDocument>(missing_filters).is_err());

        let missing_publications = r#"{"filters": {}}"#;
        assert!(serde_json::from_str::<CatalogDocument>(missing_publications).is_err());

        let both = r#"{"publications": [], "filters": {}}"#;
        assert!(serde_json::from_str::<CatalogDocument>(both).is_ok());
    }
}
