//! The publications query endpoint - the HTTP face of the query engine.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use pressdeck_core::{
    visible_results, PublicationRecord, QueryState, SortDirection, SortKey, ViewMode,
};
use tracing::debug;

use crate::state::AppState;

// ============================================================================
// Request/Response types
// ============================================================================

/// Flat query parameters, converted to a `QueryState`.
///
/// Multi-value dimensions (genres, regions) are comma-separated, matching
/// how the dashboard serializes its checkbox sets.
#[derive(Debug, Default, Deserialize)]
pub struct PublicationQueryParams {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub genres: Option<String>,
    #[serde(default)]
    pub regions: Option<String>,
    #[serde(default)]
    pub price_min: Option<f64>,
    #[serde(default)]
    pub price_max: Option<f64>,
    #[serde(default)]
    pub sponsored: Option<bool>,
    #[serde(default)]
    pub indexed: Option<bool>,
    #[serde(default)]
    pub do_follow: Option<bool>,
    #[serde(default)]
    pub sort: Option<SortKey>,
    #[serde(default)]
    pub direction: Option<SortDirection>,
    #[serde(default)]
    pub view: Option<ViewMode>,
}

impl PublicationQueryParams {
    fn into_state(self) -> QueryState {
        let split = |s: Option<String>| -> Vec<String> {
            s.map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|v| !v.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
        };

        let defaults = QueryState::default();
        QueryState {
            search: self.q.unwrap_or_default(),
            genres: split(self.genres),
            regions: split(self.regions),
            price_min: self.price_min.unwrap_or(defaults.price_min),
            price_max: self.price_max.unwrap_or(defaults.price_max),
            sponsored: self.sponsored,
            indexed: self.indexed,
            do_follow: self.do_follow,
            sort_key: self.sort.unwrap_or_default(),
            sort_direction: self.direction.unwrap_or_default(),
            view_mode: self.view.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PublicationsResponse {
    pub publications: Vec<PublicationRecord>,
    /// Records after filtering ("Showing X ...").
    pub shown: usize,
    /// Base-set size before filtering ("... of Y").
    pub total: usize,
    /// Curated names that resolved to no catalog record (diagnostic).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing_curated: Option<usize>,
    /// Set when curated mode was requested but the list is unavailable;
    /// results then come from the full catalog.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curated_error: Option<String>,
    /// Set when the catalog itself failed to load at startup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_error: Option<String>,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/v1/publications
///
/// Run the filter/sort pipeline for the given predicate state. Requesting
/// curated view triggers the lazy index load on first use; if the list is
/// unavailable the response degrades to the full catalog and says so.
pub async fn list_publications(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PublicationQueryParams>,
) -> Json<PublicationsResponse> {
    let query = params.into_state();

    let mut missing_curated = None;
    let mut curated_error = None;
    let index = if query.view_mode == ViewMode::Curated {
        match state.curated() {
            Some(loader) => match loader.ensure_loaded().await {
                Ok(index) => {
                    missing_curated = Some(index.missing_count(state.catalog()));
                    Some(index)
                }
                Err(e) => {
                    curated_error = Some(e.to_string());
                    None
                }
            },
            None => {
                curated_error = Some("no curated list configured".to_string());
                None
            }
        }
    } else {
        None
    };

    let result = visible_results(state.catalog(), &query, index.as_deref());
    debug!(
        shown = result.shown(),
        total = result.total,
        sort = ?query.sort_key,
        view = ?query.view_mode,
        "Query evaluated"
    );

    Json(PublicationsResponse {
        shown: result.shown(),
        total: result.total,
        publications: result.records.into_iter().cloned().collect(),
        missing_curated,
        curated_error,
        catalog_error: state.catalog_error().map(str::to_string),
    })
}
