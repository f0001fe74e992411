//! Filter vocabulary and catalog stats handlers.

use std::sync::Arc;

use axum::{extract::State, Json};
use pressdeck_core::{CatalogStats, FilterVocabulary};

use crate::state::AppState;

/// GET /api/v1/filters
///
/// The precomputed filter option lists, so the dashboard can enumerate
/// checkbox options without scanning records.
pub async fn get_filters(State(state): State<Arc<AppState>>) -> Json<FilterVocabulary> {
    Json(state.catalog().vocabulary().clone())
}

/// GET /api/v1/catalog/stats
///
/// Get catalog statistics.
pub async fn get_stats(State(state): State<Arc<AppState>>) -> Json<CatalogStats> {
    Json(state.catalog().stats())
}
