//! Curated index lifecycle handlers.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use pressdeck_core::CuratedState;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CuratedStatusResponse {
    /// Whether a curated list is configured at all.
    pub configured: bool,
    /// Lifecycle state: "not_loaded", "loading", "ready" or "failed".
    pub state: String,
    /// Normalized keys in the index (when ready).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keys: Option<usize>,
    /// Curated names with no catalog match (when ready, diagnostic only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

async fn status_of(state: &AppState) -> CuratedStatusResponse {
    let Some(loader) = state.curated() else {
        return CuratedStatusResponse {
            configured: false,
            state: "not_loaded".to_string(),
            keys: None,
            missing: None,
            error: None,
        };
    };

    let lifecycle = loader.state().await;
    let (keys, missing, error) = match &lifecycle {
        CuratedState::Ready(index) => (
            Some(index.len()),
            Some(index.missing_count(state.catalog())),
            None,
        ),
        CuratedState::Failed(reason) => (None, None, Some(reason.clone())),
        _ => (None, None, None),
    };

    CuratedStatusResponse {
        configured: true,
        state: lifecycle.label().to_string(),
        keys,
        missing,
        error,
    }
}

/// GET /api/v1/curated
///
/// Lifecycle state of the curated index. Never triggers a load.
pub async fn get_status(State(state): State<Arc<AppState>>) -> Json<CuratedStatusResponse> {
    Json(status_of(&state).await)
}

/// POST /api/v1/curated/load
///
/// Warm the curated index instead of waiting for the first curated-mode
/// query. A cached failure is reported as 502.
pub async fn load_index(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CuratedStatusResponse>, impl IntoResponse> {
    let Some(loader) = state.curated() else {
        return Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "no curated list configured".to_string(),
            }),
        ));
    };

    match loader.ensure_loaded().await {
        Ok(_) => Ok(Json(status_of(&state).await)),
        Err(e) => Err((
            StatusCode::BAD_GATEWAY,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )),
    }
}
