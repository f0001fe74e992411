use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::{curated, filters, handlers, middleware, publications};
use crate::metrics;
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    // API routes
    let api_routes = Router::new()
        // Health and config
        .route("/health", get(handlers::health))
        .route("/config", get(handlers::get_config))
        // Query engine
        .route("/publications", get(publications::list_publications))
        // Filter vocabularies and catalog stats
        .route("/filters", get(filters::get_filters))
        .route("/catalog/stats", get(filters::get_stats))
        // Curated "best sellers" index
        .route("/curated", get(curated::get_status))
        .route("/curated/load", post(curated::load_index))
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .route("/metrics", get(|| async { metrics::gather() }))
        .layer(axum_middleware::from_fn(middleware::metrics_middleware))
        .layer(TraceLayer::new_for_http())
}
