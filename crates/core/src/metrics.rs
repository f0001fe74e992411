//! Prometheus metrics for core components.
//!
//! This module provides metrics for:
//! - Catalog loading (by result)
//! - Query pipeline (evaluations, duration)
//! - Curated index (size)

use once_cell::sync::Lazy;
use prometheus::{Histogram, HistogramOpts, IntCounterVec, IntGauge, Opts, Registry};

/// Catalog load attempts by result ("ok", "unreachable", "malformed").
pub static CATALOG_LOADS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("pressdeck_catalog_loads_total", "Catalog load attempts"),
        &["result"],
    )
    .unwrap()
});

/// Query pipeline evaluations by view mode ("all", "curated").
pub static QUERIES_EVALUATED: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "pressdeck_queries_evaluated_total",
            "Query pipeline evaluations",
        ),
        &["view_mode"],
    )
    .unwrap()
});

/// Query pipeline duration in seconds.
pub static QUERY_DURATION: Lazy<Histogram> = Lazy::new(|| {
    Histogram::with_opts(
        HistogramOpts::new(
            "pressdeck_query_duration_seconds",
            "Duration of one query pipeline evaluation",
        )
        .buckets(vec![0.0001, 0.0005, 0.001, 0.005, 0.01, 0.05, 0.1]),
    )
    .unwrap()
});

/// Number of keys in the curated index (0 until built).
pub static CURATED_INDEX_SIZE: Lazy<IntGauge> = Lazy::new(|| {
    IntGauge::new(
        "pressdeck_curated_index_size",
        "Normalized keys in the curated index",
    )
    .unwrap()
});

/// Register all core metrics with a registry.
pub fn register_metrics(registry: &Registry) {
    let _ = registry.register(Box::new(CATALOG_LOADS.clone()));
    let _ = registry.register(Box::new(QUERIES_EVALUATED.clone()));
    let _ = registry.register(Box::new(QUERY_DURATION.clone()));
    let _ = registry.register(Box::new(CURATED_INDEX_SIZE.clone()));
}
