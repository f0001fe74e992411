//! Common test utilities for E2E testing against the in-process router.
//!
//! The fixture wires the real router to a canned catalog and curated list,
//! so the whole HTTP surface is exercised without a network or on-disk
//! documents.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use pressdeck_core::testing::{fixtures, StaticSource};
use pressdeck_core::{load_config_from_str, CatalogStore, CuratedLoader};

use pressdeck_server::api;
use pressdeck_server::state::AppState;

/// Five curated names; two have no catalog counterpart.
pub const CURATED_DOC: &str =
    r#"{"names": ["forbes!", "VentureBeat", "Wired", "The-Guardian", "Nope Daily"]}"#;

const TEST_CONFIG: &str = r#"
[server]
host = "127.0.0.1"
port = 8080

[catalog]
source = "file"
file = { path = "unused-in-tests.json" }
"#;

/// Test fixture exposing the full router over canned data.
pub struct TestFixture {
    pub router: Router,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestFixture {
    /// Sample catalog plus a curated list with two unresolvable names.
    pub fn new() -> Self {
        let curated = CuratedLoader::new(Box::new(StaticSource::ok(CURATED_DOC)));
        Self::with_parts(fixtures::sample_catalog(), None, Some(curated))
    }

    /// Sample catalog, no curated list configured.
    pub fn without_curated() -> Self {
        Self::with_parts(fixtures::sample_catalog(), None, None)
    }

    /// Sample catalog with a curated source that always fails.
    pub fn with_failing_curated() -> Self {
        let curated = CuratedLoader::new(Box::new(StaticSource::unreachable("boom")));
        Self::with_parts(fixtures::sample_catalog(), None, Some(curated))
    }

    /// The degraded state after a failed catalog load.
    pub fn with_unavailable_catalog() -> Self {
        Self::with_parts(
            CatalogStore::empty(),
            Some("Catalog unreachable: boom".to_string()),
            None,
        )
    }

    pub fn with_parts(
        catalog: CatalogStore,
        catalog_error: Option<String>,
        curated: Option<CuratedLoader>,
    ) -> Self {
        let config = load_config_from_str(TEST_CONFIG).expect("test config parses");
        let state = Arc::new(AppState::new(config, catalog, catalog_error, curated));
        Self {
            router: api::create_router(state),
        }
    }

    pub async fn get(&self, path: &str) -> TestResponse {
        let request = Request::builder()
            .uri(path)
            .body(Body::empty())
            .expect("request builds");
        self.send(request).await
    }

    pub async fn post(&self, path: &str) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .body(Body::empty())
            .expect("request builds");
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router responds");

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body collects")
            .to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::String(
                String::from_utf8_lossy(&bytes).into_owned(),
            ))
        };

        TestResponse { status, body }
    }
}

/// Names of the publications in a /publications response, in order.
pub fn publication_names(body: &Value) -> Vec<String> {
    body["publications"]
        .as_array()
        .map(|records| {
            records
                .iter()
                .filter_map(|r| r["name"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
