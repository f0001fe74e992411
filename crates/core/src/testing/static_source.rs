use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use crate::source::{DocumentSource, SourceError};

/// Document source returning a canned body or a canned failure.
///
/// Counts fetches so tests can assert single-fetch lifecycle semantics.
pub struct StaticSource {
    body: Result<String, String>,
    fetches: Arc<AtomicUsize>,
}

impl StaticSource {
    /// A source that successfully returns `body`.
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            body: Ok(body.into()),
            fetches: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A source that always fails with `reason`.
    pub fn unreachable(reason: impl Into<String>) -> Self {
        Self {
            body: Err(reason.into()),
            fetches: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Shared fetch counter, valid after the source is boxed away.
    pub fn fetch_count(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.fetches)
    }
}

#[async_trait]
impl DocumentSource for StaticSource {
    async fn fetch(&self) -> Result<String, SourceError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        match &self.body {
            Ok(body) => Ok(body.clone()),
            Err(reason) => Err(SourceError::Unreachable(reason.clone())),
        }
    }

    fn describe(&self) -> String {
        "static".to_string()
    }
}
