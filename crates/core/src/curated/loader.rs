//! Lazy, session-cached loading of the curated index.

use std::pin::pin;
use std::sync::Arc;

use tokio::sync::{Mutex, Notify};
use tracing::{info, warn};

use super::{CuratedDocument, CuratedError, CuratedIndex};
use crate::metrics;
use crate::source::DocumentSource;

/// Lifecycle of the curated index.
///
/// Explicit states rather than a nullable cache, so a trigger while a fetch
/// is in flight waits for it instead of starting a duplicate.
#[derive(Debug, Clone, Default)]
pub enum CuratedState {
    #[default]
    NotLoaded,
    Loading,
    Ready(Arc<CuratedIndex>),
    Failed(String),
}

impl CuratedState {
    pub fn label(&self) -> &'static str {
        match self {
            CuratedState::NotLoaded => "not_loaded",
            CuratedState::Loading => "loading",
            CuratedState::Ready(_) => "ready",
            CuratedState::Failed(_) => "failed",
        }
    }
}

/// Loads the curated index on first use and caches the outcome for the
/// session. A failed fetch is cached too - reported once, never retried.
pub struct CuratedLoader {
    shared: Arc<LoaderShared>,
}

struct LoaderShared {
    source: Box<dyn DocumentSource>,
    state: Mutex<CuratedState>,
    changed: Notify,
}

impl CuratedLoader {
    pub fn new(source: Box<dyn DocumentSource>) -> Self {
        Self {
            shared: Arc::new(LoaderShared {
                source,
                state: Mutex::new(CuratedState::NotLoaded),
                changed: Notify::new(),
            }),
        }
    }

    /// Current lifecycle state, for the status endpoint.
    pub async fn state(&self) -> CuratedState {
        self.shared.state.lock().await.clone()
    }

    /// Return the cached index, building it on first call.
    ///
    /// The fetch runs in its own task, so the request that triggered it can
    /// be dropped (client disconnect) without stranding the state at
    /// `Loading`. Concurrent callers during the fetch wait for its outcome
    /// rather than fetching again.
    pub async fn ensure_loaded(&self) -> Result<Arc<CuratedIndex>, CuratedError> {
        loop {
            let mut state = self.shared.state.lock().await;
            match &*state {
                CuratedState::Ready(index) => return Ok(Arc::clone(index)),
                CuratedState::Failed(reason) => {
                    return Err(CuratedError::Unavailable(reason.clone()))
                }
                CuratedState::NotLoaded => {
                    *state = CuratedState::Loading;
                    let shared = Arc::clone(&self.shared);
                    tokio::spawn(async move { shared.run_fetch().await });
                }
                CuratedState::Loading => {}
            }

            // A fetch is in flight. Register for the wakeup before releasing
            // the lock so a fetch completing in between is not missed, then
            // wait and re-check.
            let mut notified = pin!(self.shared.changed.notified());
            notified.as_mut().enable();
            drop(state);
            notified.await;
        }
    }
}

impl LoaderShared {
    async fn run_fetch(&self) {
        let outcome = self.fetch_index().await;
        let mut state = self.state.lock().await;
        *state = match outcome {
            Ok(index) => CuratedState::Ready(Arc::new(index)),
            Err(e) => CuratedState::Failed(e.to_string()),
        };
        drop(state);
        self.changed.notify_waiters();
    }

    async fn fetch_index(&self) -> Result<CuratedIndex, CuratedError> {
        let body = self
            .source
            .fetch()
            .await
            .map_err(|e| CuratedError::Unavailable(e.to_string()))?;

        let document: CuratedDocument = serde_json::from_str(&body)
            .map_err(|e| CuratedError::Unavailable(format!("malformed document: {}", e)))?;

        let index = CuratedIndex::build(&document.names);
        metrics::CURATED_INDEX_SIZE.set(index.len() as i64);
        info!(
            source = %self.source.describe(),
            names = document.names.len(),
            keys = index.len(),
            "Curated index built"
        );
        if index.len() < document.names.len() {
            warn!(
                dropped = document.names.len() - index.len(),
                "Curated names dropped during normalization (empty or duplicate keys)"
            );
        }
        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;

    use super::*;
    use crate::source::SourceError;
    use crate::testing::StaticSource;

    /// Source that takes a while to respond, for in-flight fetch tests.
    struct SlowSource {
        body: String,
        delay: Duration,
        fetch_count: Arc<AtomicUsize>,
    }

    impl SlowSource {
        fn new(body: &str, delay: Duration) -> Self {
            Self {
                body: body.to_string(),
                delay,
                fetch_count: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn fetch_count(&self) -> Arc<AtomicUsize> {
            Arc::clone(&self.fetch_count)
        }
    }

    #[async_trait]
    impl DocumentSource for SlowSource {
        async fn fetch(&self) -> Result<String, SourceError> {
            self.fetch_count.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(self.delay).await;
            Ok(self.body.clone())
        }

        fn describe(&self) -> String {
            "slow".to_string()
        }
    }

    #[tokio::test]
    async fn test_loads_once_and_caches() {
        let source = StaticSource::ok(r#"{"names": ["Forbes", "Wired"]}"#);
        let counter = source.fetch_count();
        let loader = CuratedLoader::new(Box::new(source));

        let first = loader.ensure_loaded().await.unwrap();
        let second = loader.ensure_loaded().await.unwrap();

        assert_eq!(first.len(), 2);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(counter.load(Ordering::SeqCst), 1);
        assert!(matches!(loader.state().await, CuratedState::Ready(_)));
    }

    #[tokio::test]
    async fn test_failure_is_cached() {
        let source = StaticSource::unreachable("connection refused");
        let counter = source.fetch_count();
        let loader = CuratedLoader::new(Box::new(source));

        assert!(loader.ensure_loaded().await.is_err());
        // Second call does not retry the fetch.
        assert!(loader.ensure_loaded().await.is_err());
        assert_eq!(counter.load(Ordering::SeqCst), 1);
        assert!(matches!(loader.state().await, CuratedState::Failed(_)));
    }

    #[tokio::test]
    async fn test_malformed_document_fails() {
        let source = StaticSource::ok(r#"{"nope": []}"#);
        let loader = CuratedLoader::new(Box::new(source));

        let err = loader.ensure_loaded().await.unwrap_err();
        assert!(matches!(err, CuratedError::Unavailable(_)));
    }

    #[tokio::test]
    async fn test_concurrent_callers_share_one_fetch() {
        let source = StaticSource::ok(r#"{"names": ["Forbes"]}"#);
        let counter = source.fetch_count();
        let loader = Arc::new(CuratedLoader::new(Box::new(source)));

        let tasks: Vec<_> = (0..8)
            .map(|_| {
                let loader = Arc::clone(&loader);
                tokio::spawn(async move { loader.ensure_loaded().await })
            })
            .collect();

        for task in tasks {
            assert!(task.await.unwrap().is_ok());
        }
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_cancelled_caller_does_not_strand_the_fetch() {
        let source = SlowSource::new(r#"{"names": ["Forbes"]}"#, Duration::from_millis(100));
        let counter = source.fetch_count();
        let loader = Arc::new(CuratedLoader::new(Box::new(source)));

        // First caller triggers the fetch, then goes away mid-request.
        let first = tokio::spawn({
            let loader = Arc::clone(&loader);
            async move { loader.ensure_loaded().await }
        });
        tokio::time::sleep(Duration::from_millis(10)).await;
        first.abort();

        // The fetch keeps running; a later caller gets its outcome instead
        // of waiting on a Loading state nobody will ever resolve.
        let index = tokio::time::timeout(Duration::from_secs(5), loader.ensure_loaded())
            .await
            .expect("loader stuck after a cancelled caller")
            .unwrap();
        assert_eq!(index.len(), 1);
        assert_eq!(counter.load(Ordering::SeqCst), 1);
        assert!(matches!(loader.state().await, CuratedState::Ready(_)));
    }

    #[tokio::test]
    async fn test_initial_state_not_loaded() {
        let source = StaticSource::ok(r#"{"names": []}"#);
        let loader = CuratedLoader::new(Box::new(source));
        assert!(matches!(loader.state().await, CuratedState::NotLoaded));
    }
}
