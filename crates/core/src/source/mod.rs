//! Document sources - where the catalog and curated-list documents come from.
//!
//! Both documents are small JSON files produced offline by the spreadsheet
//! conversion tooling. A source only fetches the raw body; parsing belongs
//! to the consumer (catalog or curated loader).

mod file;
mod http;

pub use file::FileSource;
pub use http::HttpSource;

use async_trait::async_trait;
use thiserror::Error;

/// Errors for document fetching.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Document source unreachable: {0}")]
    Unreachable(String),
}

/// Trait for fetching a raw document body.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Fetch the document body as a string.
    async fn fetch(&self) -> Result<String, SourceError>;

    /// Human-readable description of the source (for logs).
    fn describe(&self) -> String;
}
