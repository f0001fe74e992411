//! Curated "best sellers" list reconciliation.
//!
//! The curated list is authored in a different spreadsheet than the catalog,
//! so its names disagree on capitalization, punctuation, spacing and
//! camel-case concatenation. Reconciliation is exact equality after a lossy
//! but deterministic normalization applied to both sides - not a fuzzy
//! match.
//!
//! The index is built lazily on first request and cached for the session,
//! including a cached failure (no retry, no invalidation).

mod index;
mod loader;
mod normalize;

pub use index::{CuratedDocument, CuratedIndex};
pub use loader::{CuratedLoader, CuratedState};
pub use normalize::normalize_name;

use thiserror::Error;

/// Errors for curated list loading.
#[derive(Debug, Error)]
pub enum CuratedError {
    #[error("Curated list unavailable: {0}")]
    Unavailable(String),
}
