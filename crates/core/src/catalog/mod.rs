//! Publication catalog - the immutable record collection behind the portal.
//!
//! The catalog is loaded once at startup from a JSON document produced by
//! the offline spreadsheet conversion tooling, and is never mutated
//! afterwards. Filter vocabularies (the distinct genre/region values) ship
//! inside the same document so the presentation layer can enumerate
//! checkbox options without re-scanning records.

mod store;
mod types;

pub use store::CatalogStore;
pub use types::*;
