//! Testing utilities: canned document sources and catalog fixtures.
//!
//! Used by this crate's own tests and by the server's E2E suite, so tests
//! never need on-disk documents or a network.

pub mod fixtures;

mod static_source;

pub use static_source::StaticSource;
