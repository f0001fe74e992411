//! Query engine - derives the visible result set from the catalog.
//!
//! Every predicate change re-runs the whole pipeline over the in-memory
//! collection; there is no incremental filtering. The engine is a pure
//! function of (catalog, state, curated index) and never fails: absent or
//! empty constraint sets mean "no constraint" and an empty catalog simply
//! yields empty results.

mod engine;
mod state;
mod tat;

pub use engine::{visible_results, QueryResult};
pub use state::{QueryState, SortDirection, SortKey, ViewMode};
pub use tat::{turnaround_days, UNPARSEABLE_TURNAROUND_DAYS};
