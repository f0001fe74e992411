//! The full predicate/sort state, passed into the engine as one value.

use serde::{Deserialize, Serialize};

/// Sort key for the result sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Price,
    DomainAuthority,
    Region,
    #[default]
    Name,
    TurnaroundTime,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Apply the direction to an ascending ordering. `Equal` stays `Equal`,
    /// so stable sorts keep catalog order for ties in either direction.
    pub fn apply(self, ordering: std::cmp::Ordering) -> std::cmp::Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// Which base set the pipeline starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    /// The full catalog.
    #[default]
    All,
    /// Only records matched by the curated "best sellers" index.
    Curated,
}

/// The complete query state owned by the presentation layer.
///
/// All fields default, so `QueryState::default()` is the neutral state that
/// keeps every record. Tri-state toggles are `None` (no constraint) or
/// `Some(required_value)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryState {
    /// Case-insensitive substring match over name and genre tags.
    pub search: String,
    /// OR-semantics genre selection; empty means no constraint.
    pub genres: Vec<String>,
    /// Exact-membership region selection; empty means no constraint.
    pub regions: Vec<String>,
    /// Inclusive lower price bound.
    pub price_min: f64,
    /// Inclusive upper price bound.
    pub price_max: f64,
    pub sponsored: Option<bool>,
    pub indexed: Option<bool>,
    pub do_follow: Option<bool>,
    pub sort_key: SortKey,
    pub sort_direction: SortDirection,
    pub view_mode: ViewMode,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search: String::new(),
            genres: Vec::new(),
            regions: Vec::new(),
            price_min: 0.0,
            price_max: f64::INFINITY,
            sponsored: None,
            indexed: None,
            do_follow: None,
            sort_key: SortKey::default(),
            sort_direction: SortDirection::default(),
            view_mode: ViewMode::default(),
        }
    }
}
