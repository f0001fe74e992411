//! Predicate evaluation and sorting over the catalog.

use std::cmp::Ordering;

use serde::Serialize;

use super::tat::{turnaround_days, UNPARSEABLE_TURNAROUND_DAYS};
use super::{QueryState, SortKey, ViewMode};
use crate::catalog::{CatalogStore, PublicationRecord};
use crate::curated::CuratedIndex;
use crate::metrics;

/// The derived, ephemeral result of one pipeline run.
///
/// `records` borrows from the catalog - a view, never a mutated copy.
/// `total` is the base-set size before filtering, so the presentation layer
/// can render "Showing X of Y".
#[derive(Debug, Serialize)]
pub struct QueryResult<'a> {
    pub records: Vec<&'a PublicationRecord>,
    pub total: usize,
}

impl QueryResult<'_> {
    pub fn shown(&self) -> usize {
        self.records.len()
    }
}

/// Run the full filter/sort pipeline for one query state.
///
/// Stages run in a fixed order, sort last: curated base-set restriction,
/// text search, genre OR-filter, region filter, inclusive price range,
/// tri-state boolean filters, stable sort.
pub fn visible_results<'a>(
    catalog: &'a CatalogStore,
    state: &QueryState,
    curated: Option<&CuratedIndex>,
) -> QueryResult<'a> {
    let timer = metrics::QUERY_DURATION.start_timer();

    // Stage 1: base-set selection. Curated mode without a built index falls
    // back to the full catalog.
    let base: Vec<&PublicationRecord> = match (state.view_mode, curated) {
        (ViewMode::Curated, Some(index)) => catalog
            .publications()
            .iter()
            .filter(|r| index.contains(r))
            .collect(),
        _ => catalog.publications().iter().collect(),
    };
    let total = base.len();

    let search = state.search.trim().to_lowercase();

    let mut records: Vec<&PublicationRecord> = base
        .into_iter()
        .filter(|r| matches_search(r, &search))
        .filter(|r| matches_genres(r, &state.genres))
        .filter(|r| matches_regions(r, &state.regions))
        .filter(|r| state.price_min <= r.price && r.price <= state.price_max)
        .filter(|r| tri_state(state.sponsored, r.sponsored))
        .filter(|r| tri_state(state.indexed, r.indexed))
        .filter(|r| tri_state(state.do_follow, r.do_follow))
        .collect();

    // Stage 7: stable sort, ties keep catalog order in either direction.
    records.sort_by(|a, b| compare(a, b, state));

    metrics::QUERIES_EVALUATED
        .with_label_values(&[match state.view_mode {
            ViewMode::All => "all",
            ViewMode::Curated => "curated",
        }])
        .inc();
    timer.observe_duration();

    QueryResult { records, total }
}

/// Case-insensitive substring match over name and genre tags.
fn matches_search(record: &PublicationRecord, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    record.name.to_lowercase().contains(search)
        || record
            .genres
            .iter()
            .any(|g| g.to_lowercase().contains(search))
}

/// OR-semantics: at least one genre in common with a non-empty selection.
fn matches_genres(record: &PublicationRecord, selected: &[String]) -> bool {
    selected.is_empty() || record.genres.iter().any(|g| selected.contains(g))
}

fn matches_regions(record: &PublicationRecord, selected: &[String]) -> bool {
    selected.is_empty() || selected.contains(&record.region)
}

fn tri_state(constraint: Option<bool>, value: bool) -> bool {
    match constraint {
        None => true,
        Some(required) => value == required,
    }
}

fn compare(a: &PublicationRecord, b: &PublicationRecord, state: &QueryState) -> Ordering {
    let direction = state.sort_direction;
    match state.sort_key {
        SortKey::Price => direction.apply(a.price.total_cmp(&b.price)),
        SortKey::DomainAuthority => {
            direction.apply(a.domain_authority.cmp(&b.domain_authority))
        }
        SortKey::Region => direction.apply(cmp_ci(&a.region, &b.region)),
        SortKey::Name => direction.apply(cmp_ci(&a.name, &b.name)),
        SortKey::TurnaroundTime => {
            let a_days = turnaround_days(&a.turnaround_time);
            let b_days = turnaround_days(&b.turnaround_time);
            // Missing/unparseable estimates sort last in both directions.
            match (
                a_days == UNPARSEABLE_TURNAROUND_DAYS,
                b_days == UNPARSEABLE_TURNAROUND_DAYS,
            ) {
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                _ => direction.apply(a_days.cmp(&b_days)),
            }
        }
    }
}

fn cmp_ci(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
