// SPDX-License-Identifier: Apache-2.0

use crate::state::{FilterDimension, QueryState, SortDirection};
use bestiary_model::CreatureRecord;

/// One visible page of results plus the totals the presentation layer
/// needs for pager controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResult<'a> {
    pub items: Vec<&'a CreatureRecord>,
    pub page: usize,
    pub per_page: usize,
    pub total_matches: usize,
    pub total_pages: usize,
}

fn matches(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Case-insensitive substring filter over the selected dimension. A query
/// that is empty after trimming yields the unfiltered set.
#[must_use]
pub fn filter_records<'a>(
    records: &'a [CreatureRecord],
    dimension: FilterDimension,
    query: &str,
) -> Vec<&'a CreatureRecord> {
    if query.trim().is_empty() {
        return records.iter().collect();
    }
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| match dimension {
            FilterDimension::Name => matches(&record.name, &needle),
            FilterDimension::Type => {
                matches(&record.primary_type, &needle) || matches(&record.secondary_type, &needle)
            }
            FilterDimension::Clan => {
                matches(&record.primary_clan, &needle) || matches(&record.secondary_clan, &needle)
            }
        })
        .collect()
}

/// Stable sort by aggregate capture count. Equal-sum records keep their
/// relative order in both directions; `Unsorted` is the identity.
pub fn sort_records(rows: &mut [&CreatureRecord], direction: SortDirection) {
    match direction {
        SortDirection::Unsorted => {}
        SortDirection::Ascending => {
            rows.sort_by_key(|record| record.aggregate_capture_count());
        }
        SortDirection::Descending => {
            rows.sort_by(|a, b| {
                b.aggregate_capture_count().cmp(&a.aggregate_capture_count())
            });
        }
    }
}

/// Slice the 1-based `page` out of `rows`. Out-of-range pages yield an
/// empty slice; `per_page == 0` puts everything on one page.
#[must_use]
pub fn paginate<'a, 'r>(rows: &'r [&'a CreatureRecord], page: usize, per_page: usize) -> &'r [&'a CreatureRecord] {
    if per_page == 0 {
        return if page <= 1 { rows } else { &[] };
    }
    let start = page.saturating_sub(1).saturating_mul(per_page);
    if start >= rows.len() {
        return &[];
    }
    let end = (start + per_page).min(rows.len());
    &rows[start..end]
}

fn total_pages(total_matches: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return usize::from(total_matches > 0);
    }
    total_matches.div_ceil(per_page)
}

/// The composed pipeline: filter, sort, slice. Pure in (records, state);
/// concatenating every page in order reconstructs the sorted/filtered
/// sequence exactly once.
#[must_use]
pub fn run_query<'a>(records: &'a [CreatureRecord], state: &QueryState) -> PageResult<'a> {
    let mut rows = filter_records(records, state.dimension, &state.query);
    sort_records(&mut rows, state.sort);
    let total_matches = rows.len();
    let items = paginate(&rows, state.page, state.per_page).to_vec();
    PageResult {
        items,
        page: state.page,
        per_page: state.per_page,
        total_matches,
        total_pages: total_pages(total_matches, state.per_page),
    }
}
