//! Filter merging
//!
//! A chart carries its own stored filters; the page it renders on can add
//! global filters. When both constrain the same attribute the effective
//! restriction is their set intersection. A conflicting global filter must
//! suppress the chart (no-data state), never bypass its stored constraint.

use observatory_shared::FILTER_ALL;
use std::collections::BTreeMap;

/// Outcome of merging the two restrictions on a single attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterMerge {
    /// Neither side restricts the attribute.
    Unrestricted,
    /// Comma-joinable allowed values, in the chart filter's order and
    /// casing where available.
    Values(Vec<String>),
    /// Both sides restrict and the intersection is empty.
    Empty,
}

fn split(joined: &str) -> Vec<String> {
    joined
        .split(',')
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}

fn is_restricted(value: Option<&str>) -> bool {
    match value {
        None => false,
        Some(v) => !v.trim().is_empty() && !v.trim().eq_ignore_ascii_case(FILTER_ALL),
    }
}

/// Merge one attribute's chart-side and global-side restrictions.
///
/// Intersection is case-insensitive; the surviving values keep the casing
/// and order of the side that listed them first (chart side wins when both
/// restrict).
pub fn merge_filter_values(chart: Option<&str>, global: Option<&str>) -> FilterMerge {
    match (is_restricted(chart), is_restricted(global)) {
        (false, false) => FilterMerge::Unrestricted,
        (true, false) => FilterMerge::Values(split(chart.unwrap())),
        (false, true) => FilterMerge::Values(split(global.unwrap())),
        (true, true) => {
            let global_set: Vec<String> = split(global.unwrap())
                .iter()
                .map(|v| v.to_lowercase())
                .collect();
            let intersection: Vec<String> = split(chart.unwrap())
                .into_iter()
                .filter(|v| global_set.contains(&v.to_lowercase()))
                .collect();
            if intersection.is_empty() {
                FilterMerge::Empty
            } else {
                FilterMerge::Values(intersection)
            }
        }
    }
}

/// Effective filters for a whole chart render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergedFilters {
    /// Attribute id to comma-joined allowed values; unrestricted
    /// attributes are omitted.
    Filters(BTreeMap<String, String>),
    /// Some attribute's restrictions are disjoint: render the no-data
    /// state without fetching.
    NoData,
}

/// Merge a chart's stored filters with the page-level global filters.
pub fn merge_filters(
    chart_filters: &BTreeMap<String, String>,
    global_filters: &BTreeMap<String, String>,
) -> MergedFilters {
    let mut merged = BTreeMap::new();
    let attributes: std::collections::BTreeSet<&String> =
        chart_filters.keys().chain(global_filters.keys()).collect();

    for attribute in attributes {
        let outcome = merge_filter_values(
            chart_filters.get(attribute).map(String::as_str),
            global_filters.get(attribute).map(String::as_str),
        );
        match outcome {
            FilterMerge::Unrestricted => {}
            FilterMerge::Values(values) => {
                merged.insert(attribute.clone(), values.join(","));
            }
            FilterMerge::Empty => return MergedFilters::NoData,
        }
    }

    MergedFilters::Filters(merged)
}
