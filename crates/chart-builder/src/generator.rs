//! Chart spec generation
//!
//! Pure function from a completed draft plus its indicator to the
//! persisted [`ChartConfig`]: grouping dimensions, the metric column,
//! per-chart static filters, visual options, and a placeholder series
//! that stands in until aggregated data replaces it.

use crate::draft::{ChartDraft, DraftConfig};
use crate::options;
use observatory_catalog::DomainValues;
use observatory_data::mock::placeholder_value;
use observatory_data::preview::shape_for;
use observatory_shared::{
    next_chart_id, AggregateRow, ChartConfig, ChartSeries, ChartType, IndicatorConfig,
    ObservatoryError, Result, YEAR_ATTRIBUTE,
};
use std::collections::BTreeMap;

pub const DEFAULT_START_YEAR: i32 = 2019;
pub const DEFAULT_END_YEAR: i32 = 2025;

/// Convert a completed draft into a persisted chart configuration.
///
/// Calling this before a chart type is selected is a programming-contract
/// violation on the caller's side and is refused with an error.
pub fn generate(
    draft: &ChartDraft,
    indicator: &IndicatorConfig,
    domains: &DomainValues,
) -> Result<ChartConfig> {
    let chart_type = draft.chart_type.ok_or_else(|| ObservatoryError::InvalidDraft {
        message: "chart type not selected".to_string(),
    })?;

    let group_by = derive_group_by(chart_type, &draft.config)?;
    let metric = indicator
        .primary_metric()
        .ok_or_else(|| ObservatoryError::InvalidConfig {
            message: format!("indicator '{}' has no calculation attributes", indicator.id),
            field: Some("calculation_attributes".to_string()),
        })?;

    let chart_filters = derive_filters(chart_type, &draft.config, domains);
    let series = placeholder_series(chart_type, &draft.config, indicator, domains);
    let options = options::build(chart_type, &draft.config, indicator, domains);

    log::debug!(
        "[Generator] chart '{}' for indicator '{}' grouped by {:?}",
        draft.title,
        indicator.id,
        group_by
    );

    Ok(ChartConfig {
        id: next_chart_id(),
        title: draft.title.clone(),
        chart_type,
        series,
        options,
        group_by,
        metrics: vec![metric.to_string()],
        chart_filters,
    })
}

/// Ordered grouping dimensions for the chart type.
///
/// Line and area charts always lead with the time dimension; every other
/// type leads with the chosen primary attribute. The secondary attribute,
/// when chosen, is always the second dimension.
fn derive_group_by(chart_type: ChartType, config: &DraftConfig) -> Result<Vec<String>> {
    let mut group_by = match chart_type {
        ChartType::Line | ChartType::Area => vec![YEAR_ATTRIBUTE.to_string()],
        _ => {
            let primary = config.x_axis_attribute.clone().ok_or_else(|| {
                ObservatoryError::InvalidDraft {
                    message: "primary attribute not selected".to_string(),
                }
            })?;
            vec![primary]
        }
    };
    if let Some(secondary) = &config.secondary_attribute {
        group_by.push(secondary.clone());
    }
    Ok(group_by)
}

/// Inclusive requested year range intersected with the legal year domain.
///
/// Years outside the domain are silently dropped; an empty intersection
/// yields `None` so no year filter is emitted at all.
pub fn derive_year_filter(config: &DraftConfig, domains: &DomainValues) -> Option<String> {
    let start = config.start_year.unwrap_or(DEFAULT_START_YEAR);
    let end = config.end_year.unwrap_or(DEFAULT_END_YEAR);
    let legal: std::collections::HashSet<i32> = domains.years().into_iter().collect();

    let years: Vec<String> = (start..=end)
        .filter(|y| legal.contains(y))
        .map(|y| y.to_string())
        .collect();
    if years.is_empty() {
        None
    } else {
        Some(years.join(","))
    }
}

fn derive_filters(
    chart_type: ChartType,
    config: &DraftConfig,
    domains: &DomainValues,
) -> BTreeMap<String, String> {
    let mut filters = BTreeMap::new();

    if let (Some(attribute), Some(values)) = (&config.x_axis_attribute, &config.selected_values) {
        if !values.is_empty() {
            filters.insert(attribute.clone(), values.join(","));
        }
    }
    if let (Some(attribute), Some(values)) = (&config.secondary_attribute, &config.secondary_values)
    {
        if !values.is_empty() {
            filters.insert(attribute.clone(), values.join(","));
        }
    }
    if chart_type.is_temporal() {
        if let Some(years) = derive_year_filter(config, domains) {
            filters.insert(YEAR_ATTRIBUTE.to_string(), years);
        }
    }

    filters
}

/// Category values of the primary dimension: the picked values, or the
/// full legal domain when nothing is picked.
pub(crate) fn primary_categories(config: &DraftConfig, domains: &DomainValues) -> Vec<String> {
    match (&config.selected_values, &config.x_axis_attribute) {
        (Some(values), _) if !values.is_empty() => values.clone(),
        (_, Some(attribute)) => domains.values(attribute).to_vec(),
        _ => Vec::new(),
    }
}

pub(crate) fn secondary_categories(config: &DraftConfig, domains: &DomainValues) -> Vec<String> {
    match (&config.secondary_values, &config.secondary_attribute) {
        (Some(values), _) if !values.is_empty() => values.clone(),
        (_, Some(attribute)) => domains.values(attribute).to_vec(),
        _ => Vec::new(),
    }
}

/// X-axis categories for the chart type: derived years for temporal
/// charts, primary values otherwise.
pub(crate) fn axis_categories(
    chart_type: ChartType,
    config: &DraftConfig,
    domains: &DomainValues,
) -> Vec<String> {
    if chart_type.is_temporal() {
        derive_year_filter(config, domains)
            .map(|joined| joined.split(',').map(str::to_string).collect())
            .unwrap_or_default()
    } else {
        primary_categories(config, domains)
    }
}

/// Placeholder rendering payload, shaped exactly like the mock backend's
/// rows for the same configuration.
fn placeholder_series(
    chart_type: ChartType,
    config: &DraftConfig,
    indicator: &IndicatorConfig,
    domains: &DomainValues,
) -> ChartSeries {
    let primary = axis_categories(chart_type, config, domains);
    let secondary = config
        .secondary_attribute
        .as_ref()
        .map(|_| secondary_categories(config, domains))
        .unwrap_or_default();

    let mut rows = Vec::new();
    if secondary.is_empty() {
        for p in &primary {
            let value = placeholder_value(indicator.kind, &[&indicator.id, p]);
            rows.push(AggregateRow::new(vec![p.clone()], value));
        }
    } else {
        for p in &primary {
            for s in &secondary {
                let value = placeholder_value(indicator.kind, &[&indicator.id, p, s]);
                rows.push(AggregateRow::new(vec![p.clone(), s.clone()], value));
            }
        }
    }

    shape_for(chart_type, &rows)
}
