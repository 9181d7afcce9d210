//! Series shaping
//!
//! Pure functions from aggregated rows to the series shapes the chart
//! library consumes. Rows carry one key per grouped dimension, in groupBy
//! order: `[x]` or `[x, sub_series]` for XY charts, `[column, row]` for
//! heatmaps, `[place]` for choropleth maps.

use observatory_shared::{
    AggregateRow, ChoroplethSeries, MatrixPoint, MatrixSeries, PieSeries, XySeries, XySeriesEntry,
};

/// Series name used when rows carry no sub-series dimension.
const SINGLE_SERIES_NAME: &str = "Total";

fn ordered_unique(values: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    values.filter(|v| seen.insert(v.clone())).collect()
}

/// Shape rows for line, area, bar, and horizontal-bar charts.
///
/// Categories are the ordered unique first keys; every series is aligned
/// to them, with 0.0 filling combinations the rows do not cover.
pub fn xy_series(rows: &[AggregateRow]) -> XySeries {
    let categories = ordered_unique(rows.iter().filter_map(|r| r.keys.first().cloned()));
    let series_names = ordered_unique(rows.iter().filter_map(|r| r.keys.get(1).cloned()));

    let lookup = |category: &str, name: Option<&str>| -> f64 {
        rows.iter()
            .find(|r| {
                r.keys.first().map(String::as_str) == Some(category)
                    && r.keys.get(1).map(String::as_str) == name
            })
            .map(|r| r.value)
            .unwrap_or(0.0)
    };

    let series = if series_names.is_empty() {
        vec![XySeriesEntry {
            name: SINGLE_SERIES_NAME.to_string(),
            data: categories.iter().map(|c| lookup(c, None)).collect(),
        }]
    } else {
        series_names
            .iter()
            .map(|name| XySeriesEntry {
                name: name.clone(),
                data: categories
                    .iter()
                    .map(|c| lookup(c, Some(name)))
                    .collect(),
            })
            .collect()
    };

    XySeries { series, categories }
}

/// Shape rows for pie, donut, and treemap charts.
pub fn pie_series(rows: &[AggregateRow]) -> PieSeries {
    let mut series = Vec::with_capacity(rows.len());
    let mut labels = Vec::with_capacity(rows.len());
    for row in rows {
        let Some(label) = row.keys.first() else {
            continue;
        };
        labels.push(label.clone());
        series.push(row.value);
    }
    PieSeries { series, labels }
}

/// Shape rows for heatmap charts.
///
/// Rows are keyed `[column, row]`; the output is one entry per row label
/// with cells aligned across the full column set (0.0 where absent).
pub fn matrix_series(rows: &[AggregateRow]) -> Vec<MatrixSeries> {
    let columns = ordered_unique(rows.iter().filter_map(|r| r.keys.first().cloned()));
    let row_labels = ordered_unique(rows.iter().filter_map(|r| r.keys.get(1).cloned()));

    row_labels
        .into_iter()
        .map(|label| {
            let data = columns
                .iter()
                .map(|column| {
                    let value = rows
                        .iter()
                        .find(|r| {
                            r.keys.first() == Some(column) && r.keys.get(1) == Some(&label)
                        })
                        .map(|r| r.value)
                        .unwrap_or(0.0);
                    MatrixPoint {
                        x: column.clone(),
                        y: value,
                    }
                })
                .collect();
            MatrixSeries { name: label, data }
        })
        .collect()
}

/// Shape rows for choropleth maps.
///
/// The mapping is sparse: places without rows stay absent and render as
/// "no data", not zero.
pub fn choropleth_series(rows: &[AggregateRow]) -> ChoroplethSeries {
    rows.iter()
        .filter_map(|r| r.keys.first().map(|place| (place.clone(), r.value)))
        .collect()
}
