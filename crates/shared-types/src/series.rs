//! Chart-library series shapes
//!
//! Aggregated rows are adapted into one of four shapes before rendering:
//! XY (line/area/bar), pie (pie/donut/treemap), matrix (heatmap), and
//! choropleth (geomap).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One named series in an XY chart, aligned to the category axis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct XySeriesEntry {
    pub name: String,
    pub data: Vec<f64>,
}

/// Series shape for line, area, bar, and horizontal-bar charts.
///
/// Every entry's `data` has one value per category, in category order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct XySeries {
    pub series: Vec<XySeriesEntry>,
    pub categories: Vec<String>,
}

/// Series shape for pie, donut, and treemap charts.
///
/// `labels[i]` names the slice holding `series[i]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PieSeries {
    pub series: Vec<f64>,
    pub labels: Vec<String>,
}

/// One cell of a heatmap row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatrixPoint {
    pub x: String,
    pub y: f64,
}

/// One heatmap row: a row label plus its cells in column order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatrixSeries {
    pub name: String,
    pub data: Vec<MatrixPoint>,
}

/// Sparse place-name to value mapping for choropleth maps.
///
/// Places absent from the mapping render as "no data", not as zero.
pub type ChoroplethSeries = BTreeMap<String, f64>;
