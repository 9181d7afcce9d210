//! Persisted chart configuration and its visual options

use crate::series::{MatrixSeries, PieSeries, XySeries};
use crate::ChartType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Rendering payload attached to a chart.
///
/// Populated lazily from aggregated data; the persisted value is not
/// meaningful and a freshly rehydrated chart starts `Empty`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(tag = "shape", content = "data", rename_all = "snake_case")]
pub enum ChartSeries {
    #[default]
    Empty,
    Xy(XySeries),
    Pie(PieSeries),
    Matrix(Vec<MatrixSeries>),
    Choropleth(BTreeMap<String, f64>),
}

/// Legend placement
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Bottom,
    Right,
}

/// Legend configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LegendOptions {
    pub show: bool,
    pub position: LegendPosition,
}

impl Default for LegendOptions {
    fn default() -> Self {
        Self {
            show: false,
            position: LegendPosition::Bottom,
        }
    }
}

/// How tooltip values are formatted
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ValueFormat {
    Integer,
    /// One decimal place; used for rate indicators.
    Decimal,
}

/// Tooltip configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TooltipOptions {
    pub value_format: ValueFormat,
    /// Unit suffix shown after the value (e.g. "por 100000 habitantes").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
}

impl Default for TooltipOptions {
    fn default() -> Self {
        Self {
            value_format: ValueFormat::Integer,
            suffix: None,
        }
    }
}

/// One color bucket of a heatmap scale.
///
/// `to == None` marks the open-ended top bucket.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HeatBucket {
    pub from: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<f64>,
    pub color: String,
    pub label: String,
}

/// Visual configuration generated alongside a chart.
///
/// Presentation only; data-shape correctness never depends on it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ChartOptions {
    /// X-axis categories, in render order.
    pub categories: Vec<String>,
    pub legend: LegendOptions,
    pub tooltip: TooltipOptions,
    /// Palette as hex color strings, applied per series/slice.
    pub colors: Vec<String>,
    /// Heatmap color scale; absent for every other chart type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heat_buckets: Option<Vec<HeatBucket>>,
    /// Bars grow sideways (bar-horizontal).
    #[serde(default)]
    pub horizontal: bool,
}

/// The saved, reusable definition of a chart within an indicator's
/// dashboard.
///
/// Created by the spec generator; owned by the dashboard store thereafter;
/// mutated only via explicit edit or delete.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartConfig {
    /// Unique, time-derived id (see [`crate::next_chart_id`]).
    pub id: String,
    pub title: String,
    pub chart_type: ChartType,
    #[serde(default)]
    pub series: ChartSeries,
    pub options: ChartOptions,
    /// Ordered dimensions the data is bucketed by (1-2 entries; time
    /// dimension first for line/area).
    pub group_by: Vec<String>,
    /// Measure(s) to aggregate; currently always a single attribute id.
    pub metrics: Vec<String>,
    /// Static per-chart filters: attribute id to comma-joined allowed values.
    pub chart_filters: BTreeMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_config_round_trip() {
        let mut filters = BTreeMap::new();
        filters.insert("sexo".to_string(), "Feminino,Masculino".to_string());

        let config = ChartConfig {
            id: "chart-1700000000000-0".to_string(),
            title: "Vítimas por sexo".to_string(),
            chart_type: ChartType::Pie,
            series: ChartSeries::Empty,
            options: ChartOptions::default(),
            group_by: vec!["sexo".to_string()],
            metrics: vec!["total_vitimas".to_string()],
            chart_filters: filters,
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: ChartConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_series_defaults_to_empty_when_missing() {
        let json = r#"{
            "id": "chart-1",
            "title": "t",
            "chart_type": "bar",
            "options": {
                "categories": [],
                "legend": {"show": false, "position": "bottom"},
                "tooltip": {"value_format": "integer"},
                "colors": []
            },
            "group_by": ["sexo"],
            "metrics": ["total_vitimas"],
            "chart_filters": {}
        }"#;
        let parsed: ChartConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.series, ChartSeries::Empty);
    }
}
