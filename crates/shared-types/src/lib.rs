//! Shared types for the observatory chart pipeline
//!
//! This crate contains all types that are shared between the catalog,
//! chart-builder, data-manager, and dashboard-store crates: chart and
//! indicator definitions, aggregation request/response shapes, and the
//! common error type.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

pub mod chart;
pub mod errors;
pub mod indicator;
pub mod request;
pub mod series;

pub use chart::{ChartConfig, ChartOptions, ChartSeries};
pub use errors::{ObservatoryError, Result};
pub use indicator::{AttributeDataType, IndicatorAttribute, IndicatorConfig, IndicatorKind};
pub use request::{AggregateRow, AggregationRequest, FILTER_ALL, YEAR_ATTRIBUTE};
pub use series::{ChoroplethSeries, MatrixPoint, MatrixSeries, PieSeries, XySeries, XySeriesEntry};

/// Chart types supported by the dashboard
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ChartType {
    Line,
    Area,
    Bar,
    BarHorizontal,
    Pie,
    Donut,
    #[serde(rename = "geomap")]
    GeoMap,
    Heatmap,
    Treemap,
}

impl ChartType {
    /// Line and area charts are always bucketed by year on the x axis.
    pub fn is_temporal(&self) -> bool {
        matches!(self, ChartType::Line | ChartType::Area)
    }

    /// Whether the type accepts a secondary (sub-series / row) dimension.
    pub fn supports_secondary(&self) -> bool {
        matches!(
            self,
            ChartType::Line
                | ChartType::Area
                | ChartType::Bar
                | ChartType::BarHorizontal
                | ChartType::Heatmap
        )
    }

    /// Heatmaps cannot render without a row dimension.
    pub fn requires_secondary(&self) -> bool {
        matches!(self, ChartType::Heatmap)
    }
}

impl std::fmt::Display for ChartType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartType::Line => write!(f, "line"),
            ChartType::Area => write!(f, "area"),
            ChartType::Bar => write!(f, "bar"),
            ChartType::BarHorizontal => write!(f, "bar-horizontal"),
            ChartType::Pie => write!(f, "pie"),
            ChartType::Donut => write!(f, "donut"),
            ChartType::GeoMap => write!(f, "geomap"),
            ChartType::Heatmap => write!(f, "heatmap"),
            ChartType::Treemap => write!(f, "treemap"),
        }
    }
}

static CHART_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Generate a unique, time-derived chart id.
///
/// The wall-clock millisecond alone can collide when two charts are created
/// within the same millisecond, so a process-wide counter is appended.
pub fn next_chart_id() -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let seq = CHART_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("chart-{millis}-{seq}")
}
