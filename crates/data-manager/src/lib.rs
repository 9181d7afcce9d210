//! Data manager for the observatory chart pipeline
//!
//! Translates generic aggregation requests into chart-library-ready series
//! shapes. The aggregation itself goes through the [`AggregationBackend`]
//! trait: [`MockAggregator`] stands in until the real aggregation API is
//! wired up, [`HttpAggregator`] speaks that API's `POST /aggregate`
//! contract. [`PreviewLoader`] fans out per-chart fetches concurrently and
//! guards against stale batches landing on top of newer state.

pub mod adapter;
pub mod filters;
pub mod mock;
pub mod preview;
pub mod remote;
pub mod shaping;

pub use adapter::{AggregationBackend, MockAggregator};
pub use filters::{merge_filter_values, merge_filters, FilterMerge, MergedFilters};
pub use preview::{ChartPreview, PreviewBatch, PreviewLoader, PreviewState};
pub use remote::HttpAggregator;
pub use shaping::{choropleth_series, matrix_series, pie_series, xy_series};
