//! Concurrent chart preview loading
//!
//! A dashboard page shows several charts at once; refreshing it issues all
//! per-chart aggregate calls concurrently and commits the results as one
//! batch. A refresh started while an older one is still in flight wins:
//! the older batch is discarded when it resolves, so a fast filter change
//! can never be overwritten by an outdated response.

use crate::adapter::AggregationBackend;
use crate::filters::{merge_filters, MergedFilters};
use crate::shaping::{choropleth_series, matrix_series, pie_series, xy_series};
use futures::future::join_all;
use observatory_shared::{AggregationRequest, ChartConfig, ChartSeries, ChartType};
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Render state of one chart in a batch.
#[derive(Debug, Clone, PartialEq)]
pub enum PreviewState {
    Loaded(ChartSeries),
    /// Empty result set or conflicting filters.
    NoData,
    /// The fetch failed; sibling charts are unaffected.
    Failed(String),
}

/// One chart's resolved preview.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPreview {
    pub chart_id: String,
    pub state: PreviewState,
}

/// All previews of one refresh, resolved together.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewBatch {
    pub epoch: u64,
    pub previews: Vec<ChartPreview>,
}

/// Fans out preview fetches and keeps only the newest batch.
pub struct PreviewLoader {
    backend: Arc<dyn AggregationBackend>,
    epoch: AtomicU64,
    latest: Mutex<Option<PreviewBatch>>,
}

impl PreviewLoader {
    pub fn new(backend: Arc<dyn AggregationBackend>) -> Self {
        Self {
            backend,
            epoch: AtomicU64::new(0),
            latest: Mutex::new(None),
        }
    }

    /// Refresh all previews for one indicator page.
    ///
    /// Returns the committed batch, or `None` when a newer refresh
    /// superseded this one while it was in flight.
    pub async fn refresh(
        &self,
        indicator_id: &str,
        charts: &[ChartConfig],
        global_filters: &BTreeMap<String, String>,
    ) -> Option<PreviewBatch> {
        let epoch = self.epoch.fetch_add(1, Ordering::SeqCst) + 1;

        let fetches = charts
            .iter()
            .map(|chart| self.load_chart(indicator_id, chart, global_filters));
        let previews = join_all(fetches).await;

        if self.epoch.load(Ordering::SeqCst) != epoch {
            log::debug!(
                "[PreviewLoader] discarding stale batch (epoch {epoch}) for indicator '{indicator_id}'"
            );
            return None;
        }

        let batch = PreviewBatch { epoch, previews };
        *self.latest.lock() = Some(batch.clone());
        Some(batch)
    }

    /// The most recently committed batch, if any.
    pub fn latest(&self) -> Option<PreviewBatch> {
        self.latest.lock().clone()
    }

    async fn load_chart(
        &self,
        indicator_id: &str,
        chart: &ChartConfig,
        global_filters: &BTreeMap<String, String>,
    ) -> ChartPreview {
        let filters = match merge_filters(&chart.chart_filters, global_filters) {
            MergedFilters::Filters(filters) => filters,
            MergedFilters::NoData => {
                return ChartPreview {
                    chart_id: chart.id.clone(),
                    state: PreviewState::NoData,
                };
            }
        };

        let request = AggregationRequest::new(
            indicator_id,
            chart.group_by.clone(),
            chart.metrics.clone(),
        )
        .with_filters(filters);

        let state = match self.backend.aggregate(&request).await {
            Ok(rows) if rows.is_empty() => PreviewState::NoData,
            Ok(rows) => PreviewState::Loaded(shape_for(chart.chart_type, &rows)),
            Err(err) => {
                log::warn!(
                    "[PreviewLoader] chart '{}' failed to load: {err}",
                    chart.id
                );
                PreviewState::Failed(err.to_string())
            }
        };

        ChartPreview {
            chart_id: chart.id.clone(),
            state,
        }
    }
}

/// Pick the series shape a chart type renders with.
pub fn shape_for(chart_type: ChartType, rows: &[observatory_shared::AggregateRow]) -> ChartSeries {
    match chart_type {
        ChartType::Line | ChartType::Area | ChartType::Bar | ChartType::BarHorizontal => {
            ChartSeries::Xy(xy_series(rows))
        }
        ChartType::Pie | ChartType::Donut | ChartType::Treemap => ChartSeries::Pie(pie_series(rows)),
        ChartType::Heatmap => ChartSeries::Matrix(matrix_series(rows)),
        ChartType::GeoMap => ChartSeries::Choropleth(choropleth_series(rows)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use observatory_shared::{
        AggregateRow, ChartOptions, ObservatoryError, Result,
    };
    use std::time::Duration;

    /// Backend with a tunable delay and a failure switch keyed by
    /// indicator id.
    struct StubBackend {
        delay_ms: AtomicU64,
        calls: AtomicU64,
    }

    impl StubBackend {
        fn new() -> Self {
            Self {
                delay_ms: AtomicU64::new(0),
                calls: AtomicU64::new(0),
            }
        }
    }

    #[async_trait]
    impl AggregationBackend for StubBackend {
        async fn aggregate(&self, request: &AggregationRequest) -> Result<Vec<AggregateRow>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let delay = self.delay_ms.load(Ordering::SeqCst);
            if delay > 0 {
                tokio::time::sleep(Duration::from_millis(delay)).await;
            }
            if request.indicator_id == "broken" {
                return Err(ObservatoryError::Aggregation {
                    message: "backend exploded".to_string(),
                });
            }
            if request.filters.get("sexo").map(String::as_str) == Some("Nenhum") {
                return Ok(Vec::new());
            }
            Ok(vec![AggregateRow::new(vec!["Feminino".to_string()], 3.0)])
        }
    }

    fn chart(id: &str, chart_type: ChartType) -> ChartConfig {
        ChartConfig {
            id: id.to_string(),
            title: id.to_string(),
            chart_type,
            series: ChartSeries::Empty,
            options: ChartOptions::default(),
            group_by: vec!["sexo".to_string()],
            metrics: vec!["total_vitimas".to_string()],
            chart_filters: BTreeMap::new(),
        }
    }

    #[tokio::test]
    async fn test_batch_resolves_all_charts_together() {
        let loader = PreviewLoader::new(Arc::new(StubBackend::new()));
        let charts = vec![chart("a", ChartType::Pie), chart("b", ChartType::Bar)];

        let batch = loader
            .refresh("cvli", &charts, &BTreeMap::new())
            .await
            .expect("no newer refresh exists");
        assert_eq!(batch.previews.len(), 2);
        assert!(matches!(batch.previews[0].state, PreviewState::Loaded(_)));
        assert_eq!(loader.latest(), Some(batch));
    }

    #[tokio::test]
    async fn test_stale_batch_is_discarded() {
        let backend = Arc::new(StubBackend::new());
        backend.delay_ms.store(100, Ordering::SeqCst);
        let loader = Arc::new(PreviewLoader::new(backend.clone()));
        let charts = vec![chart("a", ChartType::Pie)];

        let slow_loader = loader.clone();
        let slow_charts = charts.clone();
        let slow = tokio::spawn(async move {
            slow_loader
                .refresh("cvli", &slow_charts, &BTreeMap::new())
                .await
        });

        tokio::time::sleep(Duration::from_millis(20)).await;
        backend.delay_ms.store(0, Ordering::SeqCst);
        let fresh = loader.refresh("cvli", &charts, &BTreeMap::new()).await;

        assert!(fresh.is_some());
        assert!(slow.await.unwrap().is_none(), "stale batch must be discarded");
        assert_eq!(loader.latest(), fresh);
    }

    #[tokio::test]
    async fn test_failure_is_isolated_per_chart() {
        let loader = PreviewLoader::new(Arc::new(StubBackend::new()));
        let charts = vec![chart("a", ChartType::Pie)];

        let batch = loader
            .refresh("broken", &charts, &BTreeMap::new())
            .await
            .unwrap();
        assert!(matches!(batch.previews[0].state, PreviewState::Failed(_)));

        // An unrelated page keeps rendering normally.
        let ok = loader.refresh("cvli", &charts, &BTreeMap::new()).await.unwrap();
        assert!(matches!(ok.previews[0].state, PreviewState::Loaded(_)));
    }

    #[tokio::test]
    async fn test_conflicting_filters_skip_the_fetch() {
        let backend = Arc::new(StubBackend::new());
        let loader = PreviewLoader::new(backend.clone());

        let mut conflicted = chart("a", ChartType::Pie);
        conflicted
            .chart_filters
            .insert("sexo".to_string(), "Feminino".to_string());
        let mut global = BTreeMap::new();
        global.insert("sexo".to_string(), "Masculino".to_string());

        let batch = loader
            .refresh("cvli", &[conflicted], &global)
            .await
            .unwrap();
        assert_eq!(batch.previews[0].state, PreviewState::NoData);
        assert_eq!(backend.calls.load(Ordering::SeqCst), 0, "no fetch issued");
    }

    #[tokio::test]
    async fn test_empty_rows_mean_no_data() {
        let loader = PreviewLoader::new(Arc::new(StubBackend::new()));
        let mut empty = chart("a", ChartType::Pie);
        empty
            .chart_filters
            .insert("sexo".to_string(), "Nenhum".to_string());

        let batch = loader.refresh("cvli", &[empty], &BTreeMap::new()).await.unwrap();
        assert_eq!(batch.previews[0].state, PreviewState::NoData);
    }
}
