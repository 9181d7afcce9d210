//! Dashboard store
//!
//! Process-wide mapping from indicator id to its ordered chart list.
//! Every mutation is written through to durable storage before the
//! in-memory state commits; construction rehydrates from storage, so no
//! read can observe an uninitialized store. A corrupt blob is logged and
//! treated as empty.

pub mod storage;

pub use storage::{FileStorage, MemoryStorage, StorageAdapter};

use observatory_shared::{ChartConfig, ChartType};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;

const STORAGE_KEY: &str = "observatory.dashboards";

type DashboardData = BTreeMap<String, Vec<ChartConfig>>;

pub struct DashboardStore {
    storage: Arc<dyn StorageAdapter>,
    dashboards: RwLock<DashboardData>,
}

impl DashboardStore {
    /// Create the store by rehydrating from durable storage.
    pub fn load(storage: Arc<dyn StorageAdapter>) -> Self {
        let dashboards = match storage.get(STORAGE_KEY) {
            Some(blob) => match serde_json::from_str::<DashboardData>(&blob) {
                Ok(data) => data,
                Err(err) => {
                    log::warn!(
                        "[DashboardStore] corrupt persisted dashboards, starting empty: {err}"
                    );
                    DashboardData::new()
                }
            },
            None => DashboardData::new(),
        };

        log::info!(
            "[DashboardStore] rehydrated {} indicator dashboard(s)",
            dashboards.len()
        );
        Self {
            storage,
            dashboards: RwLock::new(dashboards),
        }
    }

    /// Ordered chart list for an indicator; empty when none exist.
    pub fn charts(&self, indicator_id: &str) -> Vec<ChartConfig> {
        self.dashboards
            .read()
            .get(indicator_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Replace an indicator's entire chart list.
    ///
    /// The new state is persisted before the in-memory map is swapped;
    /// memory never runs ahead of durable storage.
    pub fn update_charts(&self, indicator_id: &str, charts: Vec<ChartConfig>) {
        let mut dashboards = self.dashboards.write();
        let mut next = dashboards.clone();
        next.insert(indicator_id.to_string(), charts);
        self.persist(&next);
        *dashboards = next;
    }

    /// Reordering is expressed as supplying the full list in its new
    /// order; alias of [`Self::update_charts`].
    pub fn update_chart_order(&self, indicator_id: &str, charts: Vec<ChartConfig>) {
        self.update_charts(indicator_id, charts);
    }

    /// Rename one chart. Returns false when the chart is unknown.
    pub fn rename_chart(&self, indicator_id: &str, chart_id: &str, title: &str) -> bool {
        self.edit_chart(indicator_id, chart_id, |chart| {
            chart.title = title.to_string();
        })
    }

    /// Change one chart's type. Returns false when the chart is unknown.
    pub fn retype_chart(&self, indicator_id: &str, chart_id: &str, chart_type: ChartType) -> bool {
        self.edit_chart(indicator_id, chart_id, |chart| {
            chart.chart_type = chart_type;
        })
    }

    /// Remove one chart from its indicator's list. Returns false when the
    /// chart is unknown.
    pub fn remove_chart(&self, indicator_id: &str, chart_id: &str) -> bool {
        let mut charts = self.charts(indicator_id);
        let before = charts.len();
        charts.retain(|c| c.id != chart_id);
        if charts.len() == before {
            return false;
        }
        self.update_charts(indicator_id, charts);
        true
    }

    fn edit_chart(
        &self,
        indicator_id: &str,
        chart_id: &str,
        edit: impl FnOnce(&mut ChartConfig),
    ) -> bool {
        let mut charts = self.charts(indicator_id);
        let Some(chart) = charts.iter_mut().find(|c| c.id == chart_id) else {
            return false;
        };
        edit(chart);
        self.update_charts(indicator_id, charts);
        true
    }

    fn persist(&self, dashboards: &DashboardData) {
        match serde_json::to_string(dashboards) {
            Ok(blob) => self.storage.set(STORAGE_KEY, &blob),
            Err(err) => log::error!("[DashboardStore] failed to serialize dashboards: {err}"),
        }
    }
}
