//! Aggregation request/response shapes
//!
//! These mirror the contract of the external aggregation API
//! (`POST /aggregate`); the mock backend produces the same shapes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Filter sentinel meaning "no restriction on this attribute".
pub const FILTER_ALL: &str = "all";

/// Attribute id of the time dimension; line and area charts always group
/// by it first.
pub const YEAR_ATTRIBUTE: &str = "ano";

/// Request for aggregated indicator data.
///
/// Ephemeral: constructed per render, never persisted. Filter values are
/// comma-joined allowed values, or [`FILTER_ALL`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AggregationRequest {
    pub indicator_id: String,
    pub filters: BTreeMap<String, String>,
    pub group_by: Vec<String>,
    pub metrics: Vec<String>,
}

impl AggregationRequest {
    pub fn new(indicator_id: &str, group_by: Vec<String>, metrics: Vec<String>) -> Self {
        Self {
            indicator_id: indicator_id.to_string(),
            filters: BTreeMap::new(),
            group_by,
            metrics,
        }
    }

    pub fn with_filters(mut self, filters: BTreeMap<String, String>) -> Self {
        self.filters = filters;
        self
    }
}

/// One aggregated row: a value bucketed by the requested dimensions.
///
/// `keys` holds one entry per `group_by` dimension, in the same order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AggregateRow {
    pub keys: Vec<String>,
    pub value: f64,
}

impl AggregateRow {
    pub fn new(keys: Vec<String>, value: f64) -> Self {
        Self { keys, value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization_round_trip() {
        let mut filters = BTreeMap::new();
        filters.insert("sexo".to_string(), "Feminino,Masculino".to_string());

        let request = AggregationRequest::new(
            "cvli",
            vec!["sexo".to_string()],
            vec!["total_vitimas".to_string()],
        )
        .with_filters(filters);

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("indicatorId"));
        assert!(json.contains("groupBy"));

        let parsed: AggregationRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, request);
    }
}
