//! Aggregation backend trait and the mock implementation

use crate::mock::placeholder_value;
use async_trait::async_trait;
use observatory_catalog::{DomainValues, IndicatorCatalog};
use observatory_shared::{AggregateRow, AggregationRequest, Result, FILTER_ALL};
use std::sync::Arc;

/// Source of aggregated indicator data.
///
/// Implementations must be deterministic for a given request: the same
/// request yields the same rows.
#[async_trait]
pub trait AggregationBackend: Send + Sync {
    async fn aggregate(&self, request: &AggregationRequest) -> Result<Vec<AggregateRow>>;
}

/// Catalog-driven mock backend.
///
/// Enumerates the grouped dimensions from the request's filters (falling
/// back to the full attribute domain) and fills in deterministic
/// placeholder values.
pub struct MockAggregator {
    catalog: Arc<IndicatorCatalog>,
    domains: Arc<DomainValues>,
}

impl MockAggregator {
    pub fn new(catalog: Arc<IndicatorCatalog>, domains: Arc<DomainValues>) -> Self {
        Self { catalog, domains }
    }

    /// Values a grouped dimension takes: the filter restriction when one is
    /// present, the full legal domain otherwise.
    fn dimension_values(&self, request: &AggregationRequest, attribute: &str) -> Vec<String> {
        match request.filters.get(attribute) {
            Some(joined) if !joined.eq_ignore_ascii_case(FILTER_ALL) => joined
                .split(',')
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .collect(),
            _ => self.domains.values(attribute).to_vec(),
        }
    }
}

#[async_trait]
impl AggregationBackend for MockAggregator {
    async fn aggregate(&self, request: &AggregationRequest) -> Result<Vec<AggregateRow>> {
        let Some(indicator) = self.catalog.get(&request.indicator_id) else {
            log::warn!(
                "[MockAggregator] unknown indicator '{}', returning no rows",
                request.indicator_id
            );
            return Ok(Vec::new());
        };

        let mut rows = Vec::new();
        match request.group_by.as_slice() {
            [primary] => {
                for value in self.dimension_values(request, primary) {
                    let metric = placeholder_value(indicator.kind, &[&indicator.id, &value]);
                    rows.push(AggregateRow::new(vec![value], metric));
                }
            }
            [primary, secondary] => {
                let primary_values = self.dimension_values(request, primary);
                let secondary_values = self.dimension_values(request, secondary);
                for p in &primary_values {
                    for s in &secondary_values {
                        let metric = placeholder_value(indicator.kind, &[&indicator.id, p, s]);
                        rows.push(AggregateRow::new(vec![p.clone(), s.clone()], metric));
                    }
                }
            }
            other => {
                log::warn!(
                    "[MockAggregator] unsupported groupBy arity {} for indicator '{}'",
                    other.len(),
                    request.indicator_id
                );
            }
        }

        log::debug!(
            "[MockAggregator] {} rows for indicator '{}' grouped by {:?}",
            rows.len(),
            request.indicator_id,
            request.group_by
        );
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn backend() -> MockAggregator {
        MockAggregator::new(
            Arc::new(IndicatorCatalog::new()),
            Arc::new(DomainValues::builtin()),
        )
    }

    #[tokio::test]
    async fn test_single_dimension_uses_filter_values() {
        let mut filters = BTreeMap::new();
        filters.insert("sexo".to_string(), "Feminino,Masculino".to_string());
        let request = AggregationRequest::new(
            "cvli",
            vec!["sexo".to_string()],
            vec!["total_vitimas".to_string()],
        )
        .with_filters(filters);

        let rows = backend().aggregate(&request).await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].keys, vec!["Feminino"]);
        assert_eq!(rows[1].keys, vec!["Masculino"]);
    }

    #[tokio::test]
    async fn test_unfiltered_dimension_falls_back_to_domain() {
        let request = AggregationRequest::new(
            "cvli",
            vec!["sexo".to_string()],
            vec!["total_vitimas".to_string()],
        );
        let rows = backend().aggregate(&request).await.unwrap();
        assert_eq!(rows.len(), 3);
    }

    #[tokio::test]
    async fn test_all_sentinel_is_no_restriction() {
        let mut filters = BTreeMap::new();
        filters.insert("sexo".to_string(), "all".to_string());
        let request = AggregationRequest::new(
            "cvli",
            vec!["sexo".to_string()],
            vec!["total_vitimas".to_string()],
        )
        .with_filters(filters);

        let rows = backend().aggregate(&request).await.unwrap();
        assert_eq!(rows.len(), 3);
    }

    #[tokio::test]
    async fn test_two_dimensions_cross_product() {
        let mut filters = BTreeMap::new();
        filters.insert("tipo_arma".to_string(), "Arma de fogo,Arma branca".to_string());
        filters.insert("municipio".to_string(), "Fortaleza,Sobral,Crato".to_string());
        let request = AggregationRequest::new(
            "3",
            vec!["tipo_arma".to_string(), "municipio".to_string()],
            vec!["total_armas".to_string()],
        )
        .with_filters(filters);

        let rows = backend().aggregate(&request).await.unwrap();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0].keys.len(), 2);
    }

    #[tokio::test]
    async fn test_unknown_indicator_yields_no_rows() {
        let request = AggregationRequest::new(
            "missing",
            vec!["sexo".to_string()],
            vec!["total".to_string()],
        );
        let rows = backend().aggregate(&request).await.unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_deterministic_between_calls() {
        let request = AggregationRequest::new(
            "cvli",
            vec!["sexo".to_string()],
            vec!["total_vitimas".to_string()],
        );
        let backend = backend();
        let first = backend.aggregate(&request).await.unwrap();
        let second = backend.aggregate(&request).await.unwrap();
        assert_eq!(first, second);
    }
}
