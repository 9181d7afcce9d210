//! HTTP aggregation backend
//!
//! Client for the external aggregation API: `POST {base}/aggregate` with
//! the request as JSON, rows back as JSON. Drop-in replacement for the
//! mock backend once the API is reachable.

use crate::adapter::AggregationBackend;
use async_trait::async_trait;
use observatory_shared::{AggregateRow, AggregationRequest, ObservatoryError, Result};

pub struct HttpAggregator {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAggregator {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl AggregationBackend for HttpAggregator {
    async fn aggregate(&self, request: &AggregationRequest) -> Result<Vec<AggregateRow>> {
        let url = format!("{}/aggregate", self.base_url.trim_end_matches('/'));

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| ObservatoryError::Network {
                message: format!("POST {url} failed: {e}"),
            })?;

        if !response.status().is_success() {
            return Err(ObservatoryError::Network {
                message: format!("POST {url} returned HTTP {}", response.status()),
            });
        }

        response
            .json::<Vec<AggregateRow>>()
            .await
            .map_err(|e| ObservatoryError::Parse {
                message: format!("invalid aggregate response: {e}"),
            })
    }
}
