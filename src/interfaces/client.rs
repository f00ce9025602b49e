use crate::domain::ports::Aggregator;
use crate::domain::types::{DistanceEvent, Invoice, ObuId};
use crate::error::{AggregatorError, Result};
use crate::interfaces::http::ErrorBody;
use async_trait::async_trait;
use reqwest::{Response, StatusCode};

/// HTTP client for a remote aggregator, implementing the same contract as
/// the service itself so producers and gateways can swap between in-process
/// and remote aggregation.
pub struct HttpClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }
}

async fn error_message(response: Response) -> String {
    let status = response.status();
    match response.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => status.to_string(),
    }
}

#[async_trait]
impl Aggregator for HttpClient {
    async fn record_distance(&self, event: DistanceEvent) -> Result<()> {
        let response = self
            .client
            .post(format!("{}/aggregate", self.base_url))
            .json(&event)
            .send()
            .await
            .map_err(|e| AggregatorError::Internal(e.to_string()))?;

        match response.status() {
            status if status.is_success() => Ok(()),
            StatusCode::BAD_REQUEST => Err(AggregatorError::Malformed(
                error_message(response).await,
            )),
            _ => Err(AggregatorError::Internal(error_message(response).await)),
        }
    }

    async fn compute_invoice(&self, obu_id: ObuId) -> Result<Invoice> {
        let response = self
            .client
            .get(format!("{}/invoice", self.base_url))
            .query(&[("obu", obu_id)])
            .send()
            .await
            .map_err(|e| AggregatorError::Internal(e.to_string()))?;

        match response.status() {
            status if status.is_success() => response
                .json::<Invoice>()
                .await
                .map_err(|e| AggregatorError::Internal(e.to_string())),
            StatusCode::NOT_FOUND => Err(AggregatorError::NotFound(obu_id)),
            StatusCode::BAD_REQUEST => Err(AggregatorError::Malformed(
                error_message(response).await,
            )),
            _ => Err(AggregatorError::Internal(error_message(response).await)),
        }
    }
}
