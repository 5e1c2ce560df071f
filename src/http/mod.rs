//! HTTP seam between the dispatcher and the booking backend.

use async_trait::async_trait;
use lambda_runtime::tracing::{debug, error};
use reqwest::Client;
use serde_json::Value;

use crate::models::backend::{API_FAILURE_MESSAGE, BackendResult, OutboundRequest};

#[cfg(test)]
use mockall::automock;

/// Trait for backend calls to enable testing with mocks.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Performs the outbound call and returns the decoded JSON response.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent, the backend answers
    /// with a non-success status, or the body is not JSON.
    async fn execute(
        &self,
        request: &OutboundRequest,
    ) -> Result<Value, Box<dyn std::error::Error + Send + Sync>>;
}

/// Production HTTP client backed by `reqwest`.
pub struct ReqwestClient {
    client: Client,
}

impl ReqwestClient {
    #[must_use]
    pub const fn new(client: Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self::new(Client::new())
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn execute(
        &self,
        request: &OutboundRequest,
    ) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        let mut builder = self.client.request(request.method.clone(), &request.url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        let response = builder.send().await?.error_for_status()?;
        Ok(response.json().await?)
    }
}

/// The backend invoker: issues exactly one call and contains any failure.
///
/// Network errors, non-2xx statuses and undecodable bodies are all folded
/// into the same fixed failure message; callers never see an error. No
/// retries are attempted.
pub async fn invoke(client: &dyn HttpClient, request: OutboundRequest) -> BackendResult {
    debug!(method = %request.method, url = %request.url, "calling booking backend");
    match client.execute(&request).await {
        Ok(value) => BackendResult::Success(value),
        Err(err) => {
            error!(error = %err, method = %request.method, url = %request.url, "backend call failed");
            BackendResult::Failure(API_FAILURE_MESSAGE.to_string())
        }
    }
}
