//! HTTP client for the Stress Level Prediction API
//!
//! The prediction service runs as a separate local process; this module
//! only speaks its request/response contract: POST a JSON object to
//! `/predict`, get a JSON document back.

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{PredictionError, Result};

/// Default base URL of the local prediction service.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Client for the Stress Level Prediction API.
pub struct PredictionClient {
    client: Client,
    api_url: String,
}

impl PredictionClient {
    /// Create a client pointing at the default local endpoint.
    pub fn new() -> Result<Self> {
        Self::with_api_url(DEFAULT_API_URL)
    }

    /// Create a client pointing at a custom base URL.
    pub fn with_api_url(api_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self::with_client(client, api_url))
    }

    /// Build a client around a pre-configured `reqwest::Client`.
    ///
    /// Use this constructor when you need to inject custom middleware,
    /// instrumentation, or a mock server URL during tests.
    pub fn with_client(client: Client, api_url: impl Into<String>) -> Self {
        let api_url = api_url.into().trim_end_matches('/').to_string();
        Self { client, api_url }
    }

    /// Base URL this client sends requests to.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Request a stress-level prediction for `input`.
    ///
    /// `input` is serialized as the JSON request body; callers are expected
    /// to supply a JSON object such as `serde_json::Map<String, Value>`.
    /// The response body is decoded as JSON and returned as-is — its shape
    /// is owned by the prediction service, including any `{"error": ...}`
    /// documents it chooses to send under a 2xx status.
    ///
    /// A non-2xx status maps to [`PredictionError::RequestFailed`]; failures
    /// below the HTTP layer (connection refused, DNS, body decode) surface
    /// as the underlying [`reqwest::Error`].
    pub async fn predict_stress_level<T>(&self, input: &T) -> Result<Value>
    where
        T: Serialize + ?Sized,
    {
        let url = format!("{}/predict", self.api_url);
        debug!(url = %url, "Sending prediction request");

        let response = self.client.post(&url).json(input).send().await?;

        if !response.status().is_success() {
            debug!(status = %response.status(), "Prediction request rejected");
            return Err(PredictionError::RequestFailed);
        }

        let prediction = response.json().await?;
        debug!("Prediction received");
        Ok(prediction)
    }
}

/// One-shot prediction against the default local endpoint.
///
/// Equivalent to building a [`PredictionClient`] with
/// [`PredictionClient::new`] and calling
/// [`PredictionClient::predict_stress_level`] once.
pub async fn predict_stress_level<T>(input: &T) -> Result<Value>
where
    T: Serialize + ?Sized,
{
    PredictionClient::new()?.predict_stress_level(input).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_api_url() {
        let client = PredictionClient::new().unwrap();
        assert_eq!(client.api_url(), "http://127.0.0.1:8000");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = PredictionClient::with_api_url("http://localhost:9000/").unwrap();
        assert_eq!(client.api_url(), "http://localhost:9000");
    }

    #[test]
    fn test_with_client_keeps_url() {
        let http = Client::new();
        let client = PredictionClient::with_client(http, "http://10.0.0.1:8000");
        assert_eq!(client.api_url(), "http://10.0.0.1:8000");
    }
}
