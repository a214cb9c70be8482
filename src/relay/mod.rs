//! Prediction Relay
//!
//! Forwards assessment requests to the upstream prediction service and
//! normalizes its failures. One POST per call: no retries, no caching.

pub mod error;

pub use error::RelayError;

use axum::body::Bytes;
use reqwest::header::{ACCEPT, CONTENT_TYPE, ORIGIN};
use serde_json::{json, Value};

use crate::config::RelayConfig;
use crate::models::AssessmentRequest;

/// HTTP relay to the prediction backend
#[derive(Debug, Clone)]
pub struct PredictionRelay {
    config: RelayConfig,
    http_client: reqwest::Client,
}

impl PredictionRelay {
    /// Create a relay with its own HTTP client
    pub fn new(config: RelayConfig) -> Result<Self, RelayError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            config,
            http_client: builder.build()?,
        })
    }

    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    /// Forward a raw request body and return the upstream body untouched
    pub async fn forward(&self, body: Bytes) -> Result<Bytes, RelayError> {
        let payload: Value = serde_json::from_slice(&body).map_err(|e| {
            tracing::error!("Relay rejected malformed body: {}", e);
            RelayError::Transport(e.to_string())
        })?;

        tracing::debug!(payload = %payload, "Relay received assessment");

        if self.config.validate_requests {
            AssessmentRequest::from_slice(&body).map_err(|e| {
                tracing::warn!("Assessment request failed validation: {}", e);
                RelayError::Validation(json!({ "body": e.to_string() }))
            })?;
        }

        let url = self.config.predict_url();
        tracing::debug!("Sending request to: {}", url);

        let response = self.http_client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .header(ORIGIN, &self.config.origin)
            .body(body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Relay transport error: {}", e);
                RelayError::from(e)
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await?;
            tracing::error!(status = status.as_u16(), "Backend API error: {}", error_text);

            return Err(RelayError::UpstreamRejected {
                status: status.as_u16(),
                details: upstream_details(&error_text),
            });
        }

        let result = response.bytes().await.map_err(|e| {
            tracing::error!("Failed to read backend response: {}", e);
            RelayError::from(e)
        })?;

        tracing::debug!(
            status = status.as_u16(),
            "Backend API response: {}",
            String::from_utf8_lossy(&result)
        );

        Ok(result)
    }
}

/// `details` member of an upstream JSON error body
fn upstream_details(error_text: &str) -> Option<Value> {
    serde_json::from_str::<Value>(error_text)
        .ok()?
        .get_mut("details")
        .map(Value::take)
        .filter(|d| !d.is_null())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::assert_ok;

    #[test]
    fn test_upstream_details_extracted() {
        let details = upstream_details(r#"{"error":"bad","details":{"speed_limit":"invalid"}}"#);
        assert_eq!(details, Some(json!({"speed_limit": "invalid"})));
    }

    #[test]
    fn test_upstream_details_absent() {
        assert_eq!(upstream_details(r#"{"error":"bad"}"#), None);
        assert_eq!(upstream_details(r#"{"details":null}"#), None);
        assert_eq!(upstream_details("<html>Bad Gateway</html>"), None);
    }

    #[tokio::test]
    async fn test_malformed_body_is_transport_error() {
        let relay = assert_ok!(PredictionRelay::new(RelayConfig::default()));
        let err = relay.forward(Bytes::from_static(b"{not json")).await.unwrap_err();
        assert!(matches!(err, RelayError::Transport(_)));
    }

    #[tokio::test]
    async fn test_invalid_domain_rejected_before_forward() {
        let relay = assert_ok!(PredictionRelay::new(RelayConfig {
            // Unroutable: validation must fail before any network call
            base_url: "http://127.0.0.1:1".to_string(),
            ..Default::default()
        }));

        let body = r#"{"road_type":9,"weather_conditions":"Fine","speed_limit":30,"time_of_day":"Morning","junction_detail":"Crossroads"}"#;
        let err = relay.forward(Bytes::from(body)).await.unwrap_err();
        assert!(matches!(err, RelayError::Validation(_)));
    }
}
