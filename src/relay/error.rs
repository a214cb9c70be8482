//! Relay errors

use axum::http::StatusCode;
use serde_json::Value;

#[derive(Debug, Clone, thiserror::Error)]
pub enum RelayError {
    /// Upstream answered with a non-2xx status
    #[error("Server error: {status}")]
    UpstreamRejected {
        status: u16,
        /// `details` member of the upstream error body, passed through as-is
        details: Option<Value>,
    },

    /// Request body is well-formed JSON but outside the option domains
    #[error("Invalid assessment request")]
    Validation(Value),

    /// Network, body or parse failure before an upstream status was known
    #[error("{0}")]
    Transport(String),
}

impl RelayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RelayError::UpstreamRejected { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            RelayError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            RelayError::Transport(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Field-level issues to show the client, if any
    pub fn details(&self) -> Option<&Value> {
        match self {
            RelayError::UpstreamRejected { details, .. } => details.as_ref(),
            RelayError::Validation(details) => Some(details),
            RelayError::Transport(_) => None,
        }
    }
}

impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        RelayError::Transport(err.to_string())
    }
}
