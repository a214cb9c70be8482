//! Error handling

use axum::{
    response::{IntoResponse, Response},
    http::StatusCode,
    Json,
};
use serde_json::json;

use crate::models::ExportError;
use crate::presenter::PresentError;
use crate::relay::RelayError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub enum AppError {
    // Relay errors (status mirrors upstream or 500)
    Relay(RelayError),

    // Validation errors
    InvalidPayload(String),
    Presentation(PresentError),

    // Generic errors
    Export(ExportError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Relay(err) => {
                let mut body = json!({ "error": err.to_string() });
                if let Some(details) = err.details() {
                    body["details"] = details.clone();
                }
                (err.status_code(), body)
            }
            AppError::InvalidPayload(msg) => {
                tracing::warn!("Invalid payload: {}", msg);
                (StatusCode::BAD_REQUEST, json!({ "error": msg }))
            }
            AppError::Presentation(err) => {
                tracing::warn!("Report rejected: {}", err);
                (StatusCode::BAD_REQUEST, json!({ "error": err.to_string() }))
            }
            AppError::Export(err) => {
                tracing::error!("Export error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": "Failed to build export" }))
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<RelayError> for AppError {
    fn from(err: RelayError) -> Self {
        AppError::Relay(err)
    }
}

impl From<PresentError> for AppError {
    fn from(err: PresentError) -> Self {
        AppError::Presentation(err)
    }
}

impl From<ExportError> for AppError {
    fn from(err: ExportError) -> Self {
        AppError::Export(err)
    }
}

impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        AppError::InvalidPayload(rejection.body_text())
    }
}
