//! Prediction relay handler

use axum::{
    body::Bytes,
    extract::State,
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
};

use crate::{AppState, AppResult};

/// Relay an assessment request to the prediction backend
///
/// The upstream body is returned byte-for-byte on success.
pub async fn predict(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<Response> {
    let upstream = state.relay.forward(body).await?;

    Ok(([(CONTENT_TYPE, "application/json")], upstream).into_response())
}
