//! Risk report handler

use axum::{extract::State, extract::rejection::JsonRejection, Json};

use crate::{AppState, AppResult};
use crate::models::PredictionEnvelope;
use crate::presenter::RiskReport;

/// Render a prediction into a risk report
pub async fn render(
    State(state): State<AppState>,
    payload: Result<Json<PredictionEnvelope>, JsonRejection>,
) -> AppResult<Json<RiskReport>> {
    let Json(envelope) = payload?;

    let report = RiskReport::build_with_rules(&envelope.prediction, &state.rules)?;

    tracing::debug!(
        assessment_id = %report.assessment_id,
        severity = %report.severity,
        flagged = report.breakdown.flagged_count(),
        "Risk report rendered"
    );

    Ok(Json(report))
}
