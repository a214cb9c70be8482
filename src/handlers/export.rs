//! Export handler

use axum::{
    extract::rejection::JsonRejection,
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::{IntoResponse, Response},
    Json,
};

use crate::AppResult;
use crate::models::{AssessmentRecord, ExportArtifact};

/// Build the downloadable JSON file for one assessment
pub async fn download(
    payload: Result<Json<AssessmentRecord>, JsonRejection>,
) -> AppResult<Response> {
    let Json(record) = payload?;

    let artifact = ExportArtifact::new(record.inputs, record.results);
    let contents = artifact.to_pretty_json()?;
    let disposition = format!("attachment; filename=\"{}\"", artifact.filename());

    tracing::info!("Exported assessment: {}", artifact.filename());

    Ok((
        [
            (CONTENT_TYPE, "application/json".to_string()),
            (CONTENT_DISPOSITION, disposition),
        ],
        contents,
    )
        .into_response())
}
