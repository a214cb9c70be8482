//! Export artifact model
//!
//! The downloadable JSON snapshot of one assessment: the inputs that were
//! submitted and the prediction that came back, stamped with local time.

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::{AssessmentRequest, PredictionResult};

/// Characters that are unsafe in a download filename
const UNSAFE_FILENAME_CHARS: &[char] = &['/', '\\', '?', '%', '*', ':', '|', '"', '<', '>'];

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Failed to encode export: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Inputs and results of one assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub inputs: AssessmentRequest,
    pub results: PredictionResult,
}

/// Exported file contents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportArtifact {
    /// Localized, filename-safe timestamp
    pub timestamp: String,
    pub assessment: AssessmentRecord,
}

impl ExportArtifact {
    /// Build an artifact stamped with the current local time
    pub fn new(inputs: AssessmentRequest, results: PredictionResult) -> Self {
        Self::at(inputs, results, Local::now().naive_local())
    }

    /// Build an artifact stamped with the given local time
    pub fn at(inputs: AssessmentRequest, results: PredictionResult, when: NaiveDateTime) -> Self {
        Self {
            timestamp: sanitize_timestamp(&localized_timestamp(when)),
            assessment: AssessmentRecord { inputs, results },
        }
    }

    /// Download filename, e.g. `risk-assessment-10-18-2026, 2-05-09 PM.json`
    pub fn filename(&self) -> String {
        format!("risk-assessment-{}.json", self.timestamp)
    }

    /// Pretty-printed JSON with two-space indentation
    pub fn to_pretty_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(contents: &str) -> Result<Self, ExportError> {
        Ok(serde_json::from_str(contents)?)
    }
}

/// Format like a browser's `toLocaleString()`: `10/18/2026, 2:05:09 PM`
pub fn localized_timestamp(when: NaiveDateTime) -> String {
    when.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}

/// Replace path-unsafe characters with `-`
pub fn sanitize_timestamp(timestamp: &str) -> String {
    timestamp
        .chars()
        .map(|c| if UNSAFE_FILENAME_CHARS.contains(&c) { '-' } else { c })
        .collect()
}
