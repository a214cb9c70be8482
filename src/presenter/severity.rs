//! Severity Classification
//!
//! Low/Medium/High tiers derived from the probability alone. The backend's
//! `risk_level` label is never consulted here.

use serde::{Deserialize, Serialize};

/// At or above this probability = High
pub const HIGH_THRESHOLD: f64 = 70.0;

/// At or above this probability = Medium
pub const MEDIUM_THRESHOLD: f64 = 40.0;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum PresentError {
    #[error("Invalid probability: {0:?}")]
    InvalidProbability(String),
}

/// Severity tier of a probability
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// Classify a probability in percent (0-100)
    pub fn from_probability(probability: f64) -> Self {
        if probability >= HIGH_THRESHOLD {
            Severity::High
        } else if probability >= MEDIUM_THRESHOLD {
            Severity::Medium
        } else {
            Severity::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
        }
    }

    /// Gauge and meter color
    pub fn color(&self) -> &'static str {
        match self {
            Severity::Low => "green",
            Severity::Medium => "orange",
            Severity::High => "red",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse a `"<number>%"` probability into a percentage value
pub fn parse_probability(raw: &str) -> Result<f64, PresentError> {
    let trimmed = raw.trim();
    let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim_end();

    number
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite())
        .ok_or_else(|| PresentError::InvalidProbability(raw.to_string()))
}
