//! Risk Report
//!
//! Everything the report view renders for one prediction. The id and the
//! generation time are metadata; all other fields are pure derivations.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::{parse_probability, BreakdownRules, Gauge, PresentError, RiskBreakdown, Severity};
use crate::models::{PredictionResult, RiskLevel};

/// Length of the short assessment id shown in the report header
const ASSESSMENT_ID_LEN: usize = 9;

#[derive(Debug, Clone, Serialize)]
pub struct RiskReport {
    pub assessment_id: String,
    pub generated_at: DateTime<Utc>,
    /// Probability in percent
    pub probability: f64,
    /// Probability as received, e.g. `"72.5%"`
    pub probability_label: String,
    pub risk_level: RiskLevel,
    pub risk_level_badge: &'static str,
    pub severity: Severity,
    pub color: &'static str,
    pub meter_width: f64,
    pub needle_angle: f64,
    pub breakdown: RiskBreakdown,
    pub risk_factors: Vec<String>,
    pub recommendations: Vec<String>,
}

impl RiskReport {
    /// Build a report with the default keyword rules
    pub fn build(prediction: &PredictionResult) -> Result<Self, PresentError> {
        Self::build_with_rules(prediction, &BreakdownRules::default())
    }

    pub fn build_with_rules(
        prediction: &PredictionResult,
        rules: &BreakdownRules,
    ) -> Result<Self, PresentError> {
        let probability = parse_probability(&prediction.probability)?;
        let severity = Severity::from_probability(probability);
        let gauge = Gauge::from_probability(probability);

        Ok(Self {
            assessment_id: new_assessment_id(),
            generated_at: Utc::now(),
            probability,
            probability_label: prediction.probability.clone(),
            risk_level: prediction.risk_level,
            risk_level_badge: prediction.risk_level.badge_color(),
            severity,
            color: gauge.color,
            meter_width: gauge.meter_width,
            needle_angle: gauge.needle_angle,
            breakdown: rules.derive(&prediction.risk_factors),
            risk_factors: prediction.risk_factors.clone(),
            recommendations: prediction.recommendations.clone(),
        })
    }

    /// True when the backend label and the derived severity disagree
    pub fn level_mismatch(&self) -> bool {
        let expected = match self.severity {
            Severity::Low => RiskLevel::Low,
            Severity::Medium => RiskLevel::Medium,
            Severity::High => RiskLevel::High,
        };
        expected != self.risk_level
    }
}

fn new_assessment_id() -> String {
    let mut id = Uuid::new_v4().simple().to_string();
    id.truncate(ASSESSMENT_ID_LEN);
    id.to_uppercase()
}
