//! Gauge geometry for the probability meter and needle.
//!
//! Inputs are assumed pre-validated to 0-100; nothing is clamped, so an
//! out-of-range probability yields an out-of-range width or angle.

use serde::Serialize;

use super::Severity;

/// Fill width of the probability meter, in percent
pub fn meter_width(probability: f64) -> f64 {
    probability
}

/// Needle rotation in degrees: 0 -> -90, 50 -> 0, 100 -> +90
pub fn needle_angle(probability: f64) -> f64 {
    (probability / 100.0) * 180.0 - 90.0
}

/// Rendered gauge state
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Gauge {
    pub meter_width: f64,
    pub needle_angle: f64,
    pub color: &'static str,
}

impl Gauge {
    pub fn from_probability(probability: f64) -> Self {
        Self {
            meter_width: meter_width(probability),
            needle_angle: needle_angle(probability),
            color: Severity::from_probability(probability).color(),
        }
    }
}
