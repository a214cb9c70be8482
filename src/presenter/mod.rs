//! Risk Presenter
//!
//! Turns a prediction result into the views a risk report shows: a severity
//! tier, a per-category breakdown, gauge geometry and the report itself.
//! Every derivation here is a pure function of its input.
//!
//! ## Structure
//! - `severity`: probability parsing and Low/Medium/High thresholds
//! - `breakdown`: keyword tagging of free-text risk factors
//! - `gauge`: meter width and needle angle
//! - `report`: assembled `RiskReport`
//! - `message`: user-visible text for failed relays
//!
//! ## Usage
//! ```ignore
//! use roadrisk_relay::presenter::{RiskReport, Severity};
//!
//! let report = RiskReport::build(&prediction)?;
//! if report.severity == Severity::High {
//!     println!("{}", report.color);
//! }
//! ```

pub mod severity;
pub mod breakdown;
pub mod gauge;
pub mod report;
pub mod message;

pub use severity::{
    parse_probability,
    PresentError,
    Severity,
    HIGH_THRESHOLD,
    MEDIUM_THRESHOLD,
};

pub use breakdown::{
    derive_breakdown,
    BreakdownRules,
    FactorMatcher,
    KeywordMatcher,
    RiskBreakdown,
    RiskCategory,
};

pub use gauge::{meter_width, needle_angle, Gauge};
pub use report::RiskReport;
pub use message::{error_message, GENERIC_ERROR_MESSAGE};
