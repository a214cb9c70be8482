//! Road Risk Relay
//!
//! Relays road-condition assessments to a remote prediction service and
//! renders the returned probability into a structured risk report.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      ROAD RISK RELAY                         │
//! ├──────────────────────────────────────────────────────────────┤
//! │  ┌────────────┐   ┌────────────────┐   ┌─────────────────┐   │
//! │  │  API       │──▶│  Prediction    │──▶│  Upstream       │   │
//! │  │  (Axum)    │   │  Relay         │   │  /predict       │   │
//! │  └─────┬──────┘   └────────────────┘   └─────────────────┘   │
//! │        │                                                     │
//! │        ▼                                                     │
//! │  ┌────────────────┐   ┌────────────────┐                     │
//! │  │ Risk Presenter │   │ Export         │                     │
//! │  └────────────────┘   └────────────────┘                     │
//! └──────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod presenter;
pub mod relay;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{CorsLayer, Any},
    trace::TraceLayer,
};

pub use error::{AppError, AppResult};

use presenter::BreakdownRules;
use relay::{PredictionRelay, RelayError};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: config::Config,
    pub relay: PredictionRelay,
    pub rules: Arc<BreakdownRules>,
}

impl AppState {
    /// Build state with the default breakdown rules
    pub fn new(config: config::Config) -> Result<Self, RelayError> {
        let relay = PredictionRelay::new(config.relay())?;

        Ok(Self {
            config,
            relay,
            rules: Arc::new(BreakdownRules::default()),
        })
    }

    /// Replace the risk-factor tagging rules
    pub fn with_rules(mut self, rules: BreakdownRules) -> Self {
        self.rules = Arc::new(rules);
        self
    }
}

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::check))
        .route("/api/predict", post(handlers::predict::predict))
        .route("/api/report", post(handlers::report::render))
        .route("/api/export", post(handlers::export::download))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}
