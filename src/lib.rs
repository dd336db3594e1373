//! Surge Radar
//!
//! Rough estimate of emergency-department patient surge at a mass-gathering
//! event from four operator knobs (attendance, temperature, humidity, venue).
//!
//! Module layout:
//! - `scenario`: Operator inputs and the slider control domain
//! - `utils/`: Calibration constants and count truncation
//! - `metrics/`: The four pipeline stages (environment, patients, allocation, severity)
//! - `scorer`: Coordinator chaining the stages; batch evaluation with Rayon
//! - `sweep`: Full-grid sweeps and attendance breaking points
//! - `explanation/`: Banner, chart specs, metric cards and formatters
//! - `api_server` / `web/` (feature `api`): Axum JSON API and HTML dashboard

pub mod error;
pub mod scenario;
pub mod utils;
pub mod metrics;
pub mod scorer;
pub mod sweep;
pub mod explanation;

#[cfg(feature = "api")]
pub mod api_server;

#[cfg(feature = "api")]
pub mod web;

// Re-export commonly used types
pub use error::SurgeError;
pub use scenario::{InputDomain, ScenarioInput, SliderRange, VenueKind};
pub use utils::SurgeCalibration;
pub use metrics::*;
pub use scorer::{SurgeBreakdown, SurgeEstimate, SurgeScorer};
pub use sweep::{BreakingPoint, SweepSummary, TierCount};
pub use explanation::{
    Explanation, ExplanationGenerator, HtmlFormatter, JsonFormatter, MarkdownFormatter,
};

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
