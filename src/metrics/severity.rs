//! STAGE 4: NEDOCS SEVERITY
//!
//! Approximates regional ED crowding from the incoming transport volume.
//! The grid rests at NEDOCS 80; every full "baseline capacity" worth of
//! transports (80 patients) adds 60 points. The score is truncated and
//! capped at 200.
//!
//! Tier classification is evaluated in strict priority order, first match
//! wins. The heat override fires regardless of score:
//!   1. Override  - temperature >= 98°F
//!   2. Critical  - score >= 140
//!   3. Warning   - score >= 140 × 0.95 (133)
//!   4. Normal

use serde::{Deserialize, Serialize};
use std::fmt;
use crate::utils::{truncate_count, SurgeCalibration};

/// NEDOCS-like crowding score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NedocsScore {
    /// Untruncated, uncapped score
    pub raw: f64,
    /// Truncated and capped score (0-200)
    pub capped: u32,
    /// Points added above the resting baseline
    pub surge_burden: f64,
}

/// Operational threat tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityTier {
    Normal,
    Warning,
    Critical,
    Override,
}

impl SeverityTier {
    pub const ALL: [SeverityTier; 4] = [
        SeverityTier::Normal,
        SeverityTier::Warning,
        SeverityTier::Critical,
        SeverityTier::Override,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SeverityTier::Normal => "Normal",
            SeverityTier::Warning => "Warning",
            SeverityTier::Critical => "Critical",
            SeverityTier::Override => "Override",
        }
    }

    /// Banner icon
    pub fn icon(self) -> &'static str {
        match self {
            SeverityTier::Normal => "✅",
            SeverityTier::Warning => "⚠️",
            SeverityTier::Critical | SeverityTier::Override => "🚨",
        }
    }

    /// Whether the banner should render as an alert rather than a status line
    pub fn is_alert(self) -> bool {
        !matches!(self, SeverityTier::Normal)
    }
}

impl fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Calculate the NEDOCS score from ED transport volume
pub fn calculate_severity(ed_transports: u32, calibration: &SurgeCalibration) -> NedocsScore {
    let surge_burden =
        (f64::from(ed_transports) / calibration.baseline_ed_capacity) * calibration.surge_scale;
    let raw = calibration.resting_nedocs + surge_burden;

    NedocsScore {
        raw,
        capped: truncate_count(raw).min(calibration.nedocs_cap),
        surge_burden,
    }
}

/// Classify the threat tier
pub fn classify_tier(
    temperature_f: i32,
    capped_score: u32,
    calibration: &SurgeCalibration,
) -> SeverityTier {
    if temperature_f >= calibration.heat_override_f {
        SeverityTier::Override
    } else if capped_score >= calibration.critical_threshold {
        SeverityTier::Critical
    } else if f64::from(capped_score) >= calibration.warning_threshold() {
        SeverityTier::Warning
    } else {
        SeverityTier::Normal
    }
}
