//! Severity banner
//!
//! One fixed message per tier; only the critical message embeds the score.
//! Tier precedence is decided upstream by `classify_tier`, so the banner
//! never shows conflicting messages.

use crate::explanation::types::Banner;
use crate::metrics::SeverityTier;
use crate::utils::SurgeCalibration;

/// Build the banner for a classified scenario
pub fn generate_banner(tier: SeverityTier, capped_score: u32, calibration: &SurgeCalibration) -> Banner {
    let (headline, message) = match tier {
        SeverityTier::Override => (
            Some("CRITICAL OVERRIDE: Heat-Casualty Threshold Exceeded.".to_string()),
            format!(
                "Sustained temperatures at or above {}°F indicate imminent physical capacity collapse across local Emergency Departments. Initiate regional deflection protocols immediately.",
                calibration.heat_override_f
            ),
        ),
        SeverityTier::Critical => (
            Some("SYSTEM FAILURE IMMINENT:".to_string()),
            format!(
                "NEDOCS Score {}. Acute care grid saturated. Implement Tier 4 Diversion immediately.",
                capped_score
            ),
        ),
        SeverityTier::Warning => (
            Some("CRITICAL WARNING:".to_string()),
            format!(
                "System is < {:.0}% away from operational breaking point. Prepare Alternate Care Site overflow.",
                (1.0 - calibration.warning_ratio) * 100.0
            ),
        ),
        SeverityTier::Normal => (
            None,
            "System Operating Within Conventional Capacity Constraints.".to_string(),
        ),
    };

    Banner {
        tier,
        icon: tier.icon().to_string(),
        headline,
        message,
    }
}
