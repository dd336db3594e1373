use crate::explanation::types::{Advisory, AdvisoryLevel, MetricCard, StageFragment};
use crate::metrics::{AssetAllocation, NedocsScore};
use crate::utils::SurgeCalibration;

/// Generate explanation fragment for the NEDOCS score
///
/// Flags transport volume beyond the regional baseline capacity.
pub fn generate_severity_fragment(
    score: &NedocsScore,
    allocation: &AssetAllocation,
    calibration: &SurgeCalibration,
) -> StageFragment {
    let load_pct = f64::from(allocation.ed_transports) / calibration.baseline_ed_capacity * 100.0;

    let interpretation = if score.capped >= calibration.critical_threshold {
        "Disaster-level overcrowding".to_string()
    } else if f64::from(score.capped) >= calibration.warning_threshold() {
        format!(
            "Within {:.0}% of the disaster threshold",
            (1.0 - calibration.warning_ratio) * 100.0
        )
    } else if score.capped > calibration.resting_nedocs as u32 {
        "Above resting baseline".to_string()
    } else {
        "At resting baseline".to_string()
    };

    let card = MetricCard {
        code: "NEDOCS".to_string(),
        name: "Regional NEDOCS Score".to_string(),
        value: score.raw,
        display: if score.raw > f64::from(calibration.nedocs_cap) {
            format!("{} (raw {:.1}, capped)", score.capped, score.raw)
        } else {
            format!("{} (raw {:.1})", score.capped, score.raw)
        },
        interpretation: format!("{} - ED grid at {:.0}% of baseline capacity", interpretation, load_pct),
    };

    if f64::from(allocation.ed_transports) <= calibration.baseline_ed_capacity {
        return StageFragment::card_only(card);
    }

    StageFragment::with_advisory(
        card,
        Advisory {
            advisory_type: "capacity_exceeded".to_string(),
            level: AdvisoryLevel::High,
            icon: "🚑".to_string(),
            message: format!(
                "{} ED transports exceed the regional baseline of {:.0}",
                allocation.ed_transports, calibration.baseline_ed_capacity
            ),
            advice: "Activate regional diversion and open Alternate Care Site overflow".to_string(),
        },
    )
}
