use crate::explanation::types::{Advisory, AdvisoryLevel, MetricCard, StageFragment};
use crate::metrics::EnvironmentalResult;
use crate::scenario::ScenarioInput;
use crate::utils::SurgeCalibration;

/// Generate explanation fragment for the heat-index multiplier
///
/// Raises a heat-load advisory whenever temperature or humidity sits above
/// its reference point.
pub fn generate_environmental_fragment(
    env: &EnvironmentalResult,
    input: &ScenarioInput,
    calibration: &SurgeCalibration,
) -> StageFragment {
    let interpretation = if env.multiplier >= 2.0 {
        "Extreme heat stress - presentations more than double"
    } else if env.multiplier >= 1.5 {
        "Severe heat stress - heavy heat-casualty load expected"
    } else if env.multiplier > 1.0 {
        "Elevated heat stress - heat adds measurably to presentations"
    } else {
        "No heat penalty - conditions at or below reference"
    };

    let card = MetricCard {
        code: "ENV".to_string(),
        name: "Heat-Index Multiplier".to_string(),
        value: env.multiplier,
        display: format!("×{:.2}", env.multiplier),
        interpretation: interpretation.to_string(),
    };

    if env.multiplier <= 1.0 {
        return StageFragment::card_only(card);
    }

    let mut drivers = Vec::new();
    if env.heat_component > 0.0 {
        drivers.push(format!(
            "{}°F is {:.0}°F above the {:.0}°F reference (+{:.0}%)",
            input.temperature_f,
            f64::from(input.temperature_f) - calibration.heat_reference_f,
            calibration.heat_reference_f,
            env.heat_component * 100.0
        ));
    }
    if env.humidity_component > 0.0 {
        drivers.push(format!(
            "{}% humidity is {:.0} points above the {:.0}% reference (+{:.0}%)",
            input.humidity_pct,
            f64::from(input.humidity_pct) - calibration.humidity_reference_pct,
            calibration.humidity_reference_pct,
            env.humidity_component * 100.0
        ));
    }

    let level = if env.multiplier >= 1.5 {
        AdvisoryLevel::High
    } else {
        AdvisoryLevel::Medium
    };

    let advisory = Advisory {
        advisory_type: "heat_load".to_string(),
        level,
        icon: "🌡️".to_string(),
        message: format!(
            "Heat raises patient presentations by {:.0}%: {}",
            (env.multiplier - 1.0) * 100.0,
            drivers.join("; ")
        ),
        advice: "Stage cooling stations and pre-position heat-illness kits at first aid posts".to_string(),
    };

    StageFragment::with_advisory(card, advisory)
}
