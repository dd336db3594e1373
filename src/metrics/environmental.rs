//! STAGE 1: ENVIRONMENTAL MULTIPLIER
//!
//! Heat drives casualty rates. Temperature and humidity combine into a
//! heat-index proxy: each contributes a one-sided linear ramp above its
//! reference point (85°F, 60%) and nothing below it. There is no upper
//! clamp, so the multiplier is always >= 1.0 and grows without bound.

use serde::{Deserialize, Serialize};
use crate::utils::SurgeCalibration;

/// Result of the environmental stage
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalResult {
    /// Contribution from temperature above the heat reference
    pub heat_component: f64,
    /// Contribution from humidity above the humidity reference
    pub humidity_component: f64,
    /// 1.0 + heat + humidity
    pub multiplier: f64,
}

/// Calculate the heat-index multiplier
///
/// Accepts any temperature/humidity, including physically implausible ones.
pub fn calculate_environmental_multiplier(
    temperature_f: i32,
    humidity_pct: i32,
    calibration: &SurgeCalibration,
) -> EnvironmentalResult {
    let heat_component = ramp_above(
        f64::from(temperature_f),
        calibration.heat_reference_f,
        calibration.heat_slope_per_degree,
    );
    let humidity_component = ramp_above(
        f64::from(humidity_pct),
        calibration.humidity_reference_pct,
        calibration.humidity_slope_per_pct,
    );

    EnvironmentalResult {
        heat_component,
        humidity_component,
        multiplier: 1.0 + heat_component + humidity_component,
    }
}

fn ramp_above(value: f64, reference: f64, slope: f64) -> f64 {
    ((value - reference) * slope).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_at_reference_points() {
        let cal = SurgeCalibration::default();
        let env = calculate_environmental_multiplier(85, 60, &cal);
        assert_relative_eq!(env.multiplier, 1.0);
        assert_relative_eq!(env.heat_component, 0.0);
        assert_relative_eq!(env.humidity_component, 0.0);
    }

    #[test]
    fn test_below_reference_contributes_nothing() {
        let cal = SurgeCalibration::default();
        let env = calculate_environmental_multiplier(60, 10, &cal);
        assert_relative_eq!(env.multiplier, 1.0);
    }

    #[test]
    fn test_hot_humid_day() {
        let cal = SurgeCalibration::default();
        // (98 - 85) × 0.05 = 0.65, (100 - 60) × 0.01 = 0.40
        let env = calculate_environmental_multiplier(98, 100, &cal);
        assert_relative_eq!(env.heat_component, 0.65, epsilon = 1e-9);
        assert_relative_eq!(env.humidity_component, 0.40, epsilon = 1e-9);
        assert_relative_eq!(env.multiplier, 2.05, epsilon = 1e-9);
    }

    #[test]
    fn test_no_upper_clamp() {
        let cal = SurgeCalibration::default();
        let env = calculate_environmental_multiplier(185, 60, &cal);
        assert_relative_eq!(env.multiplier, 6.0, epsilon = 1e-9);
    }

    #[test]
    fn test_monotone_in_temperature() {
        let cal = SurgeCalibration::default();
        let mut previous = 0.0;
        for t in 85..=120 {
            let m = calculate_environmental_multiplier(t, 60, &cal).multiplier;
            assert!(m >= previous, "multiplier dropped at {}°F", t);
            previous = m;
        }
    }
}
