//! STAGE 2: PATIENT GENERATION
//!
//! Total presentations = attendance scaled to the presentation-rate unit
//! (15 patients per 10,000 attendees at a bounded event), multiplied by the
//! environmental and venue multipliers, then truncated toward zero.
//!
//! The product is evaluated left to right:
//! `(attendance / 10000) × 15.0 × env × venue`. Reordering the factors can
//! move a result across an integer boundary.

use serde::{Deserialize, Serialize};
use crate::scenario::VenueKind;
use crate::utils::{truncate_count, SurgeCalibration};

/// Result of the patient generation stage
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PatientLoad {
    /// Untruncated presentation load
    pub presentation_load: f64,
    /// Venue multiplier applied (2.0 unbounded, 1.0 bounded)
    pub venue_multiplier: f64,
    /// Whole patients presenting
    pub total_patients: u32,
}

/// Unbounded fan zones carry higher substance use, mobility and weaker crowd control
pub fn venue_multiplier(venue: VenueKind, calibration: &SurgeCalibration) -> f64 {
    match venue {
        VenueKind::Bounded => calibration.bounded_venue_multiplier,
        VenueKind::Unbounded => calibration.unbounded_venue_multiplier,
    }
}

/// Calculate total patient presentations
pub fn calculate_patients(
    attendance: u32,
    environmental_multiplier: f64,
    venue: VenueKind,
    calibration: &SurgeCalibration,
) -> PatientLoad {
    let venue_multiplier = venue_multiplier(venue, calibration);

    let presentation_load = (f64::from(attendance) / calibration.attendance_unit)
        * calibration.base_presentation_rate
        * environmental_multiplier
        * venue_multiplier;

    PatientLoad {
        presentation_load,
        venue_multiplier,
        total_patients: truncate_count(presentation_load),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_stadium() {
        let cal = SurgeCalibration::default();
        // 6.5 × 15.0 = 97.5 → 97
        let load = calculate_patients(65_000, 1.0, VenueKind::Bounded, &cal);
        assert_relative_eq!(load.presentation_load, 97.5, epsilon = 1e-9);
        assert_eq!(load.total_patients, 97);
        assert_relative_eq!(load.venue_multiplier, 1.0);
    }

    #[test]
    fn test_fan_zone_doubles_load() {
        let cal = SurgeCalibration::default();
        let load = calculate_patients(65_000, 1.0, VenueKind::Unbounded, &cal);
        assert_eq!(load.total_patients, 195);
        assert_relative_eq!(load.venue_multiplier, 2.0);
    }

    #[test]
    fn test_zero_attendance() {
        let cal = SurgeCalibration::default();
        let load = calculate_patients(0, 3.0, VenueKind::Unbounded, &cal);
        assert_eq!(load.total_patients, 0);
    }

    #[test]
    fn test_truncates_toward_zero() {
        let cal = SurgeCalibration::default();
        // 1.0 × 15.0 × 1.99 = 29.85 → 29
        let load = calculate_patients(10_000, 1.99, VenueKind::Bounded, &cal);
        assert_eq!(load.total_patients, 29);
    }
}
