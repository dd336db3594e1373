use crate::explanation::types::{Advisory, AdvisoryLevel, MetricCard, StageFragment};
use crate::metrics::PatientLoad;
use crate::scenario::{ScenarioInput, VenueKind};
use crate::utils::SurgeCalibration;

/// Generate explanation fragment for patient generation
///
/// Unbounded venues get an advisory since the venue multiplier alone
/// doubles the load.
pub fn generate_patient_fragment(
    patients: &PatientLoad,
    input: &ScenarioInput,
    calibration: &SurgeCalibration,
) -> StageFragment {
    let per_unit = if input.attendance == 0 {
        0.0
    } else {
        f64::from(patients.total_patients) / f64::from(input.attendance) * calibration.attendance_unit
    };

    let card = MetricCard {
        code: "PPR".to_string(),
        name: "Patient Presentations".to_string(),
        value: f64::from(patients.total_patients),
        display: patients.total_patients.to_string(),
        interpretation: format!(
            "{:.1} per {:.0} attendees (base rate {:.1}, venue ×{:.1})",
            per_unit,
            calibration.attendance_unit,
            calibration.base_presentation_rate,
            patients.venue_multiplier
        ),
    };

    match input.venue {
        VenueKind::Bounded => StageFragment::card_only(card),
        VenueKind::Unbounded => StageFragment::with_advisory(
            card,
            Advisory {
                advisory_type: "unbounded_venue".to_string(),
                level: AdvisoryLevel::Medium,
                icon: "⚡".to_string(),
                message: format!(
                    "Open fan zone multiplies presentations ×{:.1} (substance use, mobility, limited crowd control)",
                    patients.venue_multiplier
                ),
                advice: "Add roaming medical teams and staff entry points with triage".to_string(),
            },
        ),
    }
}
