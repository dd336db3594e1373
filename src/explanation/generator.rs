use crate::explanation::banner::generate_banner;
use crate::explanation::charts::{build_gauge, build_waterfall};
use crate::explanation::fragments::{
    generate_allocation_fragment, generate_environmental_fragment, generate_patient_fragment,
    generate_severity_fragment,
};
use crate::explanation::types::*;
use crate::scenario::ScenarioInput;
use crate::scorer::SurgeBreakdown;
use crate::utils::SurgeCalibration;

pub const PAGE_TITLE: &str = "Regional Medical Surge Radar";
pub const DASHBOARD_TITLE: &str = "FIFA 2026: Medical Surge Radar";
pub const DASHBOARD_SUBTITLE: &str = "Operational Threat Level & Asset Distribution";

/// Main explanation generator
pub struct ExplanationGenerator;

impl ExplanationGenerator {
    /// Generate complete explanation from a scored scenario
    ///
    /// Takes:
    /// - input: The scenario as the operator set it
    /// - breakdown: Stage results from `SurgeScorer::evaluate_with_breakdown`
    /// - calibration: Constants used for thresholds, bands and advisory text
    ///
    /// Returns: Explanation with banner, both chart specs, metric cards and advisories
    pub fn generate(
        input: &ScenarioInput,
        breakdown: &SurgeBreakdown,
        calibration: &SurgeCalibration,
    ) -> Explanation {
        let estimate = breakdown.estimate();

        let fragments = vec![
            generate_environmental_fragment(&breakdown.environmental, input, calibration),
            generate_patient_fragment(&breakdown.patients, input, calibration),
            generate_allocation_fragment(&breakdown.allocation),
            generate_severity_fragment(&breakdown.severity, &breakdown.allocation, calibration),
        ];

        let mut metrics_display = Vec::with_capacity(fragments.len());
        let mut advisories = Vec::new();
        for fragment in fragments {
            metrics_display.push(fragment.card);
            if let Some(advisory) = fragment.advisory {
                advisories.push(advisory);
            }
        }
        // Most severe first
        advisories.sort_by(|a, b| b.level.cmp(&a.level));

        tracing::debug!(
            "Generated explanation: tier={}, {} advisories",
            breakdown.tier,
            advisories.len()
        );

        Explanation {
            page_title: PAGE_TITLE.to_string(),
            title: DASHBOARD_TITLE.to_string(),
            subtitle: DASHBOARD_SUBTITLE.to_string(),
            scenario: ScenarioSummary {
                input: *input,
                venue_display: input.venue.display_name().to_string(),
            },
            banner: generate_banner(breakdown.tier, estimate.nedocs_score_capped, calibration),
            gauge: build_gauge(estimate.nedocs_score_capped, calibration),
            waterfall: build_waterfall(&breakdown.allocation),
            metrics_display,
            advisories,
            estimate,
        }
    }
}
