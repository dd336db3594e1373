//! Surge Scorer - Main coordinator for surge estimation
//!
//! Chains the four pipeline stages (environment → patients → allocation →
//! severity) for a single scenario, and fans independent scenarios out over
//! Rayon for batch evaluation and sweeps.
//!
//! Every evaluation is pure: the scorer holds only immutable calibration,
//! so identical inputs always produce identical estimates.

use crate::metrics::*;
use crate::scenario::{InputDomain, ScenarioInput, VenueKind};
use crate::sweep::SweepSummary;
use crate::utils::SurgeCalibration;
use anyhow::Result;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main surge scorer
#[derive(Debug, Clone)]
pub struct SurgeScorer {
    calibration: SurgeCalibration,
}

/// Surge estimate for one scenario
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurgeEstimate {
    pub total_patients: u32,
    pub on_site: u32,
    pub deflected: u32,
    pub ed_transports: u32,
    pub nedocs_score_raw: f64,
    pub nedocs_score_capped: u32,
    pub environmental_multiplier: f64,
    pub venue_multiplier: f64,
    pub tier: SeverityTier,
}

/// Stage-by-stage results behind an estimate (for explanations)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurgeBreakdown {
    pub environmental: EnvironmentalResult,
    pub patients: PatientLoad,
    pub allocation: AssetAllocation,
    pub severity: NedocsScore,
    pub tier: SeverityTier,
}

impl SurgeBreakdown {
    pub fn estimate(&self) -> SurgeEstimate {
        SurgeEstimate {
            total_patients: self.allocation.total_patients,
            on_site: self.allocation.on_site,
            deflected: self.allocation.deflected,
            ed_transports: self.allocation.ed_transports,
            nedocs_score_raw: self.severity.raw,
            nedocs_score_capped: self.severity.capped,
            environmental_multiplier: self.environmental.multiplier,
            venue_multiplier: self.patients.venue_multiplier,
            tier: self.tier,
        }
    }
}

impl Default for SurgeScorer {
    fn default() -> Self {
        Self::new(SurgeCalibration::default())
    }
}

impl SurgeScorer {
    /// Initialize surge scorer with the given calibration
    pub fn new(calibration: SurgeCalibration) -> Self {
        Self { calibration }
    }

    /// Initialize surge scorer from a calibration JSON file
    pub fn from_calibration_file(path: &Path) -> Result<Self> {
        tracing::info!("Loading calibration: {:?}", path);
        let calibration = SurgeCalibration::load(path)?;
        Ok(Self::new(calibration))
    }

    pub fn calibration(&self) -> &SurgeCalibration {
        &self.calibration
    }

    /// Evaluate one scenario
    pub fn evaluate(&self, input: &ScenarioInput) -> SurgeEstimate {
        self.evaluate_with_breakdown(input).estimate()
    }

    /// Evaluate one scenario, keeping each stage's result
    pub fn evaluate_with_breakdown(&self, input: &ScenarioInput) -> SurgeBreakdown {
        let cal = &self.calibration;

        let environmental =
            calculate_environmental_multiplier(input.temperature_f, input.humidity_pct, cal);
        let patients = calculate_patients(input.attendance, environmental.multiplier, input.venue, cal);
        let allocation = allocate_assets(patients.total_patients, cal);
        let severity = calculate_severity(allocation.ed_transports, cal);
        let tier = classify_tier(input.temperature_f, severity.capped, cal);

        tracing::debug!(
            attendance = input.attendance,
            temperature_f = input.temperature_f,
            humidity_pct = input.humidity_pct,
            venue = input.venue.as_str(),
            total = allocation.total_patients,
            ed_transports = allocation.ed_transports,
            nedocs = severity.capped,
            tier = tier.label(),
            "Evaluated scenario"
        );

        SurgeBreakdown {
            environmental,
            patients,
            allocation,
            severity,
            tier,
        }
    }

    /// Evaluate many scenarios in parallel (order preserved)
    pub fn evaluate_batch(&self, inputs: &[ScenarioInput]) -> Vec<SurgeEstimate> {
        inputs.par_iter().map(|input| self.evaluate(input)).collect()
    }

    /// Evaluate every grid point of the domain for one venue kind
    pub fn sweep(&self, domain: &InputDomain, venue: VenueKind) -> SweepSummary {
        let scenarios = domain.scenarios(venue);
        tracing::info!("Sweeping {} scenarios ({})", scenarios.len(), venue.as_str());

        let estimates = self.evaluate_batch(&scenarios);
        SweepSummary::from_results(domain, venue, &scenarios, &estimates, &self.calibration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_scenario() {
        let scorer = SurgeScorer::default();
        let e = scorer.evaluate(&ScenarioInput::new(65_000, 85, 60, VenueKind::Bounded));

        assert_relative_eq!(e.environmental_multiplier, 1.0);
        assert_relative_eq!(e.venue_multiplier, 1.0);
        assert_eq!(e.total_patients, 97);
        assert_eq!((e.on_site, e.deflected, e.ed_transports), (63, 14, 20));
        assert_relative_eq!(e.nedocs_score_raw, 95.0, epsilon = 1e-9);
        assert_eq!(e.nedocs_score_capped, 95);
        assert_eq!(e.tier, SeverityTier::Normal);
    }

    #[test]
    fn test_breakdown_matches_estimate() {
        let scorer = SurgeScorer::default();
        let input = ScenarioInput::new(120_000, 95, 80, VenueKind::Unbounded);
        let breakdown = scorer.evaluate_with_breakdown(&input);
        assert_eq!(breakdown.estimate(), scorer.evaluate(&input));
        assert_eq!(breakdown.allocation.total_patients, breakdown.patients.total_patients);
    }

    #[test]
    fn test_batch_preserves_order() {
        let scorer = SurgeScorer::default();
        let inputs = vec![
            ScenarioInput::new(10_000, 60, 10, VenueKind::Bounded),
            ScenarioInput::new(150_000, 98, 100, VenueKind::Unbounded),
            ScenarioInput::new(65_000, 85, 60, VenueKind::Bounded),
        ];
        let batch = scorer.evaluate_batch(&inputs);
        for (input, estimate) in inputs.iter().zip(&batch) {
            assert_eq!(*estimate, scorer.evaluate(input));
        }
    }

    #[test]
    fn test_custom_calibration_changes_result() {
        let cal = SurgeCalibration {
            baseline_ed_capacity: 40.0,
            ..Default::default()
        };
        let scorer = SurgeScorer::new(cal);
        // 80 + (20 / 40) × 60 = 110
        let e = scorer.evaluate(&ScenarioInput::default());
        assert_eq!(e.nedocs_score_capped, 110);
    }
}
