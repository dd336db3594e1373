//! Scenario sweeps
//!
//! Evaluates the whole slider grid for one venue kind and condenses it into
//! planning figures: how often each tier occurs, the worst score, and per
//! temperature the smallest crowd that pushes the NEDOCS score over the
//! warning and critical thresholds.

use crate::metrics::SeverityTier;
use crate::scenario::{InputDomain, ScenarioInput, VenueKind};
use crate::scorer::SurgeEstimate;
use crate::utils::SurgeCalibration;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Number of grid scenarios landing in a tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierCount {
    pub tier: SeverityTier,
    pub count: usize,
}

/// Attendance breaking points at one temperature (default humidity)
///
/// Thresholds are judged on the score alone; `heat_override` marks
/// temperatures where the banner is already in override regardless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakingPoint {
    pub temperature_f: i32,
    pub humidity_pct: i32,
    pub heat_override: bool,
    pub first_warning_attendance: Option<u32>,
    pub first_critical_attendance: Option<u32>,
}

/// Condensed result of a grid sweep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepSummary {
    pub venue: VenueKind,
    pub evaluated: usize,
    pub tier_counts: Vec<TierCount>,
    pub peak_score: u32,
    pub peak_scenario: Option<ScenarioInput>,
    pub breaking_points: Vec<BreakingPoint>,
}

impl SweepSummary {
    /// Build a summary from paired scenarios and estimates
    pub fn from_results(
        domain: &InputDomain,
        venue: VenueKind,
        scenarios: &[ScenarioInput],
        estimates: &[SurgeEstimate],
        calibration: &SurgeCalibration,
    ) -> Self {
        let mut counts: FxHashMap<SeverityTier, usize> = FxHashMap::default();
        let mut peak: Option<(u32, ScenarioInput)> = None;
        let mut points: FxHashMap<i32, BreakingPoint> = FxHashMap::default();

        let reference_humidity = domain.humidity_pct.default as i32;
        let warning_threshold = calibration.warning_threshold();

        for (scenario, estimate) in scenarios.iter().zip(estimates) {
            *counts.entry(estimate.tier).or_insert(0) += 1;

            let score = estimate.nedocs_score_capped;
            if peak.map_or(true, |(best, _)| score > best) {
                peak = Some((score, *scenario));
            }

            if scenario.humidity_pct != reference_humidity {
                continue;
            }

            let point = points.entry(scenario.temperature_f).or_insert(BreakingPoint {
                temperature_f: scenario.temperature_f,
                humidity_pct: reference_humidity,
                heat_override: scenario.temperature_f >= calibration.heat_override_f,
                first_warning_attendance: None,
                first_critical_attendance: None,
            });

            if f64::from(score) >= warning_threshold {
                point.first_warning_attendance =
                    Some(min_attendance(point.first_warning_attendance, scenario.attendance));
            }
            if score >= calibration.critical_threshold {
                point.first_critical_attendance =
                    Some(min_attendance(point.first_critical_attendance, scenario.attendance));
            }
        }

        let tier_counts = SeverityTier::ALL
            .iter()
            .map(|&tier| TierCount {
                tier,
                count: counts.get(&tier).copied().unwrap_or(0),
            })
            .collect();

        let mut breaking_points: Vec<BreakingPoint> = points.into_values().collect();
        breaking_points.sort_by_key(|p| p.temperature_f);

        Self {
            venue,
            evaluated: estimates.len(),
            tier_counts,
            peak_score: peak.map_or(0, |(score, _)| score),
            peak_scenario: peak.map(|(_, scenario)| scenario),
            breaking_points,
        }
    }

    pub fn count(&self, tier: SeverityTier) -> usize {
        self.tier_counts
            .iter()
            .find(|c| c.tier == tier)
            .map_or(0, |c| c.count)
    }
}

fn min_attendance(current: Option<u32>, candidate: u32) -> u32 {
    current.map_or(candidate, |c| c.min(candidate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scorer::SurgeScorer;
    use crate::scenario::SliderRange;

    fn small_domain() -> InputDomain {
        InputDomain {
            attendance: SliderRange::new(10_000, 150_000, 5_000, 65_000),
            temperature_f: SliderRange::new(84, 99, 1, 85),
            humidity_pct: SliderRange::new(50, 70, 10, 60),
            default_venue: VenueKind::Bounded,
        }
    }

    #[test]
    fn test_counts_cover_grid() {
        let scorer = SurgeScorer::default();
        let domain = small_domain();
        let summary = scorer.sweep(&domain, VenueKind::Bounded);

        assert_eq!(summary.evaluated, domain.grid_size());
        let total: usize = summary.tier_counts.iter().map(|c| c.count).sum();
        assert_eq!(total, domain.grid_size());
        assert_eq!(summary.tier_counts.len(), 4);
    }

    #[test]
    fn test_breaking_points_per_temperature() {
        let scorer = SurgeScorer::default();
        let domain = small_domain();
        let summary = scorer.sweep(&domain, VenueKind::Unbounded);

        assert_eq!(summary.breaking_points.len(), domain.temperature_f.len());
        assert!(summary
            .breaking_points
            .windows(2)
            .all(|w| w[0].temperature_f < w[1].temperature_f));

        for point in &summary.breaking_points {
            assert_eq!(point.humidity_pct, 60);
            assert_eq!(point.heat_override, point.temperature_f >= 98);
            if let (Some(w), Some(c)) = (point.first_warning_attendance, point.first_critical_attendance) {
                assert!(w <= c);
            }
        }
    }

    #[test]
    fn test_breaking_point_matches_direct_evaluation() {
        let scorer = SurgeScorer::default();
        let summary = scorer.sweep(&small_domain(), VenueKind::Unbounded);
        let at_85 = summary
            .breaking_points
            .iter()
            .find(|p| p.temperature_f == 85)
            .unwrap();

        let first = at_85.first_critical_attendance.unwrap();
        let hit = scorer.evaluate(&ScenarioInput::new(first, 85, 60, VenueKind::Unbounded));
        assert!(hit.nedocs_score_capped >= 140);
        let before = scorer.evaluate(&ScenarioInput::new(first - 5_000, 85, 60, VenueKind::Unbounded));
        assert!(before.nedocs_score_capped < 140);
    }

    #[test]
    fn test_peak_is_largest_crowd_hottest_day() {
        let scorer = SurgeScorer::default();
        let summary = scorer.sweep(&small_domain(), VenueKind::Unbounded);
        let peak = summary.peak_scenario.unwrap();
        assert_eq!(peak.attendance, 150_000);
        assert_eq!(summary.peak_score, scorer.evaluate(&peak).nedocs_score_capped);
    }
}
