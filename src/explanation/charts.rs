//! Chart specifications
//!
//! Render-ready parameters for the NEDOCS gauge and the asset-distribution
//! waterfall. Formatters (and any external renderer) consume these as data;
//! nothing here draws.

use crate::explanation::types::{GaugeBand, GaugeSpec, Measure, WaterfallSpec, WaterfallStep};
use crate::metrics::AssetAllocation;
use crate::utils::SurgeCalibration;

/// Upper edge of the "elevated" (yellow) gauge band
const ELEVATED_BAND_UPPER: u32 = 100;

const INCREASING_COLOR: &str = "#3D9970";
const DECREASING_COLOR: &str = "#1f77b4";
const TOTALS_COLOR: &str = "#d62728";

/// Gauge for the capped NEDOCS score
///
/// Bands: [0, resting] green, [resting, 100] yellow, [100, critical] orange,
/// [critical, cap] red. Threshold marker sits on the critical score.
pub fn build_gauge(capped_score: u32, calibration: &SurgeCalibration) -> GaugeSpec {
    let resting = calibration.resting_nedocs as u32;
    let critical = calibration.critical_threshold;
    let cap = calibration.nedocs_cap;

    let band = |from: u32, to: u32, color: &str, label: &str| GaugeBand {
        from,
        to,
        color: color.to_string(),
        label: label.to_string(),
    };

    GaugeSpec {
        title: "NEDOCS Score".to_string(),
        value: capped_score.min(cap),
        axis_min: 0,
        axis_max: cap,
        bands: vec![
            band(0, resting, "green", "Normal"),
            band(resting, ELEVATED_BAND_UPPER, "yellow", "Elevated"),
            band(ELEVATED_BAND_UPPER, critical, "orange", "Overcrowded"),
            band(critical, cap, "red", "Disaster"),
        ],
        threshold: critical,
        bar_color: "black".to_string(),
        threshold_color: "black".to_string(),
    }
}

/// Waterfall of patient flow: total, minus on-site, minus deflected, ED transports
///
/// ED transports are a positive relative step, matching the dashboard this
/// replaces; consumers that want the running total can use
/// `WaterfallSpec::running_totals`.
pub fn build_waterfall(allocation: &AssetAllocation) -> WaterfallSpec {
    let total = i64::from(allocation.total_patients);
    let on_site = i64::from(allocation.on_site);
    let deflected = i64::from(allocation.deflected);
    let ed = i64::from(allocation.ed_transports);

    let step = |label: &str, measure: Measure, value: i64, text: String| {
        let color = match measure {
            Measure::Absolute => TOTALS_COLOR,
            Measure::Relative if value < 0 => DECREASING_COLOR,
            Measure::Relative => INCREASING_COLOR,
        };
        WaterfallStep {
            label: label.to_string(),
            measure,
            value,
            text,
            color: color.to_string(),
        }
    };

    WaterfallSpec {
        title: "Patient Flow & Deflection Strategy".to_string(),
        y_axis_title: "Patient Volume".to_string(),
        steps: vec![
            step("Total Generated", Measure::Absolute, total, total.to_string()),
            step("On-Site (STIP)", Measure::Relative, -on_site, format!("-{}", on_site)),
            step("ACS / Telehealth", Measure::Relative, -deflected, format!("-{}", deflected)),
            step("ED Transports", Measure::Relative, ed, ed.to_string()),
        ],
    }
}

impl WaterfallSpec {
    /// (bar start, bar end) for each step, following the measures
    pub fn running_totals(&self) -> Vec<(i64, i64)> {
        let mut running = 0i64;
        self.steps
            .iter()
            .map(|s| {
                let start = match s.measure {
                    Measure::Absolute => 0,
                    Measure::Relative => running,
                };
                running = start + s.value;
                (start, running)
            })
            .collect()
    }
}
