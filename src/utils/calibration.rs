//! Model Calibration
//!
//! The surge model is a heuristic proxy of mass-gathering-medicine
//! presentation rates. All of its constants live here so they are held as
//! fixed configuration. `Default` carries the planning values; a JSON file
//! may be loaded for what-if comparisons, with missing fields falling back
//! to the defaults.

use crate::error::SurgeError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Constants for every stage of the surge pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurgeCalibration {
    // Environmental multiplier
    pub heat_reference_f: f64,
    pub heat_slope_per_degree: f64,
    pub humidity_reference_pct: f64,
    pub humidity_slope_per_pct: f64,

    // Patient generation
    pub attendance_unit: f64,          // Patient presentation rate is per this many attendees
    pub base_presentation_rate: f64,   // Patients per `attendance_unit` at a bounded event
    pub bounded_venue_multiplier: f64,
    pub unbounded_venue_multiplier: f64,

    // Asset allocation
    pub on_site_fraction: f64,         // Treated/released at main first aid
    pub deflected_fraction: f64,       // Diverted to alternate care sites

    // NEDOCS severity
    pub baseline_ed_capacity: f64,     // Transports the regional ED grid absorbs at full load
    pub resting_nedocs: f64,
    pub surge_scale: f64,              // NEDOCS points added at 100% of baseline capacity
    pub nedocs_cap: u32,
    pub critical_threshold: u32,       // "Disaster" overcrowding
    pub warning_ratio: f64,            // Warning fires at this fraction of the critical threshold
    pub heat_override_f: i32,
}

impl Default for SurgeCalibration {
    fn default() -> Self {
        Self {
            heat_reference_f: 85.0,
            heat_slope_per_degree: 0.05,
            humidity_reference_pct: 60.0,
            humidity_slope_per_pct: 0.01,

            attendance_unit: 10_000.0,
            base_presentation_rate: 15.0,
            bounded_venue_multiplier: 1.0,
            unbounded_venue_multiplier: 2.0,

            on_site_fraction: 0.65,
            deflected_fraction: 0.15,

            baseline_ed_capacity: 80.0,
            resting_nedocs: 80.0,
            surge_scale: 60.0,
            nedocs_cap: 200,
            critical_threshold: 140,
            warning_ratio: 0.95,
            heat_override_f: 98,
        }
    }
}

impl SurgeCalibration {
    /// Load calibration from JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read calibration file: {:?}", path))?;

        let calibration: SurgeCalibration = serde_json::from_str(&contents)
            .with_context(|| "Failed to parse calibration JSON")?;

        calibration.validate()?;
        tracing::debug!("Loaded calibration from {:?}", path);
        Ok(calibration)
    }

    /// Reject values that would divide by zero or break the bucket partition
    pub fn validate(&self) -> Result<(), SurgeError> {
        if self.attendance_unit <= 0.0 {
            return Err(SurgeError::InvalidCalibration(
                "attendance_unit must be positive".to_string(),
            ));
        }
        if self.baseline_ed_capacity <= 0.0 {
            return Err(SurgeError::InvalidCalibration(
                "baseline_ed_capacity must be positive".to_string(),
            ));
        }
        let split = self.on_site_fraction + self.deflected_fraction;
        if self.on_site_fraction < 0.0 || self.deflected_fraction < 0.0 || split > 1.0 {
            return Err(SurgeError::InvalidCalibration(format!(
                "on-site ({}) and deflected ({}) fractions must be non-negative and sum to at most 1.0",
                self.on_site_fraction, self.deflected_fraction
            )));
        }
        if self.critical_threshold > self.nedocs_cap {
            return Err(SurgeError::InvalidCalibration(format!(
                "critical_threshold {} exceeds nedocs_cap {}",
                self.critical_threshold, self.nedocs_cap
            )));
        }
        Ok(())
    }

    /// Score at which the warning banner fires (140 × 0.95 = 133)
    pub fn warning_threshold(&self) -> f64 {
        f64::from(self.critical_threshold) * self.warning_ratio
    }

    /// Fraction of presentations that end up as ED transports
    pub fn transport_fraction(&self) -> f64 {
        1.0 - self.on_site_fraction - self.deflected_fraction
    }
}
