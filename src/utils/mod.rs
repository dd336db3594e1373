//! Utility modules for surge estimation
//!
//! Contains shared functionality used across the pipeline stages:
//! - Calibration: Model constants and their JSON loading
//! - Counts: Truncate-toward-zero conversion of fractional patient loads

pub mod calibration;
pub mod counts;

// Re-export commonly used types
pub use calibration::SurgeCalibration;
pub use counts::truncate_count;
