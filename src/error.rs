//! Boundary errors for scenario input and calibration.
//!
//! The arithmetic pipeline itself never fails; these errors only come from
//! the surfaces that accept operator input (CLI, HTTP, calibration files).

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SurgeError {
    #[error("{field} = {value} is outside the allowed range [{min}, {max}]")]
    OutOfDomain {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("{field} = {value} is not on the {step}-unit step grid")]
    OffStep {
        field: &'static str,
        value: i64,
        step: i64,
    },

    #[error("unknown venue type '{0}' (expected 'bounded' or 'unbounded')")]
    UnknownVenue(String),

    #[error("invalid calibration: {0}")]
    InvalidCalibration(String),
}
