//! Pipeline stages for surge estimation
//!
//! Each stage is implemented in its own module as a pure function returning
//! a small result record. `SurgeScorer` chains them.

pub mod environmental;
pub mod patient_generation;
pub mod asset_allocation;
pub mod severity;

// Re-export stage functions
pub use environmental::{calculate_environmental_multiplier, EnvironmentalResult};
pub use patient_generation::{calculate_patients, venue_multiplier, PatientLoad};
pub use asset_allocation::{allocate_assets, AssetAllocation};
pub use severity::{calculate_severity, classify_tier, NedocsScore, SeverityTier};
