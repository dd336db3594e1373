pub mod environmental_fragment;
pub mod patient_fragment;
pub mod allocation_fragment;
pub mod severity_fragment;

pub use environmental_fragment::generate_environmental_fragment;
pub use patient_fragment::generate_patient_fragment;
pub use allocation_fragment::generate_allocation_fragment;
pub use severity_fragment::generate_severity_fragment;
