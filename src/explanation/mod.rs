pub mod types;
pub mod fragments;
pub mod banner;
pub mod charts;
pub mod generator;
pub mod formatters;

pub use types::{
    Advisory, AdvisoryLevel, Banner, Explanation, GaugeBand, GaugeSpec, Measure, MetricCard,
    ScenarioSummary, StageFragment, WaterfallSpec, WaterfallStep,
};

pub use fragments::{
    generate_allocation_fragment, generate_environmental_fragment, generate_patient_fragment,
    generate_severity_fragment,
};

pub use banner::generate_banner;
pub use charts::{build_gauge, build_waterfall};
pub use generator::ExplanationGenerator;
pub use formatters::{HtmlFormatter, JsonFormatter, MarkdownFormatter};
