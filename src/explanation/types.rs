use serde::{Deserialize, Serialize};
use crate::metrics::SeverityTier;
use crate::scenario::ScenarioInput;
use crate::scorer::SurgeEstimate;

/// Complete explanation for a scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Explanation {
    /// Browser/window title
    pub page_title: String,
    /// Page heading
    pub title: String,
    pub subtitle: String,
    pub scenario: ScenarioSummary,
    pub banner: Banner,
    pub gauge: GaugeSpec,
    pub waterfall: WaterfallSpec,
    pub metrics_display: Vec<MetricCard>,
    pub advisories: Vec<Advisory>,
    pub estimate: SurgeEstimate,
}

/// Echo of the inputs with display labels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioSummary {
    pub input: ScenarioInput,
    pub venue_display: String, // "Stadium (Bounded)"
}

/// Severity banner shown above the charts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Banner {
    pub tier: SeverityTier,
    pub icon: String,              // "✅" / "⚠️" / "🚨"
    pub headline: Option<String>,  // Bold lead, absent for the normal status line
    pub message: String,
}

impl Banner {
    /// Plain-text banner: "headline message"
    pub fn text(&self) -> String {
        match &self.headline {
            Some(headline) => format!("{} {}", headline, self.message),
            None => self.message.clone(),
        }
    }
}

/// Gauge chart parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GaugeSpec {
    pub title: String,
    pub value: u32,
    pub axis_min: u32,
    pub axis_max: u32,
    pub bands: Vec<GaugeBand>,
    pub threshold: u32,
    pub bar_color: String,
    pub threshold_color: String,
}

/// Colored range on the gauge dial
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GaugeBand {
    pub from: u32,
    pub to: u32,
    pub color: String,
    pub label: String,
}

/// Waterfall chart parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaterfallSpec {
    pub title: String,
    pub y_axis_title: String,
    pub steps: Vec<WaterfallStep>,
}

/// How a waterfall bar is positioned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Measure {
    /// Bar starts at zero; resets the running total
    Absolute,
    /// Bar starts at the running total and adds its (signed) value
    Relative,
}

/// One waterfall bar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaterfallStep {
    pub label: String,   // "On-Site (STIP)"
    pub measure: Measure,
    pub value: i64,      // Signed delta for relative bars
    pub text: String,    // "-63"
    pub color: String,
}

/// Individual metric card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricCard {
    pub code: String,            // "ENV"
    pub name: String,            // "Heat-Index Multiplier"
    pub value: f64,
    pub display: String,         // "×1.65"
    pub interpretation: String,
}

/// Advisory level for explanation notes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AdvisoryLevel {
    Info,
    Low,
    Medium,
    High,
}

/// Planning note raised by one pipeline stage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Advisory {
    pub advisory_type: String,  // "heat_load", "unbounded_venue", "capacity_exceeded"
    pub level: AdvisoryLevel,
    pub icon: String,
    pub message: String,
    pub advice: String,
}

/// Fragment of explanation from a single pipeline stage
#[derive(Debug, Clone)]
pub struct StageFragment {
    pub card: MetricCard,
    pub advisory: Option<Advisory>,
}

impl StageFragment {
    /// Create a fragment with only a metric card
    pub fn card_only(card: MetricCard) -> Self {
        Self {
            card,
            advisory: None,
        }
    }

    /// Create a fragment with a card and an advisory
    pub fn with_advisory(card: MetricCard, advisory: Advisory) -> Self {
        Self {
            card,
            advisory: Some(advisory),
        }
    }
}
