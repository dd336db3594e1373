// Page handlers for HTML rendering with Askama

use axum::extract::State;
use axum::response::Html;
use askama::Template;

use crate::api_server::{AppError, AppState, ScenarioQuery};
use crate::explanation::formatters::{render_gauge_svg, render_waterfall_svg, HtmlFormatter};
use crate::explanation::{Advisory, MetricCard};
use crate::scenario::{ScenarioInput, SliderRange, VenueKind};

// ============================================================================
// Dashboard
// ============================================================================

/// Slider positions; anything missing falls back to the slider default
#[derive(Debug, Default, serde::Deserialize)]
pub struct DashboardQuery {
    pub attendance: Option<u32>,
    pub temperature_f: Option<i32>,
    pub humidity_pct: Option<i32>,
    pub venue: Option<String>,
}

/// Venue selector option
pub struct VenueOption {
    pub key: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Template)]
#[template(path = "pages/dashboard.html")]
pub struct DashboardTemplate {
    pub page_title: String,
    pub title: String,
    pub subtitle: String,
    pub style: &'static str,
    pub banner_html: String,
    pub gauge_svg: String,
    pub waterfall_svg: String,
    pub attendance: u32,
    pub temperature_f: i32,
    pub humidity_pct: i32,
    pub attendance_range: SliderRange,
    pub temperature_range: SliderRange,
    pub humidity_range: SliderRange,
    pub venues: Vec<VenueOption>,
    pub advisories: Vec<Advisory>,
    pub metrics: Vec<MetricCard>,
}

pub async fn dashboard_page(
    State(state): State<AppState>,
    ScenarioQuery(query): ScenarioQuery<DashboardQuery>,
) -> Result<Html<String>, AppError> {
    let defaults = state.domain.default_scenario();
    let venue = match query.venue.as_deref() {
        Some(v) => v.parse::<VenueKind>()?,
        None => defaults.venue,
    };
    let input = ScenarioInput::new(
        query.attendance.unwrap_or(defaults.attendance),
        query.temperature_f.unwrap_or(defaults.temperature_f),
        query.humidity_pct.unwrap_or(defaults.humidity_pct),
        venue,
    );
    state.check_input(&input)?;

    let explanation = state.explain(&input);

    let template = DashboardTemplate {
        page_title: explanation.page_title.clone(),
        title: explanation.title.clone(),
        subtitle: explanation.subtitle.clone(),
        style: HtmlFormatter::STYLE,
        banner_html: HtmlFormatter::format_banner(&explanation.banner),
        gauge_svg: render_gauge_svg(&explanation.gauge),
        waterfall_svg: render_waterfall_svg(&explanation.waterfall),
        attendance: input.attendance,
        temperature_f: input.temperature_f,
        humidity_pct: input.humidity_pct,
        attendance_range: state.domain.attendance,
        temperature_range: state.domain.temperature_f,
        humidity_range: state.domain.humidity_pct,
        venues: VenueKind::ALL
            .iter()
            .map(|&v| VenueOption {
                key: v.as_str(),
                label: v.display_name(),
                selected: v == venue,
            })
            .collect(),
        advisories: explanation.advisories,
        metrics: explanation.metrics_display,
    };

    template
        .render()
        .map(Html)
        .map_err(|e| AppError::Internal(format!("Template error: {}", e)))
}
