//! Inline SVG rendering of the gauge and waterfall specs
//!
//! Output is a self-contained `<svg>` element with no scripts or external
//! assets, embeddable in the standalone HTML report and the dashboard page.

use crate::explanation::types::{GaugeSpec, WaterfallSpec};
use std::f64::consts::PI;

const GAUGE_WIDTH: f64 = 300.0;
const GAUGE_HEIGHT: f64 = 220.0;
const GAUGE_CX: f64 = 150.0;
const GAUGE_CY: f64 = 180.0;
const GAUGE_RADIUS: f64 = 110.0;
const GAUGE_BAND_WIDTH: f64 = 30.0;

const WF_WIDTH: f64 = 480.0;
const WF_HEIGHT: f64 = 320.0;
const WF_LEFT: f64 = 56.0;
const WF_RIGHT: f64 = 16.0;
const WF_TOP: f64 = 40.0;
const WF_BOTTOM: f64 = 48.0;
const WF_BAR_WIDTH: f64 = 60.0;
const WF_CONNECTOR_COLOR: &str = "rgb(63, 63, 63)";

/// Escape text for inclusion in SVG/HTML
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Point on the dial for a gauge value (0 at the left, max at the right)
fn dial_point(value: f64, max: f64, radius: f64) -> (f64, f64) {
    let theta = PI * (1.0 - (value / max).clamp(0.0, 1.0));
    (GAUGE_CX + radius * theta.cos(), GAUGE_CY - radius * theta.sin())
}

fn arc_path(from: f64, to: f64, max: f64, radius: f64) -> Option<String> {
    if to <= from {
        return None;
    }
    let (x1, y1) = dial_point(from, max, radius);
    let (x2, y2) = dial_point(to, max, radius);
    Some(format!(
        "M {:.2} {:.2} A {r:.2} {r:.2} 0 0 1 {:.2} {:.2}",
        x1,
        y1,
        x2,
        y2,
        r = radius
    ))
}

/// Render the NEDOCS gauge as a half-dial
pub fn render_gauge_svg(gauge: &GaugeSpec) -> String {
    let max = f64::from(gauge.axis_max.max(1));
    let mut svg = String::with_capacity(2048);

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {w} {h}\" width=\"{w}\" height=\"{h}\" role=\"img\" aria-label=\"{title}: {value}\">\n",
        w = GAUGE_WIDTH,
        h = GAUGE_HEIGHT,
        title = escape(&gauge.title),
        value = gauge.value
    ));
    svg.push_str(&format!(
        "<text x=\"{}\" y=\"24\" text-anchor=\"middle\" font-size=\"20\">{}</text>\n",
        GAUGE_CX,
        escape(&gauge.title)
    ));

    // Bands
    for band in &gauge.bands {
        if let Some(d) = arc_path(f64::from(band.from), f64::from(band.to), max, GAUGE_RADIUS) {
            svg.push_str(&format!(
                "<path class=\"band\" d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"/>\n",
                d,
                escape(&band.color),
                GAUGE_BAND_WIDTH
            ));
        }
    }

    // Value bar
    if let Some(d) = arc_path(0.0, f64::from(gauge.value), max, GAUGE_RADIUS) {
        svg.push_str(&format!(
            "<path class=\"bar\" d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"10\"/>\n",
            d,
            escape(&gauge.bar_color)
        ));
    }

    // Threshold marker
    let threshold = f64::from(gauge.threshold);
    let (ix, iy) = dial_point(threshold, max, GAUGE_RADIUS - GAUGE_BAND_WIDTH * 0.75);
    let (ox, oy) = dial_point(threshold, max, GAUGE_RADIUS + GAUGE_BAND_WIDTH * 0.75);
    svg.push_str(&format!(
        "<line class=\"threshold\" x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"4\"/>\n",
        ix,
        iy,
        ox,
        oy,
        escape(&gauge.threshold_color)
    ));

    // Axis ends and number
    svg.push_str(&format!(
        "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" font-size=\"12\">{}</text>\n",
        GAUGE_CX - GAUGE_RADIUS,
        GAUGE_CY + 20.0,
        gauge.axis_min
    ));
    svg.push_str(&format!(
        "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" font-size=\"12\">{}</text>\n",
        GAUGE_CX + GAUGE_RADIUS,
        GAUGE_CY + 20.0,
        gauge.axis_max
    ));
    svg.push_str(&format!(
        "<text class=\"value\" x=\"{}\" y=\"{}\" text-anchor=\"middle\" font-size=\"40\" font-weight=\"bold\">{}</text>\n",
        GAUGE_CX,
        GAUGE_CY - 10.0,
        gauge.value
    ));

    svg.push_str("</svg>\n");
    svg
}

/// Render the patient-flow waterfall as a bar chart with connectors
pub fn render_waterfall_svg(waterfall: &WaterfallSpec) -> String {
    let spans = waterfall.running_totals();
    let plot_w = WF_WIDTH - WF_LEFT - WF_RIGHT;
    let plot_h = WF_HEIGHT - WF_TOP - WF_BOTTOM;
    let baseline = WF_TOP + plot_h;

    let max = spans
        .iter()
        .flat_map(|&(a, b)| [a, b])
        .max()
        .unwrap_or(0)
        .max(1) as f64;
    let y = |v: i64| baseline - (v as f64 / max) * plot_h;

    let slot = if spans.is_empty() { plot_w } else { plot_w / spans.len() as f64 };

    let mut svg = String::with_capacity(4096);
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {w} {h}\" width=\"{w}\" height=\"{h}\" role=\"img\" aria-label=\"{title}\">\n",
        w = WF_WIDTH,
        h = WF_HEIGHT,
        title = escape(&waterfall.title)
    ));
    svg.push_str(&format!(
        "<text x=\"{:.2}\" y=\"20\" text-anchor=\"middle\" font-size=\"16\">{}</text>\n",
        WF_WIDTH / 2.0,
        escape(&waterfall.title)
    ));
    svg.push_str(&format!(
        "<text x=\"14\" y=\"{:.2}\" text-anchor=\"middle\" font-size=\"12\" transform=\"rotate(-90 14 {:.2})\">{}</text>\n",
        WF_TOP + plot_h / 2.0,
        WF_TOP + plot_h / 2.0,
        escape(&waterfall.y_axis_title)
    ));
    svg.push_str(&format!(
        "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"#999\"/>\n",
        WF_LEFT,
        baseline,
        WF_LEFT + plot_w,
        baseline
    ));

    for (i, (step, &(start, end))) in waterfall.steps.iter().zip(&spans).enumerate() {
        let x = WF_LEFT + slot * i as f64 + (slot - WF_BAR_WIDTH) / 2.0;
        let top = y(start.max(end));
        let height = (y(start.min(end)) - top).max(1.0);

        svg.push_str(&format!(
            "<rect class=\"step\" x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"{}\"/>\n",
            x,
            top,
            WF_BAR_WIDTH,
            height,
            escape(&step.color)
        ));
        svg.push_str(&format!(
            "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" font-size=\"12\">{}</text>\n",
            x + WF_BAR_WIDTH / 2.0,
            top - 6.0,
            escape(&step.text)
        ));
        svg.push_str(&format!(
            "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" font-size=\"11\">{}</text>\n",
            x + WF_BAR_WIDTH / 2.0,
            baseline + 18.0,
            escape(&step.label)
        ));

        // Connector to the next bar at this bar's running total
        if i + 1 < spans.len() {
            let next_x = WF_LEFT + slot * (i + 1) as f64 + (slot - WF_BAR_WIDTH) / 2.0;
            svg.push_str(&format!(
                "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-dasharray=\"3,3\"/>\n",
                x + WF_BAR_WIDTH,
                y(end),
                next_x,
                y(end),
                WF_CONNECTOR_COLOR
            ));
        }
    }

    svg.push_str("</svg>\n");
    svg
}
