use crate::explanation::formatters::svg::{escape, render_gauge_svg, render_waterfall_svg};
use crate::explanation::types::{Explanation, Banner};
use crate::metrics::SeverityTier;

/// HTML formatter for explanations
pub struct HtmlFormatter;

impl HtmlFormatter {
    /// CSS shared by the standalone report and the dashboard page
    pub const STYLE: &'static str = "\
body { font-family: system-ui, sans-serif; max-width: 1100px; margin: 40px auto; padding: 20px; line-height: 1.6; }
h1 { color: #2c3e50; margin-bottom: 4px; }
h2 { color: #34495e; border-bottom: 2px solid #ecf0f1; padding-bottom: 5px; margin-top: 30px; }
h3 { color: #34495e; margin-top: 0; }
.banner { padding: 15px; margin: 15px 0; border-radius: 4px; border-left: 4px solid; }
.banner.normal { background: #d4edda; border-color: #28a745; }
.banner.warning { background: #fff3cd; border-color: #ffc107; }
.banner.critical, .banner.override { background: #f8d7da; border-color: #dc3545; }
.charts { display: flex; flex-wrap: wrap; gap: 24px; }
.charts > div { flex: 1 1 320px; }
.advisory { background: #fff3cd; border-left: 4px solid #ffc107; padding: 10px 15px; margin: 10px 0; border-radius: 4px; }
.advisory em { color: #6c757d; }
table { width: 100%; border-collapse: collapse; margin: 16px 0; }
th { background: #34495e; color: white; text-align: left; padding: 12px; font-weight: 600; }
td { padding: 12px; border-bottom: 1px solid #ecf0f1; }
tr:hover { background: #f8f9fa; }
";

    /// Format explanation as standalone HTML with embedded CSS and inline SVG charts
    pub fn format(explanation: &Explanation) -> String {
        let mut html = String::with_capacity(8192);

        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        html.push_str("<meta charset=\"UTF-8\">\n");
        html.push_str(&format!("<title>{}</title>\n", escape(&explanation.page_title)));
        html.push_str("<style>\n");
        html.push_str(Self::STYLE);
        html.push_str("</style>\n</head>\n<body>\n");

        html.push_str(&format!("<h1>{}</h1>\n", escape(&explanation.title)));
        html.push_str(&format!("<p><strong>{}</strong></p>\n", escape(&explanation.subtitle)));

        html.push_str(&Self::format_banner(&explanation.banner));

        // Scenario
        let input = &explanation.scenario.input;
        html.push_str("<h2>Scenario Parameters</h2>\n");
        html.push_str(&format!(
            "<p>Attendance {} &middot; {}°F &middot; {}% humidity &middot; {}</p>\n",
            input.attendance,
            input.temperature_f,
            input.humidity_pct,
            escape(&explanation.scenario.venue_display)
        ));

        // Charts
        html.push_str("<div class=\"charts\">\n");
        html.push_str("<div>\n<h3>Regional NEDOCS Threat Level</h3>\n");
        html.push_str(&render_gauge_svg(&explanation.gauge));
        html.push_str("</div>\n");
        html.push_str("<div>\n<h3>Asset Distribution Waterfall</h3>\n");
        html.push_str(&render_waterfall_svg(&explanation.waterfall));
        html.push_str("</div>\n</div>\n");

        // Advisories
        if !explanation.advisories.is_empty() {
            html.push_str("<h2>Advisories</h2>\n");
            for advisory in &explanation.advisories {
                html.push_str("<div class=\"advisory\">\n");
                html.push_str(&format!(
                    "<p>{} <strong>{}</strong></p>\n",
                    advisory.icon,
                    escape(&advisory.message)
                ));
                html.push_str(&format!("<p><em>Advice: {}</em></p>\n", escape(&advisory.advice)));
                html.push_str("</div>\n");
            }
        }

        // Metrics table
        html.push_str("<h2>Metrics Breakdown</h2>\n");
        html.push_str("<table>\n<thead><tr><th>Metric</th><th>Value</th><th>Interpretation</th></tr></thead>\n<tbody>\n");
        for metric in &explanation.metrics_display {
            html.push_str(&format!(
                "<tr><td>{} - {}</td><td>{}</td><td>{}</td></tr>\n",
                escape(&metric.code),
                escape(&metric.name),
                escape(&metric.display),
                escape(&metric.interpretation)
            ));
        }
        html.push_str("</tbody>\n</table>\n");

        html.push_str("</body>\n</html>\n");
        html
    }

    /// Banner `<div>` with tier styling
    pub fn format_banner(banner: &Banner) -> String {
        let class = match banner.tier {
            SeverityTier::Normal => "normal",
            SeverityTier::Warning => "warning",
            SeverityTier::Critical => "critical",
            SeverityTier::Override => "override",
        };
        let body = match &banner.headline {
            Some(headline) => format!("<strong>{}</strong> {}", escape(headline), escape(&banner.message)),
            None => escape(&banner.message),
        };
        format!(
            "<div class=\"banner {}\">{} {}</div>\n",
            class, banner.icon, body
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::explanation::ExplanationGenerator;
    use crate::scenario::{ScenarioInput, VenueKind};
    use crate::scorer::SurgeScorer;

    fn explain(input: ScenarioInput) -> Explanation {
        let scorer = SurgeScorer::default();
        let breakdown = scorer.evaluate_with_breakdown(&input);
        ExplanationGenerator::generate(&input, &breakdown, scorer.calibration())
    }

    #[test]
    fn test_format_html() {
        let html = HtmlFormatter::format(&explain(ScenarioInput::default()));

        assert!(html.contains("<!DOCTYPE html>"));
        assert!(html.contains("<style>"));
        assert!(html.contains("<title>Regional Medical Surge Radar</title>"));
        assert!(html.contains("<h1>FIFA 2026: Medical Surge Radar</h1>"));
        assert!(html.contains("<div class=\"banner normal\">"));
        assert_eq!(html.matches("<svg").count(), 2);
        assert!(html.contains("TTHR - Transport-to-Hospital Rate"));
        assert!(html.contains("</html>"));
    }

    #[test]
    fn test_format_with_advisories() {
        let html = HtmlFormatter::format(&explain(ScenarioInput::new(140_000, 96, 90, VenueKind::Unbounded)));

        assert!(html.contains("<div class=\"banner critical\">"));
        assert!(html.contains("<strong>SYSTEM FAILURE IMMINENT:</strong>"));
        assert!(html.contains("<div class=\"advisory\">"));
    }

    #[test]
    fn test_banner_warning_class() {
        let cal = crate::utils::SurgeCalibration::default();
        let banner = crate::explanation::banner::generate_banner(SeverityTier::Warning, 135, &cal);
        let div = HtmlFormatter::format_banner(&banner);
        assert!(div.starts_with("<div class=\"banner warning\">⚠️ <strong>CRITICAL WARNING:</strong>"));
        assert!(div.contains("&lt; 5%"));
    }
}
