use crate::explanation::types::{Explanation, Measure};

/// Markdown formatter for explanations
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Format explanation as markdown
    pub fn format(explanation: &Explanation) -> String {
        let mut md = String::with_capacity(2048);
        let input = &explanation.scenario.input;

        md.push_str(&format!("# {}\n\n", explanation.title));
        md.push_str(&format!("### {}\n\n", explanation.subtitle));

        // Banner
        match &explanation.banner.headline {
            Some(headline) => md.push_str(&format!(
                "{} **{}** {}\n\n",
                explanation.banner.icon, headline, explanation.banner.message
            )),
            None => md.push_str(&format!(
                "{} {}\n\n",
                explanation.banner.icon, explanation.banner.message
            )),
        }

        // Scenario
        md.push_str("## Scenario Parameters\n\n");
        md.push_str(&format!("- **Attendance:** {}\n", input.attendance));
        md.push_str(&format!("- **Temperature:** {}°F\n", input.temperature_f));
        md.push_str(&format!("- **Humidity:** {}%\n", input.humidity_pct));
        md.push_str(&format!("- **Venue:** {}\n\n", explanation.scenario.venue_display));

        // Gauge
        let gauge = &explanation.gauge;
        md.push_str("## Regional NEDOCS Threat Level\n\n");
        md.push_str(&format!(
            "**{}:** {}/{} (disaster threshold {})\n\n",
            gauge.title, gauge.value, gauge.axis_max, gauge.threshold
        ));
        md.push_str("| Band | Range | Color |\n");
        md.push_str("|------|-------|-------|\n");
        for band in &gauge.bands {
            let marker = if gauge.value >= band.from && (gauge.value < band.to || band.to == gauge.axis_max) {
                " ◀"
            } else {
                ""
            };
            md.push_str(&format!(
                "| {}{} | {}-{} | {} |\n",
                band.label, marker, band.from, band.to, band.color
            ));
        }
        md.push('\n');

        // Waterfall
        md.push_str("## Asset Distribution Waterfall\n\n");
        md.push_str(&format!("*{}*\n\n", explanation.waterfall.title));
        md.push_str("| Step | Measure | Patients |\n");
        md.push_str("|------|---------|----------|\n");
        for step in &explanation.waterfall.steps {
            let measure = match step.measure {
                Measure::Absolute => "total",
                Measure::Relative => "delta",
            };
            md.push_str(&format!("| {} | {} | {} |\n", step.label, measure, step.text));
        }
        md.push('\n');

        // Advisories
        if !explanation.advisories.is_empty() {
            md.push_str("## Advisories\n\n");
            for advisory in &explanation.advisories {
                md.push_str(&format!("{} **{}**  \n", advisory.icon, advisory.message));
                md.push_str(&format!("*Advice:* {}\n\n", advisory.advice));
            }
        }

        // Metrics
        md.push_str("## Metrics Breakdown\n\n");
        md.push_str("| Metric | Value | Interpretation |\n");
        md.push_str("|--------|-------|----------------|\n");
        for metric in &explanation.metrics_display {
            md.push_str(&format!(
                "| {} - {} | {} | {} |\n",
                metric.code, metric.name, metric.display, metric.interpretation
            ));
        }

        md
    }
}
