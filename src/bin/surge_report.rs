// Surge report CLI
//
// Usage:
//   surge_report estimate --attendance 120000 --temperature-f 96 --venue unbounded --format html -o radar.html
//   surge_report sweep --venue unbounded --format json

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::PathBuf;
use surge_radar::{
    ExplanationGenerator, HtmlFormatter, InputDomain, JsonFormatter, MarkdownFormatter,
    ScenarioInput, SurgeCalibration, SurgeScorer, SweepSummary, VenueKind,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Markdown,
    Json,
    Html,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SweepFormat {
    Markdown,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "surge_report")]
#[command(about = "Mass-gathering medical surge estimator", long_about = None)]
#[command(version)]
struct Cli {
    /// Calibration JSON overriding the built-in model constants
    #[arg(long, global = true, env = "SURGE_CALIBRATION")]
    calibration: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Estimate surge for one scenario
    Estimate {
        /// Attendance volume
        #[arg(long, default_value = "65000")]
        attendance: u32,

        /// Temperature (°F)
        #[arg(long, default_value = "85", allow_negative_numbers = true)]
        temperature_f: i32,

        /// Humidity (%)
        #[arg(long, default_value = "60")]
        humidity_pct: i32,

        /// Venue type (bounded / unbounded)
        #[arg(long, default_value = "bounded")]
        venue: VenueKind,

        /// Output format
        #[arg(short, long, value_enum, default_value = "markdown")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip the slider-domain check
        #[arg(long)]
        unchecked: bool,
    },

    /// Sweep every slider position for one venue type
    Sweep {
        /// Venue type (bounded / unbounded)
        #[arg(long, default_value = "bounded")]
        venue: VenueKind,

        /// Output format
        #[arg(short, long, value_enum, default_value = "markdown")]
        format: SweepFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "surge_radar=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Some(rendered) = run(Cli::parse())? {
        println!("{}", rendered);
    }
    Ok(())
}

/// Execute a parsed command. Returns the report when it belongs on stdout,
/// `None` when it was written to `--output`.
fn run(cli: Cli) -> Result<Option<String>> {
    let calibration = match &cli.calibration {
        Some(path) => SurgeCalibration::load(path)?,
        None => SurgeCalibration::default(),
    };
    let scorer = SurgeScorer::new(calibration);
    let domain = InputDomain::default();

    let (rendered, output) = match cli.command {
        Commands::Estimate {
            attendance,
            temperature_f,
            humidity_pct,
            venue,
            format,
            output,
            unchecked,
        } => {
            let input = ScenarioInput::new(attendance, temperature_f, humidity_pct, venue);
            if !unchecked {
                input.validate(&domain)?;
            }

            let breakdown = scorer.evaluate_with_breakdown(&input);
            let explanation = ExplanationGenerator::generate(&input, &breakdown, scorer.calibration());

            let rendered = match format {
                OutputFormat::Markdown => MarkdownFormatter::format(&explanation),
                OutputFormat::Json => JsonFormatter::format(&explanation)?,
                OutputFormat::Html => HtmlFormatter::format(&explanation),
            };
            (rendered, output)
        }
        Commands::Sweep { venue, format, output } => {
            let summary = scorer.sweep(&domain, venue);
            let rendered = match format {
                SweepFormat::Json => serde_json::to_string_pretty(&summary)?,
                SweepFormat::Markdown => format_sweep_markdown(&summary),
            };
            (rendered, output)
        }
    };

    match output {
        Some(path) => {
            fs::write(&path, &rendered)
                .with_context(|| format!("Failed to write report: {:?}", path))?;
            tracing::info!("Wrote {}", path.display());
            Ok(None)
        }
        None => Ok(Some(rendered)),
    }
}

fn format_sweep_markdown(summary: &SweepSummary) -> String {
    let mut md = String::with_capacity(4096);

    md.push_str(&format!("# Surge Sweep - {}\n\n", summary.venue.display_name()));
    md.push_str(&format!("**Scenarios evaluated:** {}  \n", summary.evaluated));
    md.push_str(&format!("**Peak NEDOCS:** {}", summary.peak_score));
    if let Some(peak) = &summary.peak_scenario {
        md.push_str(&format!(
            " (attendance {}, {}°F, {}% humidity)",
            peak.attendance, peak.temperature_f, peak.humidity_pct
        ));
    }
    md.push_str("\n\n");

    md.push_str("| Tier | Scenarios |\n|------|-----------|\n");
    for count in &summary.tier_counts {
        md.push_str(&format!("| {} | {} |\n", count.tier, count.count));
    }

    md.push_str("\n## Attendance Breaking Points\n\n");
    md.push_str("| Temp (°F) | Humidity | Warning at | Critical at | Heat override |\n");
    md.push_str("|-----------|----------|------------|-------------|---------------|\n");
    let fmt_att = |a: Option<u32>| a.map_or_else(|| "-".to_string(), |v| v.to_string());
    for point in &summary.breaking_points {
        md.push_str(&format!(
            "| {} | {}% | {} | {} | {} |\n",
            point.temperature_f,
            point.humidity_pct,
            fmt_att(point.first_warning_attendance),
            fmt_att(point.first_critical_attendance),
            if point.heat_override { "yes" } else { "" }
        ));
    }

    md
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("surge_report").chain(args.iter().copied()))
            .expect("arguments should parse")
    }

    #[test]
    fn test_estimate_defaults_to_markdown() {
        let report = run(cli(&["estimate"])).unwrap().unwrap();
        assert!(report.starts_with("# FIFA 2026: Medical Surge Radar"));
        assert!(report.contains("**NEDOCS Score:** 95/200"));
    }

    #[test]
    fn test_estimate_rejects_off_step_humidity() {
        let err = run(cli(&["estimate", "--humidity-pct", "62"])).unwrap_err();
        assert!(err.to_string().contains("humidity_pct"));
    }

    #[test]
    fn test_unchecked_skips_domain() {
        let report = run(cli(&["estimate", "--humidity-pct", "62", "--unchecked", "--format", "json"]))
            .unwrap()
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(value["scenario"]["input"]["humidity_pct"], 62);
    }

    #[test]
    fn test_estimate_accepts_venue_label() {
        let parsed = cli(&["estimate", "--venue", "Fan Zone (Unbounded)", "--format", "json"]);
        let report = run(parsed).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(value["estimate"]["total_patients"], 195);
    }

    #[test]
    fn test_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("radar.html");

        let stdout = run(cli(&[
            "estimate",
            "--temperature-f",
            "100",
            "--format",
            "html",
            "--output",
            path.to_str().unwrap(),
        ]))
        .unwrap();

        assert!(stdout.is_none());
        let html = fs::read_to_string(&path).unwrap();
        assert!(html.contains("<div class=\"banner override\">"));
    }

    #[test]
    fn test_sweep_json() {
        let report = run(cli(&["sweep", "--venue", "unbounded", "--format", "json"]))
            .unwrap()
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(value["venue"], "unbounded");
        assert_eq!(value["evaluated"], 29 * 61 * 19);
    }

    #[test]
    fn test_sweep_markdown() {
        let report = run(cli(&["sweep"])).unwrap().unwrap();
        assert!(report.starts_with("# Surge Sweep - Stadium (Bounded)"));
        assert!(report.contains("## Attendance Breaking Points"));
    }

    #[test]
    fn test_sweep_rejects_html() {
        let parsed = Cli::try_parse_from(["surge_report", "sweep", "--format", "html"]);
        assert!(parsed.is_err());
    }
}
