use crate::explanation::types::Explanation;

/// Serializes an explanation as-is, so API clients get the same chart specs the HTML renders
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn format(explanation: &Explanation) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(explanation)
    }

    /// Single-line variant for logs and caches
    pub fn format_compact(explanation: &Explanation) -> Result<String, serde_json::Error> {
        serde_json::to_string(explanation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::explanation::ExplanationGenerator;
    use crate::scenario::ScenarioInput;
    use crate::scorer::SurgeScorer;

    fn default_explanation() -> Explanation {
        let scorer = SurgeScorer::default();
        let input = ScenarioInput::default();
        let breakdown = scorer.evaluate_with_breakdown(&input);
        ExplanationGenerator::generate(&input, &breakdown, scorer.calibration())
    }

    #[test]
    fn test_format_json() {
        let json = JsonFormatter::format(&default_explanation()).unwrap();

        assert!(json.contains("\"nedocs_score_capped\": 95"));
        assert!(json.contains("\"tier\": \"normal\""));
        assert!(json.contains("\"measure\": \"absolute\""));
        assert!(json.contains("\"venue\": \"bounded\""));
    }

    #[test]
    fn test_format_compact() {
        let json = JsonFormatter::format_compact(&default_explanation()).unwrap();

        assert!(!json.contains("\n  "));

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["estimate"]["total_patients"], 97);
        assert_eq!(value["gauge"]["threshold"], 140);
    }
}
