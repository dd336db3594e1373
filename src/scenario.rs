//! Scenario inputs and the operator control domain
//!
//! A `ScenarioInput` is the four knobs an operator sets before an event:
//! attendance, temperature, humidity and venue kind. `InputDomain` mirrors
//! the dashboard sliders (bounds, step, default) and is only consulted at
//! the boundaries; the pipeline accepts any value.

use crate::error::SurgeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Venue perimeter type
///
/// Deserializes through `FromStr`, so JSON bodies accept the same keys,
/// labels and aliases as query strings and the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum VenueKind {
    /// Fixed-perimeter stadium event
    Bounded,
    /// Open fan-zone event
    Unbounded,
}

impl VenueKind {
    pub const ALL: [VenueKind; 2] = [VenueKind::Bounded, VenueKind::Unbounded];

    /// Label shown on the venue selector
    pub fn display_name(self) -> &'static str {
        match self {
            VenueKind::Bounded => "Stadium (Bounded)",
            VenueKind::Unbounded => "Fan Zone (Unbounded)",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            VenueKind::Bounded => "bounded",
            VenueKind::Unbounded => "unbounded",
        }
    }
}

impl fmt::Display for VenueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for VenueKind {
    type Err = SurgeError;

    /// Accepts the short key ("bounded"), the selector label
    /// ("Fan Zone (Unbounded)") or the common aliases "stadium"/"fan_zone".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        match key.as_str() {
            "bounded" | "stadium" | "stadium (bounded)" => Ok(VenueKind::Bounded),
            "unbounded" | "fan_zone" | "fan-zone" | "fanzone" | "fan zone (unbounded)" => {
                Ok(VenueKind::Unbounded)
            }
            _ => Err(SurgeError::UnknownVenue(s.to_string())),
        }
    }
}

impl TryFrom<String> for VenueKind {
    type Error = SurgeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Operator-supplied scenario parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScenarioInput {
    pub attendance: u32,
    pub temperature_f: i32,
    pub humidity_pct: i32,
    pub venue: VenueKind,
}

impl ScenarioInput {
    pub fn new(attendance: u32, temperature_f: i32, humidity_pct: i32, venue: VenueKind) -> Self {
        Self {
            attendance,
            temperature_f,
            humidity_pct,
            venue,
        }
    }

    /// Check the input against the slider domain
    pub fn validate(&self, domain: &InputDomain) -> Result<(), SurgeError> {
        domain.attendance.check("attendance", i64::from(self.attendance))?;
        domain.temperature_f.check("temperature_f", i64::from(self.temperature_f))?;
        domain.humidity_pct.check("humidity_pct", i64::from(self.humidity_pct))?;
        Ok(())
    }

    /// Stable key for response caching
    pub fn cache_key(&self) -> String {
        format!(
            "{}:{}:{}:{}",
            self.attendance,
            self.temperature_f,
            self.humidity_pct,
            self.venue.as_str()
        )
    }
}

impl Default for ScenarioInput {
    fn default() -> Self {
        InputDomain::default().default_scenario()
    }
}

/// One slider: inclusive bounds, step size and initial value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliderRange {
    pub min: i64,
    pub max: i64,
    pub step: i64,
    pub default: i64,
}

impl SliderRange {
    pub const fn new(min: i64, max: i64, step: i64, default: i64) -> Self {
        Self { min, max, step, default }
    }

    pub fn check(&self, field: &'static str, value: i64) -> Result<(), SurgeError> {
        if value < self.min || value > self.max {
            return Err(SurgeError::OutOfDomain {
                field,
                value,
                min: self.min,
                max: self.max,
            });
        }
        if self.step > 1 && (value - self.min) % self.step != 0 {
            return Err(SurgeError::OffStep {
                field,
                value,
                step: self.step,
            });
        }
        Ok(())
    }

    /// All grid values from `min` to `max` inclusive
    pub fn values(&self) -> impl Iterator<Item = i64> + '_ {
        let step = self.step.max(1) as usize;
        (self.min..=self.max).step_by(step)
    }

    pub fn len(&self) -> usize {
        if self.max < self.min {
            0
        } else {
            ((self.max - self.min) / self.step.max(1)) as usize + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The dashboard control domain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputDomain {
    pub attendance: SliderRange,
    pub temperature_f: SliderRange,
    pub humidity_pct: SliderRange,
    pub default_venue: VenueKind,
}

impl Default for InputDomain {
    fn default() -> Self {
        Self {
            attendance: SliderRange::new(10_000, 150_000, 5_000, 65_000),
            temperature_f: SliderRange::new(60, 120, 1, 85),
            humidity_pct: SliderRange::new(10, 100, 5, 60),
            default_venue: VenueKind::Bounded,
        }
    }
}

impl InputDomain {
    /// Scenario with every slider at its initial position
    pub fn default_scenario(&self) -> ScenarioInput {
        ScenarioInput {
            attendance: self.attendance.default as u32,
            temperature_f: self.temperature_f.default as i32,
            humidity_pct: self.humidity_pct.default as i32,
            venue: self.default_venue,
        }
    }

    /// Every grid point for one venue kind
    pub fn scenarios(&self, venue: VenueKind) -> Vec<ScenarioInput> {
        let mut out = Vec::with_capacity(self.grid_size());
        for attendance in self.attendance.values() {
            for temperature in self.temperature_f.values() {
                for humidity in self.humidity_pct.values() {
                    out.push(ScenarioInput::new(
                        attendance as u32,
                        temperature as i32,
                        humidity as i32,
                        venue,
                    ));
                }
            }
        }
        out
    }

    /// Number of grid points for one venue kind
    pub fn grid_size(&self) -> usize {
        self.attendance.len() * self.temperature_f.len() * self.humidity_pct.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scenario_matches_slider_defaults() {
        let s = ScenarioInput::default();
        assert_eq!(s.attendance, 65_000);
        assert_eq!(s.temperature_f, 85);
        assert_eq!(s.humidity_pct, 60);
        assert_eq!(s.venue, VenueKind::Bounded);
    }

    #[test]
    fn test_venue_parsing() {
        assert_eq!("bounded".parse::<VenueKind>().unwrap(), VenueKind::Bounded);
        assert_eq!("Fan Zone (Unbounded)".parse::<VenueKind>().unwrap(), VenueKind::Unbounded);
        assert_eq!(" STADIUM ".parse::<VenueKind>().unwrap(), VenueKind::Bounded);
        assert!(matches!(
            "arena".parse::<VenueKind>(),
            Err(SurgeError::UnknownVenue(_))
        ));
    }

    #[test]
    fn test_venue_deserializes_like_from_str() {
        let label: VenueKind = serde_json::from_str(r#""Fan Zone (Unbounded)""#).unwrap();
        assert_eq!(label, VenueKind::Unbounded);
        let alias: VenueKind = serde_json::from_str(r#""stadium""#).unwrap();
        assert_eq!(alias, VenueKind::Bounded);
        assert!(serde_json::from_str::<VenueKind>(r#""arena""#).is_err());

        // Serialization keeps the short key
        assert_eq!(serde_json::to_string(&VenueKind::Unbounded).unwrap(), r#""unbounded""#);
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let domain = InputDomain::default();
        let s = ScenarioInput::new(5_000, 85, 60, VenueKind::Bounded);
        let err = s.validate(&domain).unwrap_err();
        assert!(matches!(err, SurgeError::OutOfDomain { field: "attendance", .. }));

        let s = ScenarioInput::new(65_000, 121, 60, VenueKind::Bounded);
        assert!(s.validate(&domain).is_err());
    }

    #[test]
    fn test_validate_rejects_off_step() {
        let domain = InputDomain::default();
        let s = ScenarioInput::new(65_000, 85, 62, VenueKind::Bounded);
        assert!(matches!(
            s.validate(&domain),
            Err(SurgeError::OffStep { field: "humidity_pct", step: 5, .. })
        ));
    }

    #[test]
    fn test_grid_size() {
        let domain = InputDomain::default();
        // 29 attendance × 61 temperature × 19 humidity
        assert_eq!(domain.grid_size(), 29 * 61 * 19);
        assert_eq!(domain.scenarios(VenueKind::Unbounded).len(), domain.grid_size());
    }
}
