//! Automation mode — a swappable behaviour selected by name.
//!
//! Modes form a closed enum with a snake_case wire form; unknown names are
//! rejected at configuration-parse time rather than when the mode runs.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// The closed set of automation behaviours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AutomationMode {
    /// Reduce consumption: dim lights, relax thermostat targets.
    EnergySaving,
    /// Arm the home: sensors active, alerts broadcast on breach.
    Security,
}

impl AutomationMode {
    /// The snake_case name used in configuration and logs.
    #[must_use]
    pub fn as_name(self) -> &'static str {
        match self {
            Self::EnergySaving => "energy_saving",
            Self::Security => "security",
        }
    }
}

impl std::fmt::Display for AutomationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_name())
    }
}

impl FromStr for AutomationMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "energy_saving" => Ok(Self::EnergySaving),
            "security" => Ok(Self::Security),
            other => Err(ValidationError::UnknownMode(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_known_mode_names() {
        assert_eq!(
            "energy_saving".parse::<AutomationMode>().unwrap(),
            AutomationMode::EnergySaving
        );
        assert_eq!(
            "security".parse::<AutomationMode>().unwrap(),
            AutomationMode::Security
        );
    }

    #[test]
    fn should_reject_unknown_mode_name() {
        let result = "party".parse::<AutomationMode>();
        assert!(matches!(
            result,
            Err(ValidationError::UnknownMode(name)) if name == "party"
        ));
    }

    #[test]
    fn should_roundtrip_through_display_and_from_str() {
        for mode in [AutomationMode::EnergySaving, AutomationMode::Security] {
            let parsed: AutomationMode = mode.to_string().parse().unwrap();
            assert_eq!(parsed, mode);
        }
    }

    #[test]
    fn should_serialize_as_snake_case_name() {
        let json = serde_json::to_string(&AutomationMode::EnergySaving).unwrap();
        assert_eq!(json, "\"energy_saving\"");
    }

    #[test]
    fn should_deserialize_from_snake_case_name() {
        let mode: AutomationMode = serde_json::from_str("\"security\"").unwrap();
        assert_eq!(mode, AutomationMode::Security);
    }
}
