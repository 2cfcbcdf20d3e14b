//! Mood and energy check-in
//!
//! Two independent three-level selections. Setting either one is an
//! unconditional overwrite.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A low / medium / high reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Low
    Low,
    /// Medium
    #[default]
    Medium,
    /// High
    High,
}

/// How the user feels
pub type MoodLevel = Level;

/// How energetic the user feels
pub type EnergyLevel = Level;

impl Level {
    /// All levels in display order
    pub fn all() -> [Level; 3] {
        [Level::Low, Level::Medium, Level::High]
    }

    /// Lowercase identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Low => "low",
            Level::Medium => "medium",
            Level::High => "high",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unknown level name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown level: {0}")]
pub struct ParseLevelError(pub String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Level::Low),
            "medium" => Ok(Level::Medium),
            "high" => Ok(Level::High),
            other => Err(ParseLevelError(other.to_string())),
        }
    }
}

/// Current mood and energy selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CheckIn {
    /// Selected mood
    pub mood: MoodLevel,
    /// Selected energy
    pub energy: EnergyLevel,
}

impl CheckIn {
    /// Create a check-in with both values set
    pub fn new(mood: MoodLevel, energy: EnergyLevel) -> Self {
        Self { mood, energy }
    }

    /// Overwrite the mood
    pub fn set_mood(&mut self, level: MoodLevel) {
        self.mood = level;
    }

    /// Overwrite the energy
    pub fn set_energy(&mut self, level: EnergyLevel) {
        self.energy = level;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_medium() {
        let check_in = CheckIn::default();
        assert_eq!(check_in.mood, Level::Medium);
        assert_eq!(check_in.energy, Level::Medium);
    }

    #[test]
    fn test_set_mood_is_idempotent() {
        let mut once = CheckIn::default();
        once.set_mood(Level::High);

        let mut twice = CheckIn::default();
        twice.set_mood(Level::High);
        twice.set_mood(Level::High);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_mood_and_energy_are_independent() {
        let mut check_in = CheckIn::default();
        check_in.set_mood(Level::Low);
        assert_eq!(check_in.energy, Level::Medium);

        check_in.set_energy(Level::High);
        assert_eq!(check_in.mood, Level::Low);
    }

    #[test]
    fn test_parse_round_trip() {
        for level in Level::all() {
            assert_eq!(level.as_str().parse::<Level>().unwrap(), level);
        }
        assert!("extreme".parse::<Level>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&CheckIn::new(Level::Low, Level::High)).unwrap();
        assert_eq!(json, r#"{"mood":"low","energy":"high"}"#);
    }
}
