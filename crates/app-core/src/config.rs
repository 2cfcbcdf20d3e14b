//! Application configuration
//!
//! Read from a JSON file. Every field has a default, so a partial file (or
//! no file at all) is valid.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::validation::MIN_PASSWORD_LENGTH;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value is out of range
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type for configuration loading
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Animation timings for the progress ring, in milliseconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnimationConfig {
    /// Fill transition when the screen mounts or the ratio changes
    pub fill_ms: u64,
    /// Fill transition after a quick-add
    pub add_fill_ms: u64,
    /// Each half of the scale pulse
    pub pulse_ms: u64,
    /// Peak scale of the pulse
    pub pulse_scale: f64,
    /// Frame interval of the animation driver
    pub frame_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            fill_ms: 800,
            add_fill_ms: 600,
            pulse_ms: 150,
            pulse_scale: 1.05,
            frame_ms: 16,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// Daily water goal
    pub daily_goal_ml: u32,
    /// Intake for a day with no stored record
    pub default_intake_ml: u32,
    /// Quick-add button amounts
    pub quick_add_ml: Vec<u32>,
    /// Minimum password length at sign-up
    pub min_password_length: usize,
    /// Progress animation timings
    pub animation: AnimationConfig,
    /// Directory for persisted documents
    pub data_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            daily_goal_ml: 2500,
            default_intake_ml: 0,
            quick_add_ml: vec![250, 500, 750],
            min_password_length: MIN_PASSWORD_LENGTH,
            animation: AnimationConfig::default(),
            data_dir: PathBuf::from("data"),
        }
    }
}

impl AppConfig {
    /// Load from a JSON file, falling back to defaults if it does not exist
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config = match tokio::fs::read_to_string(path).await {
            Ok(contents) => Self::from_json(&contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "no config file, using defaults");
                Self::default()
            }
            Err(e) => return Err(e.into()),
        };

        config.validate()?;
        Ok(config)
    }

    /// Parse from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reject values the screens cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.quick_add_ml.is_empty() {
            return Err(ConfigError::Invalid("quickAddMl must not be empty".to_string()));
        }
        if self.quick_add_ml.contains(&0) {
            return Err(ConfigError::Invalid("quickAddMl amounts must be positive".to_string()));
        }
        if self.animation.frame_ms == 0 {
            return Err(ConfigError::Invalid("animation.frameMs must be positive".to_string()));
        }
        if self.animation.pulse_scale <= 0.0 {
            return Err(ConfigError::Invalid("animation.pulseScale must be positive".to_string()));
        }
        Ok(())
    }

    /// Path of the daily hydration log
    pub fn hydration_log_path(&self) -> PathBuf {
        self.data_dir.join("hydration_log.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.daily_goal_ml, 2500);
        assert_eq!(config.quick_add_ml, vec![250, 500, 750]);
        assert_eq!(config.min_password_length, 6);
        assert_eq!(config.animation.fill_ms, 800);
        assert_eq!(config.animation.add_fill_ms, 600);
        assert_eq!(config.animation.pulse_ms, 150);
        config.validate().unwrap();
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = AppConfig::from_json(r#"{"dailyGoalMl": 3000, "animation": {"pulseMs": 100}}"#)
            .unwrap();
        assert_eq!(config.daily_goal_ml, 3000);
        assert_eq!(config.animation.pulse_ms, 100);
        assert_eq!(config.animation.fill_ms, 800);
        assert_eq!(config.quick_add_ml, vec![250, 500, 750]);
    }

    #[test]
    fn test_rejects_zero_quick_add() {
        let config = AppConfig { quick_add_ml: vec![250, 0], ..Default::default() };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let config = AppConfig { quick_add_ml: vec![], ..Default::default() };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig::load(dir.path().join("absent.json")).await.unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        tokio::fs::write(&path, r#"{"quickAddMl": [200, 330], "dataDir": "/tmp/hydro"}"#)
            .await
            .unwrap();

        let config = AppConfig::load(&path).await.unwrap();
        assert_eq!(config.quick_add_ml, vec![200, 330]);
        assert_eq!(config.hydration_log_path(), PathBuf::from("/tmp/hydro/hydration_log.json"));
    }

    #[tokio::test]
    async fn test_load_malformed_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        tokio::fs::write(&path, "{ nope").await.unwrap();

        assert!(matches!(AppConfig::load(&path).await, Err(ConfigError::Parse(_))));
    }
}
