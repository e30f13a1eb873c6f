//! Runtime configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::adherence::{DEFAULT_CLICK_STEP, DEFAULT_COMPLETION_BONUS};
use crate::wellness::{DEFAULT_STEP_GOAL, DEFAULT_WATER_GOAL};

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid setting: {0}")]
    Invalid(String),
}

/// Upper bound for the reminder interval and visibility, in seconds.
pub const MAX_REMINDER_SECS: i64 = 24 * 60 * 60;

/// Tracker settings. Every field is optional in the JSON file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TrackerConfig {
    /// SQLite file for durable storage; in-memory when unset
    pub storage_path: Option<PathBuf>,
    /// Default `tracing` filter when `RUST_LOG` is unset; applied by [`crate::open`]
    pub log_level: String,
    /// Percentage added per recommended-food click
    pub adherence_click_step: i64,
    /// Percentage added to a suggestion completed today
    pub completion_bonus: u8,
    pub step_goal: u32,
    pub water_goal: u8,
    /// Seconds between hydration reminders, at most [`MAX_REMINDER_SECS`]
    pub hydration_interval_secs: i64,
    /// How long the hydration message stays visible
    pub notification_ttl_secs: i64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            storage_path: None,
            log_level: "info".into(),
            adherence_click_step: DEFAULT_CLICK_STEP,
            completion_bonus: DEFAULT_COMPLETION_BONUS,
            step_goal: DEFAULT_STEP_GOAL,
            water_goal: DEFAULT_WATER_GOAL,
            hydration_interval_secs: 300,
            notification_ttl_secs: 3,
        }
    }
}

impl TrackerConfig {
    /// Read configuration from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings outside their usable range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_REMINDER_SECS).contains(&self.hydration_interval_secs) {
            return Err(ConfigError::Invalid(format!(
                "hydration_interval_secs must be between 1 and {MAX_REMINDER_SECS}, got {}",
                self.hydration_interval_secs
            )));
        }
        if !(0..=MAX_REMINDER_SECS).contains(&self.notification_ttl_secs) {
            return Err(ConfigError::Invalid(format!(
                "notification_ttl_secs must be between 0 and {MAX_REMINDER_SECS}, got {}",
                self.notification_ttl_secs
            )));
        }
        Ok(())
    }

    /// Reminder interval. Out-of-range values disable the reminder.
    pub fn hydration_interval(&self) -> chrono::Duration {
        chrono::Duration::try_seconds(self.hydration_interval_secs)
            .unwrap_or_else(chrono::Duration::zero)
    }

    /// Reminder visibility. Out-of-range values hide the message.
    pub fn notification_ttl(&self) -> chrono::Duration {
        chrono::Duration::try_seconds(self.notification_ttl_secs)
            .unwrap_or_else(chrono::Duration::zero)
    }
}
