//! Configuration schema

use crate::domain::{KavachError, Result};
use crate::redaction::RedactionConfig;
use serde::{Deserialize, Serialize};

/// Top-level Kavach configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KavachConfig {
    /// Redaction engine settings
    #[serde(default)]
    pub redaction: RedactionConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl KavachConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.redaction
            .validate()
            .map_err(|e| KavachError::Configuration(format!("{e:#}")))?;
        self.logging.validate()?;
        Ok(())
    }

    /// Apply environment variable overrides (`KAVACH_*`)
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.redaction
            .apply_env_overrides()
            .map_err(|e| KavachError::Configuration(format!("{e:#}")))?;
        self.logging.apply_env_overrides();
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for local log files
    #[serde(default = "default_log_path")]
    pub local_path: String,

    /// Log rotation: "daily" or "hourly"
    #[serde(default = "default_log_rotation")]
    pub local_rotation: String,
}

fn default_log_path() -> String {
    "./logs".to_string()
}

fn default_log_rotation() -> String {
    "daily".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_log_path(),
            local_rotation: default_log_rotation(),
        }
    }
}

impl LoggingConfig {
    /// Validate logging configuration
    pub fn validate(&self) -> Result<()> {
        match self.local_rotation.as_str() {
            "daily" | "hourly" => Ok(()),
            other => Err(KavachError::Configuration(format!(
                "Invalid log rotation '{other}'. Must be one of: daily, hourly"
            ))),
        }
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("KAVACH_LOG_ENABLED") {
            self.local_enabled = val == "true" || val == "1";
        }

        if let Ok(val) = std::env::var("KAVACH_LOG_PATH") {
            self.local_path = val;
        }

        if let Ok(val) = std::env::var("KAVACH_LOG_ROTATION") {
            self.local_rotation = val;
        }
    }
}
