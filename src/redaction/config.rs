//! Redaction configuration

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default replacement marker for wholesale redactions.
pub const DEFAULT_MARKER: &str = "[REDACTED_PII]";

/// Redaction engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedactionConfig {
    /// Dry-run mode (detect and classify but don't rewrite values)
    #[serde(default)]
    pub dry_run: bool,

    /// Replacement marker for values that are redacted wholesale
    #[serde(default = "default_marker")]
    pub marker: String,

    /// Audit logging configuration
    #[serde(default)]
    pub audit: AuditConfig,
}

fn default_marker() -> String {
    DEFAULT_MARKER.to_string()
}

impl Default for RedactionConfig {
    fn default() -> Self {
        Self {
            dry_run: false,
            marker: default_marker(),
            audit: AuditConfig::default(),
        }
    }
}

impl RedactionConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.marker.is_empty() {
            anyhow::bail!("Redaction marker must not be empty");
        }

        self.audit.validate().context("Invalid audit configuration")?;

        Ok(())
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("KAVACH_DRY_RUN") {
            self.dry_run = val.parse().context("Invalid KAVACH_DRY_RUN value")?;
        }

        if let Ok(val) = std::env::var("KAVACH_MARKER") {
            self.marker = val;
        }

        self.audit.apply_env_overrides()?;

        Ok(())
    }
}

/// Audit logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Enable audit logging
    #[serde(default)]
    pub enabled: bool,

    /// Audit log file path
    #[serde(default = "default_audit_log_path")]
    pub log_path: PathBuf,

    /// Use JSON format for audit logs
    #[serde(default = "default_audit_json_format")]
    pub json_format: bool,
}

fn default_audit_log_path() -> PathBuf {
    PathBuf::from("./audit/redaction.log")
}

fn default_audit_json_format() -> bool {
    true
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_path: default_audit_log_path(),
            json_format: default_audit_json_format(),
        }
    }
}

impl AuditConfig {
    /// Validate audit configuration
    pub fn validate(&self) -> Result<()> {
        if self.enabled {
            // Ensure parent directory exists or can be created
            if let Some(parent) = self.log_path.parent() {
                if !parent.exists() {
                    std::fs::create_dir_all(parent).with_context(|| {
                        format!(
                            "Failed to create audit log directory: {}",
                            parent.display()
                        )
                    })?;
                }
            }
        }
        Ok(())
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("KAVACH_AUDIT_ENABLED") {
            self.enabled = val.parse().context("Invalid KAVACH_AUDIT_ENABLED value")?;
        }

        if let Ok(val) = std::env::var("KAVACH_AUDIT_LOG_PATH") {
            self.log_path = PathBuf::from(val);
        }

        if let Ok(val) = std::env::var("KAVACH_AUDIT_JSON_FORMAT") {
            self.json_format = val
                .parse()
                .context("Invalid KAVACH_AUDIT_JSON_FORMAT value")?;
        }

        Ok(())
    }
}
