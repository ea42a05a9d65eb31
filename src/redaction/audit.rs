//! Audit logger for redaction operations
//!
//! Detected values are hashed with SHA-256 before they are written;
//! plaintext PII never reaches the audit log.

use super::models::{Detection, RedactedRecord};
use anyhow::{Context, Result};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Audit log entry
#[derive(Debug, Serialize)]
struct AuditLogEntry {
    timestamp: String,
    record_id: String,
    is_pii: bool,
    detections_count: usize,
    detections: Vec<AuditDetection>,
}

/// Audit detection entry (with hashed PII)
#[derive(Debug, Serialize)]
struct AuditDetection {
    field: String,
    /// SHA-256 hash of the original value
    value_hash: String,
    masked_value: String,
}

/// Audit logger for redaction operations
pub struct AuditLogger {
    log_path: PathBuf,
    json_format: bool,
}

impl AuditLogger {
    /// Create a new audit logger
    pub fn new(log_path: PathBuf, json_format: bool) -> Result<Self> {
        // Ensure parent directory exists
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create audit log directory: {}", parent.display())
            })?;
        }

        Ok(Self {
            log_path,
            json_format,
        })
    }

    /// Log a redacted record
    pub fn log_redaction(&self, record: &RedactedRecord) -> Result<()> {
        let entry = AuditLogEntry {
            timestamp: record.timestamp.to_rfc3339(),
            record_id: record.record_id.clone(),
            is_pii: record.is_pii,
            detections_count: record.detections.len(),
            detections: record
                .detections
                .iter()
                .map(|d| self.create_audit_detection(d))
                .collect(),
        };

        self.write_entry(&entry)
    }

    /// Create an audit detection entry with hashed PII value
    fn create_audit_detection(&self, detection: &Detection) -> AuditDetection {
        AuditDetection {
            field: detection.field.label().to_string(),
            value_hash: self.hash_pii_value(&detection.original_value),
            masked_value: detection.masked_value.clone(),
        }
    }

    /// Hash a PII value using SHA-256
    fn hash_pii_value(&self, value: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(value.as_bytes());
        let result = hasher.finalize();
        format!("{result:x}")
    }

    /// Write an audit entry to the log file
    fn write_entry(&self, entry: &AuditLogEntry) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .with_context(|| format!("Failed to open audit log: {}", self.log_path.display()))?;

        if self.json_format {
            let json_line =
                serde_json::to_string(entry).context("Failed to serialize audit entry")?;
            writeln!(file, "{json_line}").context("Failed to write audit entry")?;
        } else {
            // Plain text format
            writeln!(
                file,
                "[{}] Record: {} | PII: {} | Masked fields: {}",
                entry.timestamp, entry.record_id, entry.is_pii, entry.detections_count
            )
            .context("Failed to write audit entry")?;
        }

        Ok(())
    }
}
