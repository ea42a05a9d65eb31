//! Record redaction engine
//!
//! This module provides the core [`RecordRedactor`] that computes detection
//! signals, applies the two-tier decision policy, and masks detected
//! fields.
//!
//! # Architecture
//!
//! Redacting a record is a pure transformation in three steps:
//! - **Signals**: each recognized field is matched against its pattern,
//!   producing a [`SignalSet`](super::signals::SignalSet)
//! - **Decision**: standalone identifiers (phone, Aadhaar, passport, UPI)
//!   are individually sufficient; weaker signals (email, full name,
//!   address, device/IP) count only in combination
//! - **Masking**: standalone fields are rewritten as soon as their pattern
//!   matches, the rest only when the aggregate verdict is positive
//!
//! The input mapping is never mutated; a redacted copy is returned, so
//! records can safely be processed in parallel.
//!
//! # Examples
//!
//! ```
//! use kavach::redaction::{RecordRedactor, RedactionConfig};
//! use serde_json::json;
//!
//! # fn example() -> anyhow::Result<()> {
//! let redactor = RecordRedactor::new(RedactionConfig::default())?;
//!
//! let record = json!({
//!     "name": "Jane Doe",
//!     "phone": "9876543210"
//! });
//!
//! let result = redactor.redact("rec-1", record.as_object().unwrap())?;
//! assert!(result.is_pii);
//! assert_eq!(result.data["phone"], "98XXXXXX10");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use super::{
    audit::AuditLogger,
    config::RedactionConfig,
    mask,
    models::{Detection, PiiField, RedactedRecord},
    signals::{field_text, SignalSet},
};
use anyhow::{Context, Result};
use chrono::Utc;
use serde_json::{Map, Value};

/// Record redaction engine
///
/// Holds the redaction configuration and the optional audit logger. The
/// pattern table is process-wide and read-only, so the redactor itself
/// carries no per-record state and can be shared across threads.
pub struct RecordRedactor {
    config: RedactionConfig,
    audit_logger: Option<AuditLogger>,
}

impl RecordRedactor {
    /// Create a new redactor
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the audit
    /// logger cannot be initialized.
    pub fn new(config: RedactionConfig) -> Result<Self> {
        config
            .validate()
            .context("Invalid redaction configuration")?;

        let audit_logger = if config.audit.enabled {
            Some(AuditLogger::new(
                config.audit.log_path.clone(),
                config.audit.json_format,
            )?)
        } else {
            None
        };

        Ok(Self {
            config,
            audit_logger,
        })
    }

    /// Redact a single record
    ///
    /// Returns a new mapping with detected fields masked, together with
    /// the verdict and the signals that produced it. Unrecognized fields
    /// pass through untouched, and a record with no recognized fields
    /// comes back unchanged with a negative verdict.
    ///
    /// In dry-run mode the returned data is the original, but the
    /// detections list still records what would have been masked.
    ///
    /// # Errors
    ///
    /// The transformation itself cannot fail; the only error source is
    /// writing the audit log, when enabled.
    pub fn redact(&self, record_id: &str, record: &Map<String, Value>) -> Result<RedactedRecord> {
        let signals = SignalSet::from_record(record);
        let is_pii = signals.is_pii();

        let mut data = record.clone();
        let mut detections = Vec::new();

        // Standalone identifiers are rewritten as soon as their pattern
        // matches; `standalone` already makes the verdict positive.
        if signals.phone {
            self.apply(&mut data, &mut detections, PiiField::Phone, mask::mask_phone);
        }
        if signals.aadhaar {
            self.apply(
                &mut data,
                &mut detections,
                PiiField::Aadhaar,
                mask::mask_aadhaar,
            );
        }
        if signals.passport {
            self.apply(
                &mut data,
                &mut detections,
                PiiField::Passport,
                mask::mask_passport,
            );
        }
        if signals.upi {
            self.apply(&mut data, &mut detections, PiiField::UpiId, |value| {
                mask::mask_handle(value, &self.config.marker)
            });
        }

        // Quasi-identifiers are masked only under a positive aggregate
        // verdict. A lone matching email stays readable.
        if is_pii {
            if signals.email {
                self.apply(&mut data, &mut detections, PiiField::Email, |value| {
                    mask::mask_handle(value, &self.config.marker)
                });
            }
            if signals.name_full {
                self.apply(&mut data, &mut detections, PiiField::Name, mask::mask_name);
            }
            if signals.address {
                self.replace_wholesale(&mut data, &mut detections, PiiField::Address);
            }
            if signals.device_ip {
                self.replace_wholesale(&mut data, &mut detections, PiiField::IpAddress);
                self.replace_wholesale(&mut data, &mut detections, PiiField::DeviceId);
            }
        }

        let result = RedactedRecord {
            record_id: record_id.to_string(),
            data,
            is_pii,
            signals,
            detections,
            timestamp: Utc::now(),
        };

        if let Some(ref logger) = self.audit_logger {
            logger.log_redaction(&result)?;
        }

        Ok(result)
    }

    /// Mask a field through its masking function, recording the detection.
    fn apply<F>(
        &self,
        data: &mut Map<String, Value>,
        detections: &mut Vec<Detection>,
        field: PiiField,
        mask_fn: F,
    ) where
        F: Fn(&str) -> String,
    {
        let key = field.key();
        if let Some(original) = field_text(data, key) {
            let masked = mask_fn(&original);
            detections.push(Detection::new(field, original, masked.clone()));
            if !self.config.dry_run {
                data.insert(key.to_string(), Value::String(masked));
            }
        }
    }

    /// Replace a field's value with the redaction marker if it is present.
    fn replace_wholesale(
        &self,
        data: &mut Map<String, Value>,
        detections: &mut Vec<Detection>,
        field: PiiField,
    ) {
        let key = field.key();
        if !data.contains_key(key) {
            return;
        }

        let original = field_text(data, key).unwrap_or_default();
        let masked = self.config.marker.clone();
        detections.push(Detection::new(field, original, masked.clone()));
        if !self.config.dry_run {
            data.insert(key.to_string(), Value::String(masked));
        }
    }

    /// Check if the redactor is in dry-run mode
    pub fn is_dry_run(&self) -> bool {
        self.config.dry_run
    }
}
