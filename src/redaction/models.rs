//! Redaction data models

use super::signals::SignalSet;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A recognized PII field, keyed by the record field name it is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PiiField {
    /// 10-digit mobile number
    Phone,
    /// 12-digit Aadhaar number
    Aadhaar,
    /// Passport number
    Passport,
    /// UPI payment handle
    UpiId,
    /// Email address
    Email,
    /// Person name
    Name,
    /// Postal address
    Address,
    /// IPv4 address
    IpAddress,
    /// Device identifier
    DeviceId,
}

impl PiiField {
    /// The record key this field is read from.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::Aadhaar => "aadhar",
            Self::Passport => "passport",
            Self::UpiId => "upi_id",
            Self::Email => "email",
            Self::Name => "name",
            Self::Address => "address",
            Self::IpAddress => "ip_address",
            Self::DeviceId => "device_id",
        }
    }

    /// Human-readable label for reports and audit entries.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Phone => "PHONE",
            Self::Aadhaar => "AADHAAR",
            Self::Passport => "PASSPORT",
            Self::UpiId => "UPI",
            Self::Email => "EMAIL",
            Self::Name => "NAME",
            Self::Address => "ADDRESS",
            Self::IpAddress => "IP_ADDRESS",
            Self::DeviceId => "DEVICE_ID",
        }
    }

    /// Whether this field alone is sufficient for a positive verdict.
    ///
    /// Standalone fields are masked as soon as their pattern matches; the
    /// rest are masked only when the aggregate verdict is positive.
    pub fn is_standalone(&self) -> bool {
        matches!(self, Self::Phone | Self::Aadhaar | Self::Passport | Self::UpiId)
    }
}

/// A single masked field within a record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Detection {
    /// Which recognized field fired
    pub field: PiiField,
    /// Original value (hashed before it reaches the audit log)
    pub original_value: String,
    /// Replacement written into the output record
    pub masked_value: String,
}

impl Detection {
    /// Create a new detection.
    pub fn new(field: PiiField, original_value: String, masked_value: String) -> Self {
        Self {
            field,
            original_value,
            masked_value,
        }
    }
}

/// Outcome of redacting a single record.
#[derive(Debug, Clone, Serialize)]
pub struct RedactedRecord {
    /// Record identifier supplied by the caller
    pub record_id: String,
    /// Redacted copy of the input mapping. In dry-run mode this is the
    /// original data, untouched.
    pub data: Map<String, Value>,
    /// Final verdict
    pub is_pii: bool,
    /// Detection flags computed for this record
    pub signals: SignalSet,
    /// Fields that were (or, in dry-run mode, would be) masked
    pub detections: Vec<Detection>,
    /// Timestamp of the redaction
    pub timestamp: DateTime<Utc>,
}

impl RedactedRecord {
    /// Get total number of masked fields.
    pub fn total_detections(&self) -> usize {
        self.detections.len()
    }

    /// Check if any field was masked.
    pub fn has_detections(&self) -> bool {
        !self.detections.is_empty()
    }
}
