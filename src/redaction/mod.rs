//! Record redaction for Kavach
//!
//! This module provides PII detection, classification, and masking for
//! structured records (field-name -> value mappings).
//!
//! # Architecture
//!
//! The redaction pipeline consists of:
//! - **Patterns**: precompiled full-string matchers for known identifier
//!   formats
//! - **Signals**: per-record boolean detection flags
//! - **Decision**: standalone identifiers vs. combinations of weaker
//!   signals
//! - **Masking**: field-specific replacement functions
//! - **Audit**: structured logging with hashed PII values
//!
//! # Usage
//!
//! ```rust,ignore
//! use kavach::redaction::{RecordRedactor, RedactionConfig};
//!
//! let redactor = RecordRedactor::new(RedactionConfig::default())?;
//! let result = redactor.redact(record_id, &record)?;
//! ```

pub mod audit;
pub mod config;
pub mod engine;
pub mod mask;
pub mod models;
pub mod patterns;
pub mod report;
pub mod signals;

// Re-export main types
pub use config::{AuditConfig, RedactionConfig, DEFAULT_MARKER};
pub use engine::RecordRedactor;
pub use models::{Detection, PiiField, RedactedRecord};
pub use report::{DetectionSample, ScanReport};
pub use signals::SignalSet;
