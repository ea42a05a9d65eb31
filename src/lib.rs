// Kavach - PII detection and redaction for structured records
// Copyright (c) 2026 Kavach Contributors
// Licensed under the MIT License

//! # Kavach - PII Record Redactor
//!
//! Kavach scans structured records (JSON blobs embedded in CSV rows) for
//! personally identifiable information, classifies each record as
//! PII-bearing or not, and masks detected fields.
//!
//! ## Overview
//!
//! Detection uses a fixed set of full-string patterns (phone, Aadhaar,
//! passport, UPI handle, email, postal address, IPv4/device) and a
//! two-tier decision policy: standalone identifiers are individually
//! sufficient for a positive verdict, while weaker signals (email, full
//! name, address, device/IP) only count in combination.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`redaction`] - Detection signals, decision policy, masking, audit
//! - [`pipeline`] - CSV/JSON boundary around the engine
//! - [`config`] - Configuration management
//! - [`domain`] - Error types
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```
//! use kavach::redaction::{RecordRedactor, RedactionConfig};
//! use serde_json::json;
//!
//! # fn main() -> anyhow::Result<()> {
//! let redactor = RecordRedactor::new(RedactionConfig::default())?;
//!
//! let record = json!({
//!     "name": "Jane Doe",
//!     "email": "jane.doe@example.com"
//! });
//!
//! let result = redactor.redact("rec-1", record.as_object().unwrap())?;
//! assert!(result.is_pii);
//! assert_eq!(result.data["name"], "JXXX DXXX");
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! The redaction engine is total: missing fields are absent signals and
//! pattern misses are negative signals, never errors. Fallible
//! operations at the I/O boundary return [`domain::Result`].
//!
//! ## Logging
//!
//! Kavach uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn};
//!
//! info!(records = 120, "Run completed");
//! warn!(record_id = "rec-9", "Malformed JSON payload");
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod logging;
pub mod pipeline;
pub mod redaction;
