//! Configuration management for Kavach.
//!
//! TOML-based configuration with environment variable overrides
//! (`KAVACH_*` prefix). The configuration file is optional: when the
//! path does not exist, built-in defaults are used so the tool runs with
//! zero setup.
//!
//! # Example Configuration
//!
//! ```toml
//! [redaction]
//! dry_run = false
//! marker = "[REDACTED_PII]"
//!
//! [redaction.audit]
//! enabled = true
//! log_path = "./audit/redaction.log"
//!
//! [logging]
//! local_enabled = true
//! local_path = "./logs"
//! local_rotation = "daily"
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{KavachConfig, LoggingConfig};
