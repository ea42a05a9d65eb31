//! Domain error types
//!
//! All errors are domain-specific and don't expose third-party types.
//! Pattern matching cannot fail and missing record fields are signals,
//! not errors, so every variant here originates at the I/O boundary.

use thiserror::Error;

/// Main Kavach error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error sources and provides context for error handling.
#[derive(Debug, Error)]
pub enum KavachError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// CSV read/write errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Audit log errors
    #[error("Audit log error: {0}")]
    Audit(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for KavachError {
    fn from(err: std::io::Error) -> Self {
        KavachError::Io(err.to_string())
    }
}

// Conversion from csv::Error
impl From<csv::Error> for KavachError {
    fn from(err: csv::Error) -> Self {
        KavachError::Csv(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for KavachError {
    fn from(err: serde_json::Error) -> Self {
        KavachError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for KavachError {
    fn from(err: toml::de::Error) -> Self {
        KavachError::Configuration(format!("TOML parse error: {err}"))
    }
}
