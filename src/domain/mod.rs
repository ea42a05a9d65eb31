//! Domain types for Kavach.
//!
//! The domain layer provides the error hierarchy ([`KavachError`]) and the
//! crate-wide [`Result`] alias. The redaction engine itself is total and
//! never produces errors; everything here exists for the I/O boundary
//! (CSV, configuration, audit log).

pub mod errors;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::KavachError;
pub use result::Result;
