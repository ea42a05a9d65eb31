//! Result type alias for Kavach
//!
//! This module provides a convenient Result type alias that uses
//! [`KavachError`] as the error type.

use super::errors::KavachError;

/// Result type alias for Kavach operations
///
/// # Examples
///
/// ```
/// use kavach::domain::result::Result;
/// use kavach::domain::errors::KavachError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(KavachError::Configuration("missing section".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, KavachError>;
