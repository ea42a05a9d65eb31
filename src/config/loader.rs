//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::KavachConfig;
use crate::domain::errors::KavachError;
use crate::domain::result::Result;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file, falling back to built-in defaults when the
///    path does not exist (the tool must run with zero setup)
/// 2. Parses the TOML into [`KavachConfig`]
/// 3. Applies environment variable overrides (`KAVACH_*` prefix)
/// 4. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - An existing file cannot be read
/// - TOML parsing fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use kavach::config::load_config;
///
/// let config = load_config("kavach.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<KavachConfig> {
    let path = path.as_ref();

    let mut config = if path.exists() {
        let contents = fs::read_to_string(path).map_err(|e| {
            KavachError::Configuration(format!(
                "Failed to read configuration file {}: {}",
                path.display(),
                e
            ))
        })?;

        toml::from_str(&contents)
            .map_err(|e| KavachError::Configuration(format!("Failed to parse TOML: {e}")))?
    } else {
        tracing::debug!(path = %path.display(), "Configuration file not found, using defaults");
        KavachConfig::default()
    };

    config.apply_env_overrides()?;
    config.validate()?;

    Ok(config)
}
