//! Environment variable handling for configuration overrides.
//!
//! `FLAKEREF_*` environment variables override configuration file values.

use std::env;
use std::path::PathBuf;

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use flakeref::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Recognized variables: `FLAKEREF_SYSTEM`, `FLAKEREF_REGISTRY`,
    /// `FLAKEREF_OUTPUT_FORMAT`.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an invalid value.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(system) = env::var("FLAKEREF_SYSTEM") {
            config.default_system = Some(system.parse().map_err(|e| Error::Validation {
                field: "FLAKEREF_SYSTEM".into(),
                message: format!("{e}"),
            })?);
        }

        if let Ok(path) = env::var("FLAKEREF_REGISTRY") {
            if path.is_empty() {
                return Err(Error::Validation {
                    field: "FLAKEREF_REGISTRY".into(),
                    message: "must be non-empty when set".into(),
                });
            }
            config.registry_path = Some(PathBuf::from(path));
        }

        if let Ok(format) = env::var("FLAKEREF_OUTPUT_FORMAT") {
            config.output_format = Some(format.parse().map_err(|e| Error::Validation {
                field: "FLAKEREF_OUTPUT_FORMAT".into(),
                message: e,
            })?);
        }

        Ok(())
    }
}
