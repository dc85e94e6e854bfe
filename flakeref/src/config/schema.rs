//! Configuration schema definitions.
//!
//! The configuration covers the three inputs expansion needs that are not
//! part of the installable itself: the default system, the registry file
//! location, and the preferred output format.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::output::OutputFormat;
use crate::system::System;

/// Complete configuration structure.
///
/// Every field is optional; unset fields fall through to the next
/// configuration source or the built-in default.
///
/// # Examples
///
/// ```
/// use flakeref::config::Config;
///
/// let config = Config {
///     default_system: Some("x86_64-linux".parse().unwrap()),
///     ..Default::default()
/// };
/// assert_eq!(config.default_system.unwrap().as_str(), "x86_64-linux");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// System used when the caller supplies none (e.g. `x86_64-linux`).
    pub default_system: Option<System>,

    /// Path to a user-registry JSON file for indirect references.
    pub registry_path: Option<PathBuf>,

    /// Output format for expansion results.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// Validate cross-field constraints.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an empty `registry_path`.
    pub fn validate(&self) -> Result<()> {
        if let Some(path) = &self.registry_path {
            if path.as_os_str().is_empty() {
                return Err(Error::Validation {
                    field: "registry_path".to_string(),
                    message: "must be non-empty when set".to_string(),
                });
            }
        }
        Ok(())
    }
}
