//! Output formatting for resolved installables.
//!
//! Provides the formats a consumer might want for a normalized
//! (locator, attribute-path) pair: human-readable, JSON, and the bare
//! `locator#attr.path` strings an external tool would consume.

mod formatters;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::installable::Installable;

pub use formatters::{HumanFormatter, JsonFormatter, NixArgsFormatter};

/// Trait for formatting a resolved installable into an output string.
pub trait OutputFormatter {
    /// Format the given installable into a string (without a trailing
    /// newline).
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format(&self, installable: &Installable) -> Result<String>;
}

/// Available output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Human-readable format.
    Human,
    /// JSON format.
    Json,
    /// Bare candidate references, one per line.
    NixArgs,
}

impl OutputFormat {
    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(&self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Human => Box::new(HumanFormatter),
            Self::Json => Box::new(JsonFormatter),
            Self::NixArgs => Box::new(NixArgsFormatter),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            "nix-args" => Ok(Self::NixArgs),
            _ => Err(format!(
                "unknown output format '{s}' (expected human, json, or nix-args)"
            )),
        }
    }
}
