//! System identifier type for per-platform attribute selection.
//!
//! A system is an opaque platform string such as `x86_64-linux` or
//! `aarch64-darwin`. It is always supplied by the caller or configuration,
//! never computed here.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A validated system identifier (e.g. `x86_64-linux`).
///
/// The content is opaque apart from the constraint that it must be usable
/// as a single attribute path segment: non-empty, no whitespace, no `.`.
///
/// # Examples
///
/// ```
/// use flakeref::System;
///
/// let system: System = "x86_64-linux".parse().unwrap();
/// assert_eq!(system.as_str(), "x86_64-linux");
///
/// assert!("".parse::<System>().is_err());
/// assert!("x86_64 linux".parse::<System>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct System(String);

impl System {
    /// Returns the system string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for System {
    type Error = InvalidSystemError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err(InvalidSystemError {
                value,
                reason: "system must be non-empty".into(),
            });
        }
        if value.chars().any(char::is_whitespace) {
            return Err(InvalidSystemError {
                value,
                reason: "system must not contain whitespace".into(),
            });
        }
        if value.contains('.') {
            return Err(InvalidSystemError {
                value,
                reason: "system must be a single attribute segment (no '.')".into(),
            });
        }
        Ok(Self(value))
    }
}

impl FromStr for System {
    type Err = InvalidSystemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.to_string())
    }
}

impl From<System> for String {
    fn from(system: System) -> Self {
        system.0
    }
}

impl fmt::Display for System {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for invalid system identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidSystemError {
    /// The invalid system string.
    pub value: String,
    /// The reason the system is invalid.
    pub reason: String,
}

impl fmt::Display for InvalidSystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid system '{}': {}", self.value, self.reason)
    }
}

impl std::error::Error for InvalidSystemError {}
