//! Error types for the flakeref library.
//!
//! This module provides a comprehensive error hierarchy for all operations
//! in the flakeref library, using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Result type alias for operations that may fail with a flakeref error.
///
/// # Examples
///
/// ```
/// use flakeref::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("packages".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the flakeref library.
///
/// This enum encompasses all possible error conditions that can occur
/// while parsing, expanding, or resolving flake references.
#[derive(Debug, Error)]
pub enum Error {
    /// An installable string could not be split into locator and attribute path.
    #[error("malformed flake reference '{input}': {reason}")]
    MalformedReference {
        /// The raw string as supplied.
        input: String,
        /// The reason the split is ambiguous or invalid.
        reason: String,
    },

    /// A flake locator string could not be parsed.
    #[error("invalid flake locator '{input}': {reason}")]
    InvalidLocator {
        /// The locator half of the reference.
        input: String,
        /// The reason the locator is invalid.
        reason: String,
    },

    /// An attribute path string could not be parsed.
    #[error("invalid attribute path '{input}': {reason}")]
    InvalidAttrPath {
        /// The attribute path as supplied.
        input: String,
        /// The reason the path is invalid.
        reason: String,
    },

    /// An invalid system identifier was provided.
    #[error("invalid system '{value}': {reason}")]
    InvalidSystem {
        /// The invalid system string.
        value: String,
        /// The reason the system is invalid.
        reason: String,
    },

    /// An indirect reference has no mapping in the registry.
    #[error("unknown registry entry '{name}'")]
    UnknownRegistryEntry {
        /// The registry name that was looked up.
        name: String,
    },

    /// Every expansion candidate was tried and none named an existing attribute.
    ///
    /// The lookup itself is performed by the external evaluator; this error
    /// is what a caller surfaces once primary and fallback are exhausted.
    #[error("attribute not found; tried {}", attempted.join(", "))]
    AttributeNotFound {
        /// The fully qualified paths attempted, in priority order.
        attempted: Vec<String>,
    },

    /// A registry file could not be parsed.
    #[error("registry format error: {0}")]
    RegistryFormat(#[from] serde_json::Error),

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

// Additional conversions for better ergonomics

impl From<crate::system::InvalidSystemError> for Error {
    fn from(err: crate::system::InvalidSystemError) -> Self {
        Self::InvalidSystem {
            value: err.value,
            reason: err.reason,
        }
    }
}

impl From<crate::attrpath::InvalidAttrPathError> for Error {
    fn from(err: crate::attrpath::InvalidAttrPathError) -> Self {
        Self::InvalidAttrPath {
            input: err.input,
            reason: err.reason,
        }
    }
}

impl From<crate::locator::InvalidLocatorError> for Error {
    fn from(err: crate::locator::InvalidLocatorError) -> Self {
        Self::InvalidLocator {
            input: err.input,
            reason: err.reason,
        }
    }
}

impl Error {
    /// Check if error indicates a failed lookup (registry or attribute).
    ///
    /// # Examples
    ///
    /// ```
    /// use flakeref::Error;
    ///
    /// let err = Error::UnknownRegistryEntry { name: "nixpkgs".to_string() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UnknownRegistryEntry { .. } | Self::AttributeNotFound { .. }
        )
    }

    /// Check if error indicates malformed user input.
    ///
    /// # Examples
    ///
    /// ```
    /// use flakeref::Error;
    ///
    /// let err = Error::MalformedReference {
    ///     input: "a#b#c".to_string(),
    ///     reason: "multiple '#' separators".to_string(),
    /// };
    /// assert!(err.is_malformed());
    /// ```
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            Self::MalformedReference { .. }
                | Self::InvalidLocator { .. }
                | Self::InvalidAttrPath { .. }
                | Self::InvalidSystem { .. }
        )
    }
}
