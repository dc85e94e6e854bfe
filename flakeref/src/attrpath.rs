//! Attribute path type for addressing flake outputs.
//!
//! An attribute path is an ordered sequence of non-empty segments, written
//! as a dotted string (`packages.x86_64-linux.default`). Segments may be
//! quoted with `"` so that a segment can itself contain a dot, mirroring
//! Nix attribute syntax. Escape sequences inside quotes are not supported,
//! so a segment can never contain a `"` character.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// An ordered sequence of attribute path segments.
///
/// May be empty (the user supplied no attribute path) or partially
/// specified; the `expand` module completes partial paths for a command
/// kind.
///
/// # Examples
///
/// ```
/// use flakeref::AttrPath;
///
/// let path: AttrPath = "packages.x86_64-linux.default".parse().unwrap();
/// assert_eq!(path.segments(), ["packages", "x86_64-linux", "default"]);
///
/// // The empty string parses to the empty path.
/// let empty: AttrPath = "".parse().unwrap();
/// assert!(empty.is_empty());
///
/// // Quoted segments may contain dots.
/// let quoted: AttrPath = r#"checks."pre-commit.run""#.parse().unwrap();
/// assert_eq!(quoted.segments(), ["checks", "pre-commit.run"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AttrPath {
    segments: Vec<String>,
}

impl AttrPath {
    /// Creates an empty attribute path.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates an attribute path from pre-split segments.
    ///
    /// # Errors
    ///
    /// Returns an error if any segment is empty or contains a `"`.
    pub fn from_segments<I, S>(segments: I) -> Result<Self, InvalidAttrPathError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        for segment in &segments {
            validate_segment(segment).map_err(|reason| InvalidAttrPathError {
                input: segments.join("."),
                reason,
            })?;
        }
        Ok(Self { segments })
    }

    /// Build a path from segments already known to be valid (non-empty,
    /// no `"`), skipping validation.
    pub(crate) fn from_trusted_segments(segments: Vec<String>) -> Self {
        Self { segments }
    }

    /// Returns the segments in order.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Returns `true` if the path has no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns the first segment, if any.
    #[must_use]
    pub fn first(&self) -> Option<&str> {
        self.segments.first().map(String::as_str)
    }

    /// Returns the last segment, if any.
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Consumes the path and returns its segments.
    #[must_use]
    pub fn into_segments(self) -> Vec<String> {
        self.segments
    }
}

/// Validate a single segment, returning the rejection reason on failure.
fn validate_segment(segment: &str) -> Result<(), String> {
    if segment.is_empty() {
        return Err("empty segment".to_string());
    }
    if segment.contains('"') {
        return Err("segment contains '\"'".to_string());
    }
    Ok(())
}

/// Whether a segment needs quoting when rendered as a dotted string.
fn needs_quoting(segment: &str) -> bool {
    segment.contains('.')
}

impl FromStr for AttrPath {
    type Err = InvalidAttrPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Self::empty());
        }

        let err = |reason: &str| InvalidAttrPathError {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let mut segments = Vec::new();
        let mut chars = s.chars().peekable();

        loop {
            let mut segment = String::new();
            if chars.peek() == Some(&'"') {
                chars.next();
                let mut closed = false;
                for c in chars.by_ref() {
                    if c == '"' {
                        closed = true;
                        break;
                    }
                    segment.push(c);
                }
                if !closed {
                    return Err(err("unterminated '\"'"));
                }
                // A closing quote must be followed by '.' or end of input.
                match chars.next() {
                    None => {
                        validate_segment(&segment).map_err(|reason| InvalidAttrPathError {
                            input: s.to_string(),
                            reason,
                        })?;
                        segments.push(segment);
                        break;
                    }
                    Some('.') => {}
                    Some(c) => {
                        return Err(err(&format!("unexpected '{c}' after closing '\"'")));
                    }
                }
            } else {
                let mut terminated = false;
                for c in chars.by_ref() {
                    if c == '.' {
                        terminated = true;
                        break;
                    }
                    if c == '"' {
                        return Err(err("'\"' may only open a segment"));
                    }
                    segment.push(c);
                }
                if !terminated {
                    validate_segment(&segment).map_err(|reason| InvalidAttrPathError {
                        input: s.to_string(),
                        reason,
                    })?;
                    segments.push(segment);
                    break;
                }
            }

            validate_segment(&segment).map_err(|reason| InvalidAttrPathError {
                input: s.to_string(),
                reason,
            })?;
            segments.push(segment);

            // A '.' was consumed; a trailing '.' leaves an empty final segment.
            if chars.peek().is_none() {
                return Err(err("empty segment"));
            }
        }

        Ok(Self { segments })
    }
}

impl TryFrom<String> for AttrPath {
    type Error = InvalidAttrPathError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AttrPath> for String {
    fn from(path: AttrPath) -> Self {
        path.to_string()
    }
}

impl fmt::Display for AttrPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            if needs_quoting(segment) {
                write!(f, "\"{segment}\"")?;
            } else {
                write!(f, "{segment}")?;
            }
        }
        Ok(())
    }
}

/// Error type for invalid attribute paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidAttrPathError {
    /// The attribute path string as supplied.
    pub input: String,
    /// The reason the path is invalid.
    pub reason: String,
}

impl fmt::Display for InvalidAttrPathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid attribute path '{}': {}", self.input, self.reason)
    }
}

impl std::error::Error for InvalidAttrPathError {}
