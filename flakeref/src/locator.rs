//! Flake locator types.
//!
//! A locator names where a flake lives: the current directory, a relative,
//! home-anchored, or absolute filesystem path, a GitHub repository, or an
//! indirect registry name such as `nixpkgs`. Locators are immutable once
//! parsed, and parsing is purely syntactic: the filesystem is never touched.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Where a flake lives.
///
/// `FromStr` and `Display` round-trip: `locator.to_string().parse()`
/// reproduces the locator.
///
/// # Examples
///
/// ```
/// use flakeref::FlakeLocator;
///
/// let here: FlakeLocator = ".".parse().unwrap();
/// assert_eq!(here, FlakeLocator::CurrentDirectory);
///
/// let github: FlakeLocator = "github:NixOS/nixpkgs/nixos-unstable".parse().unwrap();
/// assert_eq!(github.to_string(), "github:NixOS/nixpkgs/nixos-unstable");
///
/// let indirect: FlakeLocator = "nixpkgs".parse().unwrap();
/// assert!(indirect.is_indirect());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FlakeLocator {
    /// The flake in the current directory (`.`).
    CurrentDirectory,

    /// A relative filesystem path (`./foo`, `../bar`, `sub/dir` with a `/`).
    RelativePath(PathBuf),

    /// A `~/`-anchored path. The stored path is the part after `~/`
    /// (empty for a bare `~`); see [`FlakeLocator::expand_home`].
    HomeAnchored(PathBuf),

    /// An absolute filesystem path.
    AbsolutePath(PathBuf),

    /// A GitHub repository, optionally pinned to a branch, tag, or revision.
    GitHub {
        /// Repository owner (user or organization).
        owner: String,
        /// Repository name.
        repo: String,
        /// Optional branch, tag, or revision.
        reference: Option<String>,
    },

    /// An indirect reference, resolved through a registry by name.
    Indirect {
        /// The registry entry name.
        name: String,
    },
}

impl FlakeLocator {
    /// Returns `true` for an [`FlakeLocator::Indirect`] locator.
    #[must_use]
    pub fn is_indirect(&self) -> bool {
        matches!(self, Self::Indirect { .. })
    }

    /// Returns the registry name for an indirect locator.
    #[must_use]
    pub fn indirect_name(&self) -> Option<&str> {
        match self {
            Self::Indirect { name } => Some(name),
            _ => None,
        }
    }

    /// Expand a home-anchored locator to an absolute path.
    ///
    /// Any other locator is returned unchanged. This is the only place the
    /// environment is consulted; parsing itself never expands `~`.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn expand_home(self) -> Result<Self> {
        match self {
            Self::HomeAnchored(tail) => {
                let home = home::home_dir().ok_or_else(|| Error::InvalidLocator {
                    input: Self::HomeAnchored(tail.clone()).to_string(),
                    reason: "cannot determine home directory".to_string(),
                })?;
                Ok(Self::AbsolutePath(home.join(tail)))
            }
            other => Ok(other),
        }
    }
}

/// A flake id as accepted in indirect references: alphanumeric plus `-` and
/// `_`, starting with a letter.
fn is_valid_flake_id(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn parse_github(input: &str, spec: &str) -> std::result::Result<FlakeLocator, InvalidLocatorError> {
    let err = |reason: &str| InvalidLocatorError {
        input: input.to_string(),
        reason: reason.to_string(),
    };

    // owner/repo[/ref] — the reference may itself contain '/'.
    let mut parts = spec.splitn(3, '/');
    let owner = parts.next().unwrap_or_default();
    let repo = parts.next().ok_or_else(|| err("missing repository name"))?;
    let reference = parts.next();

    if owner.is_empty() {
        return Err(err("missing repository owner"));
    }
    if repo.is_empty() {
        return Err(err("missing repository name"));
    }
    if let Some(reference) = reference {
        if reference.is_empty() {
            return Err(err("empty git reference"));
        }
    }

    Ok(FlakeLocator::GitHub {
        owner: owner.to_string(),
        repo: repo.to_string(),
        reference: reference.map(str::to_string),
    })
}

impl FromStr for FlakeLocator {
    type Err = InvalidLocatorError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let err = |reason: &str| InvalidLocatorError {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        if s.is_empty() {
            return Err(err("empty locator"));
        }

        if s == "." {
            return Ok(Self::CurrentDirectory);
        }

        if s == "~" {
            return Ok(Self::HomeAnchored(PathBuf::new()));
        }
        if let Some(tail) = s.strip_prefix("~/") {
            if tail.is_empty() {
                return Err(err("empty path after '~/'"));
            }
            return Ok(Self::HomeAnchored(PathBuf::from(tail)));
        }

        if s.starts_with('/') {
            return Ok(Self::AbsolutePath(PathBuf::from(s)));
        }

        if let Some(spec) = s.strip_prefix("github:") {
            return parse_github(s, spec);
        }

        if let Some((scheme, _)) = s.split_once(':') {
            return Err(err(&format!("unsupported locator scheme '{scheme}:'")));
        }

        if s.starts_with("./") || s.starts_with("../") || s.contains('/') {
            return Ok(Self::RelativePath(PathBuf::from(s)));
        }

        if is_valid_flake_id(s) {
            return Ok(Self::Indirect {
                name: s.to_string(),
            });
        }

        Err(err(
            "not a path, github reference, or registry name (flake ids are \
             alphanumeric plus '-' and '_', starting with a letter)",
        ))
    }
}

impl TryFrom<String> for FlakeLocator {
    type Error = InvalidLocatorError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FlakeLocator> for String {
    fn from(locator: FlakeLocator) -> Self {
        locator.to_string()
    }
}

impl fmt::Display for FlakeLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CurrentDirectory => write!(f, "."),
            Self::RelativePath(path) | Self::AbsolutePath(path) => {
                write!(f, "{}", path.display())
            }
            Self::HomeAnchored(tail) => {
                if tail.as_os_str().is_empty() {
                    write!(f, "~")
                } else {
                    write!(f, "~/{}", tail.display())
                }
            }
            Self::GitHub {
                owner,
                repo,
                reference,
            } => match reference {
                Some(reference) => write!(f, "github:{owner}/{repo}/{reference}"),
                None => write!(f, "github:{owner}/{repo}"),
            },
            Self::Indirect { name } => write!(f, "{name}"),
        }
    }
}

/// Error type for invalid flake locators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidLocatorError {
    /// The locator string as supplied.
    pub input: String,
    /// The reason the locator is invalid.
    pub reason: String,
}

impl fmt::Display for InvalidLocatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid flake locator '{}': {}", self.input, self.reason)
    }
}

impl std::error::Error for InvalidLocatorError {}
