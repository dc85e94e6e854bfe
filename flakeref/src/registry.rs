//! Indirect reference resolution.
//!
//! An indirect locator (`nixpkgs`) names an entry in a flake registry
//! mapping names to concrete locators. Only lookup is modeled here; the
//! registry's update machinery belongs to the external tool. The shipped
//! [`Registry`] is an in-memory map loadable from a file in the Nix
//! user-registry JSON format:
//!
//! ```json
//! {
//!   "version": 2,
//!   "flakes": [
//!     {
//!       "from": { "type": "indirect", "id": "nixpkgs" },
//!       "to": { "type": "github", "owner": "NixOS", "repo": "nixpkgs" }
//!     }
//!   ]
//! }
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::locator::FlakeLocator;

/// The registry file version this module understands.
const SUPPORTED_VERSION: u32 = 2;

/// Resolves indirect references by registry name.
///
/// Implementors map a name such as `nixpkgs` to a concrete locator, or
/// fail with [`Error::UnknownRegistryEntry`].
pub trait Resolve {
    /// Look up a registry entry by name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownRegistryEntry`] when no mapping exists.
    fn resolve(&self, name: &str) -> Result<FlakeLocator>;
}

/// An in-memory name → locator registry.
///
/// # Examples
///
/// ```
/// use flakeref::{FlakeLocator, Registry, Resolve};
///
/// let mut registry = Registry::new();
/// registry.insert("nixpkgs", "github:NixOS/nixpkgs".parse().unwrap());
///
/// let locator = registry.resolve("nixpkgs").unwrap();
/// assert_eq!(locator.to_string(), "github:NixOS/nixpkgs");
/// assert!(registry.resolve("missing").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: HashMap<String, FlakeLocator>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an entry.
    pub fn insert(&mut self, name: impl Into<String>, locator: FlakeLocator) {
        self.entries.insert(name.into(), locator);
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the registry has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over (name, locator) pairs in unspecified order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &FlakeLocator)> {
        self.entries
            .iter()
            .map(|(name, locator)| (name.as_str(), locator))
    }

    /// Parse a registry from user-registry JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid, the version is
    /// unsupported, or an entry cannot be converted to a locator.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: RegistryFile = serde_json::from_str(json)?;

        if file.version != SUPPORTED_VERSION {
            return Err(Error::Validation {
                field: "version".to_string(),
                message: format!(
                    "unsupported registry version {} (expected {SUPPORTED_VERSION})",
                    file.version
                ),
            });
        }

        let mut registry = Self::new();
        for entry in file.flakes {
            let name = entry.from.indirect_id()?;
            let locator = entry.to.into_locator()?;
            registry.insert(name, locator);
        }
        Ok(registry)
    }

    /// Load a registry from a JSON file on disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        let registry = Self::from_json(&json)?;
        log::debug!(
            "loaded {} registry entries from {}",
            registry.len(),
            path.display()
        );
        Ok(registry)
    }
}

impl Resolve for Registry {
    fn resolve(&self, name: &str) -> Result<FlakeLocator> {
        self.entries
            .get(name)
            .cloned()
            .ok_or_else(|| Error::UnknownRegistryEntry {
                name: name.to_string(),
            })
    }
}

/// Top-level structure of a user-registry file.
#[derive(Debug, Deserialize)]
struct RegistryFile {
    version: u32,
    #[serde(default)]
    flakes: Vec<RegistryEntry>,
}

#[derive(Debug, Deserialize)]
struct RegistryEntry {
    from: RefSpec,
    to: RefSpec,
}

/// One side of a registry mapping, in the wire format's tagged form.
#[derive(Debug, Deserialize)]
struct RefSpec {
    #[serde(rename = "type")]
    kind: String,
    id: Option<String>,
    owner: Option<String>,
    repo: Option<String>,
    #[serde(rename = "ref")]
    reference: Option<String>,
    path: Option<String>,
}

impl RefSpec {
    /// The `from` side must be an indirect reference with an id.
    fn indirect_id(self) -> Result<String> {
        if self.kind != "indirect" {
            return Err(Error::Validation {
                field: "from.type".to_string(),
                message: format!("expected 'indirect', found '{}'", self.kind),
            });
        }
        self.id.ok_or_else(|| Error::Validation {
            field: "from.id".to_string(),
            message: "missing flake id".to_string(),
        })
    }

    /// The `to` side becomes a concrete locator.
    fn into_locator(self) -> Result<FlakeLocator> {
        match self.kind.as_str() {
            "github" => {
                let owner = self.owner.ok_or_else(|| Error::Validation {
                    field: "to.owner".to_string(),
                    message: "missing repository owner".to_string(),
                })?;
                let repo = self.repo.ok_or_else(|| Error::Validation {
                    field: "to.repo".to_string(),
                    message: "missing repository name".to_string(),
                })?;
                Ok(FlakeLocator::GitHub {
                    owner,
                    repo,
                    reference: self.reference,
                })
            }
            "path" => {
                let path = self.path.ok_or_else(|| Error::Validation {
                    field: "to.path".to_string(),
                    message: "missing path".to_string(),
                })?;
                Ok(path.parse::<FlakeLocator>()?)
            }
            other => Err(Error::Validation {
                field: "to.type".to_string(),
                message: format!("unsupported registry target type '{other}'"),
            }),
        }
    }
}
