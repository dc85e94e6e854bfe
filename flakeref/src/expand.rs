//! Attribute path expansion.
//!
//! Given a partial attribute path and a command kind, expansion produces
//! the fully qualified candidate paths an evaluator should try, in
//! priority order: the primary under the kind's canonical output prefix,
//! and for kinds with a fallback (`run`, `develop`) a second candidate
//! under `packages`.

use crate::attrpath::AttrPath;
use crate::command::CommandKind;
use crate::error::{Error, Result};
use crate::system::System;

/// The fully qualified candidates for one installable under one command.
///
/// Consumers look up the primary first and try the fallback only when the
/// primary attribute is absent and a fallback exists.
///
/// # Examples
///
/// ```
/// use flakeref::{expand, AttrPath, CommandKind, System};
///
/// let system: System = "x86_64-linux".parse().unwrap();
/// let path: AttrPath = "foo".parse().unwrap();
///
/// let expansion = expand(&path, CommandKind::Run, Some(&system)).unwrap();
/// assert_eq!(expansion.primary().to_string(), "apps.x86_64-linux.foo");
/// assert_eq!(
///     expansion.fallback().unwrap().to_string(),
///     "packages.x86_64-linux.foo"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
    primary: AttrPath,
    fallback: Option<AttrPath>,
}

impl Expansion {
    /// The candidate to look up first.
    #[must_use]
    pub fn primary(&self) -> &AttrPath {
        &self.primary
    }

    /// The candidate to try when the primary attribute is absent, if any.
    #[must_use]
    pub fn fallback(&self) -> Option<&AttrPath> {
        self.fallback.as_ref()
    }

    /// All candidates in priority order.
    #[must_use]
    pub fn candidates(&self) -> Vec<&AttrPath> {
        let mut candidates = vec![&self.primary];
        if let Some(fallback) = &self.fallback {
            candidates.push(fallback);
        }
        candidates
    }

    /// The error to surface once every candidate has been tried and none
    /// named an existing attribute.
    #[must_use]
    pub fn not_found_error(&self) -> Error {
        Error::AttributeNotFound {
            attempted: self
                .candidates()
                .iter()
                .map(|path| path.to_string())
                .collect(),
        }
    }

    /// A human-readable description of the lookup this expansion describes.
    #[must_use]
    pub fn description(&self) -> String {
        match &self.fallback {
            Some(fallback) => format!("{} (falling back to {})", self.primary, fallback),
            None => self.primary.to_string(),
        }
    }
}

/// Expand a partial attribute path for a command kind.
///
/// The algorithm:
/// 1. `Repl` returns the path unchanged, with no fallback.
/// 2. An empty path becomes the single segment `default`.
/// 3. The primary is the kind's output prefix, then the system for
///    per-platform kinds (`nixos-rebuild` omits it), then the user
///    segments.
/// 4. Kinds with a fallback prefix get a second candidate under it with
///    the same system/tail rule.
///
/// # Errors
///
/// Returns a validation error if the kind is per-platform and no system
/// was supplied.
///
/// # Examples
///
/// ```
/// use flakeref::{expand, AttrPath, CommandKind};
///
/// let path: AttrPath = "gateway".parse().unwrap();
/// let expansion = expand(&path, CommandKind::NixosRebuild, None).unwrap();
/// assert_eq!(expansion.primary().to_string(), "nixosConfigurations.gateway");
/// assert!(expansion.fallback().is_none());
/// ```
pub fn expand(path: &AttrPath, kind: CommandKind, system: Option<&System>) -> Result<Expansion> {
    // Repl loads the whole flake; the path passes through untouched.
    let Some(prefix) = kind.output_prefix() else {
        return Ok(Expansion {
            primary: path.clone(),
            fallback: None,
        });
    };

    let tail: Vec<String> = if path.is_empty() {
        vec!["default".to_string()]
    } else {
        path.segments().to_vec()
    };

    let system = if kind.is_per_system() {
        Some(system.ok_or_else(|| Error::Validation {
            field: "system".to_string(),
            message: format!("command kind '{kind}' requires a system"),
        })?)
    } else {
        None
    };

    let qualify = |prefix: &str| -> AttrPath {
        let mut segments = Vec::with_capacity(tail.len() + 2);
        segments.push(prefix.to_string());
        if let Some(system) = system {
            segments.push(system.as_str().to_string());
        }
        segments.extend(tail.iter().cloned());
        // Prefix, system, and tail are all already validated segments.
        AttrPath::from_trusted_segments(segments)
    };

    Ok(Expansion {
        primary: qualify(prefix),
        fallback: kind.fallback_prefix().map(qualify),
    })
}
