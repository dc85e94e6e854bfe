//! End-to-end installable resolution.
//!
//! Ties the pieces together: parse a raw installable string, optionally
//! resolve an indirect locator through a registry, and expand the
//! attribute path for a command kind. The result is the normalized
//! (locator, candidate paths) an external evaluator consumes.

use crate::attrpath::AttrPath;
use crate::command::CommandKind;
use crate::error::Result;
use crate::expand::{expand, Expansion};
use crate::locator::FlakeLocator;
use crate::parser::{join_installable, parse_installable};
use crate::registry::Resolve;
use crate::system::System;

/// A fully resolved installable: a concrete locator plus the expanded
/// attribute path candidates for one command kind.
///
/// # Examples
///
/// ```
/// use flakeref::{CommandKind, Installable, System};
///
/// let system: System = "x86_64-linux".parse().unwrap();
/// let installable =
///     Installable::resolve(".#foo", CommandKind::Build, Some(&system), None).unwrap();
///
/// assert_eq!(installable.locator().to_string(), ".");
/// assert_eq!(
///     installable.expansion().primary().to_string(),
///     "packages.x86_64-linux.foo"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Installable {
    locator: FlakeLocator,
    path: AttrPath,
    expansion: Expansion,
}

impl Installable {
    /// Parse, resolve, and expand a raw installable string.
    ///
    /// When a registry is supplied, an indirect locator is resolved
    /// through it before expansion; without one, indirect locators pass
    /// through unresolved (the external evaluator owns the real
    /// registry).
    ///
    /// # Errors
    ///
    /// Returns parse errors from the reference, registry lookup failures,
    /// or a validation error when a per-platform kind lacks a system.
    pub fn resolve(
        raw: &str,
        kind: CommandKind,
        system: Option<&System>,
        registry: Option<&dyn Resolve>,
    ) -> Result<Self> {
        let (locator, path) = parse_installable(raw)?;

        let locator = match (&locator, registry) {
            (FlakeLocator::Indirect { name }, Some(registry)) => registry.resolve(name)?,
            _ => locator,
        };

        let expansion = expand(&path, kind, system)?;

        Ok(Self {
            locator,
            path,
            expansion,
        })
    }

    /// The concrete locator (post registry resolution, if any).
    #[must_use]
    pub fn locator(&self) -> &FlakeLocator {
        &self.locator
    }

    /// The attribute path as the user supplied it, before expansion.
    #[must_use]
    pub fn original_path(&self) -> &AttrPath {
        &self.path
    }

    /// The expanded candidate paths.
    #[must_use]
    pub fn expansion(&self) -> &Expansion {
        &self.expansion
    }

    /// The candidate installable strings (`locator#attr.path`) in
    /// priority order, ready to hand to an external tool.
    #[must_use]
    pub fn candidate_references(&self) -> Vec<String> {
        self.expansion
            .candidates()
            .into_iter()
            .map(|path| join_installable(&self.locator, path))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Registry;

    fn system() -> System {
        "x86_64-linux".parse().unwrap()
    }

    fn registry() -> Registry {
        let mut registry = Registry::new();
        registry.insert("nixpkgs", "github:NixOS/nixpkgs".parse().unwrap());
        registry
    }

    #[test]
    fn test_resolve_local_flake() {
        let installable =
            Installable::resolve(".#foo", CommandKind::Build, Some(&system()), None).unwrap();
        assert_eq!(installable.locator(), &FlakeLocator::CurrentDirectory);
        assert_eq!(installable.original_path().to_string(), "foo");
        assert_eq!(
            installable.expansion().primary().to_string(),
            "packages.x86_64-linux.foo"
        );
    }

    #[test]
    fn test_resolve_indirect_through_registry() {
        let registry = registry();
        let installable = Installable::resolve(
            "nixpkgs#hello",
            CommandKind::Run,
            Some(&system()),
            Some(&registry),
        )
        .unwrap();

        assert_eq!(installable.locator().to_string(), "github:NixOS/nixpkgs");
        assert_eq!(
            installable.candidate_references(),
            [
                "github:NixOS/nixpkgs#apps.x86_64-linux.hello",
                "github:NixOS/nixpkgs#packages.x86_64-linux.hello",
            ]
        );
    }

    #[test]
    fn test_indirect_passes_through_without_registry() {
        let installable =
            Installable::resolve("nixpkgs#hello", CommandKind::Build, Some(&system()), None)
                .unwrap();
        assert!(installable.locator().is_indirect());
    }

    #[test]
    fn test_unknown_registry_entry_surfaces() {
        let registry = registry();
        let err = Installable::resolve(
            "home-manager#foo",
            CommandKind::Build,
            Some(&system()),
            Some(&registry),
        )
        .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_repl_keeps_reference_untouched() {
        let installable =
            Installable::resolve(".#foo.bar", CommandKind::Repl, None, None).unwrap();
        assert_eq!(installable.candidate_references(), [".#foo.bar"]);
    }

    #[test]
    fn test_bare_dot_build_defaults() {
        let installable =
            Installable::resolve(".", CommandKind::Build, Some(&system()), None).unwrap();
        assert_eq!(
            installable.candidate_references(),
            [".#packages.x86_64-linux.default"]
        );
    }
}
