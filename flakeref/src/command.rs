//! Command kinds and their flake output conventions.
//!
//! Each command kind knows which top-level flake output it looks under
//! (`packages`, `apps`, `devShells`, `nixosConfigurations`), whether that
//! lookup is per-platform, and where it falls back when the primary
//! attribute does not exist.

use std::fmt;
use std::str::FromStr;

/// The kind of command an installable is being expanded for.
///
/// # Examples
///
/// ```
/// use flakeref::CommandKind;
///
/// assert_eq!(CommandKind::Build.output_prefix(), Some("packages"));
/// assert_eq!(CommandKind::Run.fallback_prefix(), Some("packages"));
/// assert!(!CommandKind::NixosRebuild.is_per_system());
/// assert_eq!(CommandKind::Repl.output_prefix(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// Build a package (`packages.<system>.<name>`).
    Build,
    /// Evaluate an attribute (`packages.<system>.<name>`).
    Eval,
    /// Run an app (`apps.<system>.<name>`, falling back to `packages`).
    Run,
    /// Enter a development shell (`devShells.<system>.<name>`, falling back
    /// to `packages`).
    Develop,
    /// Build a NixOS system (`nixosConfigurations.<name>`, no system
    /// segment: the configuration itself fixes the platform).
    NixosRebuild,
    /// Load a flake into a REPL; performs no expansion at all.
    Repl,
}

impl CommandKind {
    /// Every command kind, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Build,
        Self::Eval,
        Self::Run,
        Self::Develop,
        Self::NixosRebuild,
        Self::Repl,
    ];

    /// The canonical top-level output segment, or `None` for Repl.
    #[must_use]
    pub const fn output_prefix(self) -> Option<&'static str> {
        match self {
            Self::Build | Self::Eval => Some("packages"),
            Self::Run => Some("apps"),
            Self::Develop => Some("devShells"),
            Self::NixosRebuild => Some("nixosConfigurations"),
            Self::Repl => None,
        }
    }

    /// The fallback top-level segment tried when the primary attribute is
    /// absent, if this kind has one.
    #[must_use]
    pub const fn fallback_prefix(self) -> Option<&'static str> {
        match self {
            Self::Run | Self::Develop => Some("packages"),
            _ => None,
        }
    }

    /// Whether the expanded path selects per-platform (system as second
    /// segment).
    #[must_use]
    pub const fn is_per_system(self) -> bool {
        matches!(self, Self::Build | Self::Eval | Self::Run | Self::Develop)
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Build => "build",
            Self::Eval => "eval",
            Self::Run => "run",
            Self::Develop => "develop",
            Self::NixosRebuild => "nixos-rebuild",
            Self::Repl => "repl",
        };
        write!(f, "{name}")
    }
}

impl FromStr for CommandKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "build" => Ok(Self::Build),
            "eval" => Ok(Self::Eval),
            "run" => Ok(Self::Run),
            "develop" => Ok(Self::Develop),
            "nixos-rebuild" => Ok(Self::NixosRebuild),
            "repl" => Ok(Self::Repl),
            _ => Err(format!("unknown command kind: {s}")),
        }
    }
}
