#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # flakeref
//!
//! A library for parsing and expanding Nix flake installable references.
//!
//! An installable as typed on the command line (`.#foo`, `nixpkgs#hello`,
//! `github:NixOS/nixpkgs`) is split into a flake locator and a partial
//! attribute path, and the path is expanded into the fully qualified
//! candidates a given command kind looks up (`packages.<system>.foo`,
//! `apps.<system>.hello`, ...). Everything here is a pure string/path
//! transformation; evaluation, fetching, and registry updates belong to
//! the external Nix tooling.
//!
//! ## Core Types
//!
//! - [`FlakeLocator`]: where a flake lives
//! - [`AttrPath`]: an attribute path into a flake's outputs
//! - [`CommandKind`] and [`System`]: what the path is expanded for
//! - [`Expansion`] and [`Installable`]: the expansion result
//! - [`Error`] and [`Result`]: error handling types
//!
//! ## Examples
//!
//! ```
//! use flakeref::{expand, parse_installable, CommandKind, System};
//!
//! let (locator, path) = parse_installable("nixpkgs#hello").unwrap();
//! assert_eq!(locator.to_string(), "nixpkgs");
//!
//! let system: System = "x86_64-linux".parse().unwrap();
//! let expansion = expand(&path, CommandKind::Run, Some(&system)).unwrap();
//! assert_eq!(expansion.primary().to_string(), "apps.x86_64-linux.hello");
//! ```

pub mod attrpath;
pub mod command;
pub mod config;
pub mod error;
pub mod expand;
pub mod installable;
pub mod locator;
pub mod logging;
pub mod output;
pub mod parser;
pub mod registry;
pub mod system;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types at crate root for convenience
pub use attrpath::AttrPath;
pub use command::CommandKind;
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use expand::{expand, Expansion};
pub use installable::Installable;
pub use locator::FlakeLocator;
pub use logging::{init_logger, LogLevel, Logger};
pub use output::{OutputFormat, OutputFormatter};
pub use parser::{join_installable, parse_installable};
pub use registry::{Registry, Resolve};
pub use system::System;
