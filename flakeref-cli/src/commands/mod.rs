//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `build` / `eval` / `run` / `develop` / `nixos-rebuild` / `repl`:
//!   expand an installable for a command kind (shared [`ExpandCommand`])
//! - `parse`: split an installable into locator and attribute path
//! - `resolve`: resolve an indirect reference through the registry
//! - `completions`: generate shell completion scripts

pub mod completions;
pub mod expand;
pub mod parse;
pub mod resolve;

pub use completions::CompletionsCommand;
pub use expand::ExpandCommand;
pub use parse::ParseCommand;
pub use resolve::ResolveCommand;
