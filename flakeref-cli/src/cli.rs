//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{CompletionsCommand, ExpandCommand, ParseCommand, ResolveCommand};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for expanding Nix flake installable references.
#[derive(Parser)]
#[command(name = "flakeref")]
#[command(version, about = "Expand Nix flake installable references", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// System to expand per-platform attributes for (e.g. x86_64-linux)
    #[arg(long, value_name = "SYSTEM", global = true, env = "FLAKEREF_SYSTEM")]
    pub system: Option<String>,

    /// Path to a user-registry JSON file for indirect references
    #[arg(long, value_name = "PATH", global = true, env = "FLAKEREF_REGISTRY")]
    pub registry: Option<PathBuf>,

    /// Output format (human, json, nix-args)
    #[arg(long, value_name = "FORMAT", global = true, env = "FLAKEREF_OUTPUT_FORMAT")]
    pub format: Option<String>,

    /// Override the user configuration directory
    #[arg(long, value_name = "PATH", global = true, env = "FLAKEREF_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Expand an installable for `build` (packages.<system>.<name>)
    Build(ExpandCommand),

    /// Expand an installable for `eval` (packages.<system>.<name>)
    Eval(ExpandCommand),

    /// Expand an installable for `run` (apps, falling back to packages)
    Run(ExpandCommand),

    /// Expand an installable for `develop` (devShells, falling back to packages)
    Develop(ExpandCommand),

    /// Expand an installable for `nixos-rebuild` (nixosConfigurations)
    #[command(name = "nixos-rebuild")]
    NixosRebuild(ExpandCommand),

    /// Show an installable as a REPL would load it (no expansion)
    Repl(ExpandCommand),

    /// Split an installable into its locator and attribute path
    Parse(ParseCommand),

    /// Resolve an indirect reference through the registry
    Resolve(ResolveCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
