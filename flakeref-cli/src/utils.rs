//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI
//! commands: configuration loading, system and registry resolution, and
//! output format selection.

use crate::error::CliError;
use std::path::PathBuf;

use flakeref::config::ConfigBuilder;
use flakeref::{Config, OutputFormat, Registry, System};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// System for per-platform expansion.
    pub system: Option<String>,

    /// Registry file path.
    pub registry: Option<PathBuf>,

    /// Output format name.
    pub format: Option<String>,

    /// Override the user configuration directory.
    pub config_dir: Option<PathBuf>,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables
/// 2. Project `flakeref.yaml`
/// 3. User config (`~/.flakeref/config.yaml`, or `--config-dir`)
/// 4. Built-in defaults
///
/// Command-line flags are applied on top by the accessors below.
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(dir) = &global.config_dir {
        builder = builder.with_user_config_dir(dir);
    }
    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// Resolve the system for expansion: `--system` flag first, then
/// configuration.
pub fn resolve_system(
    global: &GlobalOptions,
    config: &Config,
) -> Result<Option<System>, CliError> {
    match &global.system {
        Some(raw) => {
            let system = raw
                .parse()
                .map_err(|e| CliError::InvalidArguments(format!("{e}")))?;
            Ok(Some(system))
        }
        None => Ok(config.default_system.clone()),
    }
}

/// Load the registry named by `--registry` or the configuration, if any.
pub fn load_registry(
    global: &GlobalOptions,
    config: &Config,
) -> Result<Option<Registry>, CliError> {
    let path = global
        .registry
        .clone()
        .or_else(|| config.registry_path.clone());

    match path {
        Some(path) => Ok(Some(Registry::load(&path)?)),
        None => Ok(None),
    }
}

/// Select the output format: `--format` flag first, then configuration,
/// then human-readable.
pub fn output_format(global: &GlobalOptions, config: &Config) -> Result<OutputFormat, CliError> {
    match &global.format {
        Some(raw) => raw.parse().map_err(CliError::InvalidArguments),
        None => Ok(config.output_format.unwrap_or(OutputFormat::Human)),
    }
}
