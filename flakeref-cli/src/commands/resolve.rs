//! Command to resolve an indirect reference through the registry.

use crate::error::CliError;
use crate::utils::{load_configuration, load_registry, output_format, GlobalOptions};
use clap::Args;
use flakeref::{OutputFormat, Resolve};
use serde_json::json;

/// Resolve a registry name to its concrete locator.
#[derive(Args)]
pub struct ResolveCommand {
    /// The registry entry name (e.g. `nixpkgs`)
    #[arg(value_name = "NAME")]
    pub name: String,
}

impl ResolveCommand {
    /// Execute the resolve command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let registry = load_registry(global, &config)?.ok_or(CliError::NoRegistry)?;

        let locator = registry.resolve(&self.name)?;

        match output_format(global, &config)? {
            OutputFormat::Json => {
                let value = json!({
                    "name": self.name,
                    "locator": locator.to_string(),
                });
                let rendered = serde_json::to_string_pretty(&value)
                    .map_err(|e| CliError::Io(e.into()))?;
                println!("{rendered}");
            }
            OutputFormat::Human | OutputFormat::NixArgs => {
                println!("{locator}");
            }
        }
        Ok(())
    }
}
