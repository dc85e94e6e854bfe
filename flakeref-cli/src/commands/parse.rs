//! Command to split an installable into locator and attribute path.

use crate::error::CliError;
use crate::utils::{load_configuration, output_format, GlobalOptions};
use clap::Args;
use flakeref::{join_installable, parse_installable, OutputFormat};
use serde_json::json;

/// Show the locator / attribute-path split of an installable.
#[derive(Args)]
pub struct ParseCommand {
    /// The installable to parse
    #[arg(value_name = "INSTALLABLE")]
    pub installable: String,
}

impl ParseCommand {
    /// Execute the parse command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let (locator, path) = parse_installable(&self.installable)?;

        match output_format(global, &config)? {
            OutputFormat::Human => {
                println!("locator:  {locator}");
                println!("path:     {path}");
            }
            OutputFormat::Json => {
                let value = json!({
                    "locator": locator.to_string(),
                    "path": path.to_string(),
                });
                let rendered = serde_json::to_string_pretty(&value)
                    .map_err(|e| CliError::Io(e.into()))?;
                println!("{rendered}");
            }
            OutputFormat::NixArgs => {
                println!("{}", join_installable(&locator, &path));
            }
        }
        Ok(())
    }
}
