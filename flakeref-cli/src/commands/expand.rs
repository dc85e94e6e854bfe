//! Shared implementation for the expansion subcommands.
//!
//! `build`, `eval`, `run`, `develop`, `nixos-rebuild`, and `repl` all
//! take one installable and differ only in the command kind they expand
//! for.

use crate::error::CliError;
use crate::utils::{
    load_configuration, load_registry, output_format, resolve_system, GlobalOptions,
};
use clap::Args;
use flakeref::{init_logger, CommandKind, Installable, Resolve};

/// Expand an installable for one command kind.
#[derive(Args)]
pub struct ExpandCommand {
    /// The installable to expand (e.g. `.#foo`, `nixpkgs#hello`)
    #[arg(value_name = "INSTALLABLE")]
    pub installable: String,
}

impl ExpandCommand {
    /// Execute the expansion for `kind`.
    pub fn execute(self, kind: CommandKind, global: &GlobalOptions) -> Result<(), CliError> {
        let logger = init_logger(global.verbose, global.quiet);
        let config = load_configuration(global)?;

        let system = resolve_system(global, &config)?;
        if kind.is_per_system() && system.is_none() {
            return Err(CliError::InvalidArguments(format!(
                "command '{kind}' requires a system (use --system or set default_system)"
            )));
        }

        let registry = load_registry(global, &config)?;
        let registry_ref: Option<&dyn Resolve> =
            registry.as_ref().map(|r| r as &dyn Resolve);

        let installable =
            Installable::resolve(&self.installable, kind, system.as_ref(), registry_ref)?;
        logger.info(&format!(
            "expanded for {kind}: {}",
            installable.expansion().description()
        ));

        let formatter = output_format(global, &config)?.create_formatter();
        println!("{}", formatter.format(&installable)?);
        Ok(())
    }
}
