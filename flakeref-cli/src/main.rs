//! Main entry point for the flakeref CLI.
//!
//! This is the command-line interface for the flakeref expansion library.
//! It provides commands for normalizing installable references:
//! - `build` / `eval` / `run` / `develop` / `nixos-rebuild` / `repl`:
//!   expand an installable for a command kind
//! - `parse`: split an installable into locator and attribute path
//! - `resolve`: resolve an indirect reference through the registry

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use flakeref::CommandKind;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        system: cli.system,
        registry: cli.registry,
        format: cli.format,
        config_dir: cli.config_dir,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Build(cmd) => cmd.execute(CommandKind::Build, &global),
        cli::Command::Eval(cmd) => cmd.execute(CommandKind::Eval, &global),
        cli::Command::Run(cmd) => cmd.execute(CommandKind::Run, &global),
        cli::Command::Develop(cmd) => cmd.execute(CommandKind::Develop, &global),
        cli::Command::NixosRebuild(cmd) => cmd.execute(CommandKind::NixosRebuild, &global),
        cli::Command::Repl(cmd) => cmd.execute(CommandKind::Repl, &global),
        cli::Command::Parse(cmd) => cmd.execute(&global),
        cli::Command::Resolve(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
