//! Build script for flakeref-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("flakeref")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Expand Nix flake installable references")
        .long_about(
            "Command-line tool for splitting flake installables into locator and \
             attribute path, and expanding partial attribute paths per command kind",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("system")
                .long("system")
                .help("System to expand per-platform attributes for")
                .value_name("SYSTEM")
                .global(true)
                .env("FLAKEREF_SYSTEM"),
        )
        .arg(
            Arg::new("registry")
                .long("registry")
                .help("Path to a user-registry JSON file for indirect references")
                .value_name("PATH")
                .global(true)
                .env("FLAKEREF_REGISTRY"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format (human, json, nix-args)")
                .value_name("FORMAT")
                .global(true)
                .env("FLAKEREF_OUTPUT_FORMAT"),
        )
        .arg(
            Arg::new("config-dir")
                .long("config-dir")
                .help("Override the user configuration directory")
                .value_name("PATH")
                .global(true)
                .env("FLAKEREF_CONFIG_DIR"),
        )
        .subcommands(vec![
            Command::new("build")
                .about("Expand an installable for build")
                .long_about("Expand an installable under packages.<system>"),
            Command::new("eval")
                .about("Expand an installable for eval")
                .long_about("Expand an installable under packages.<system>"),
            Command::new("run")
                .about("Expand an installable for run")
                .long_about("Expand an installable under apps.<system>, falling back to packages"),
            Command::new("develop")
                .about("Expand an installable for develop")
                .long_about(
                    "Expand an installable under devShells.<system>, falling back to packages",
                ),
            Command::new("nixos-rebuild")
                .about("Expand an installable for nixos-rebuild")
                .long_about("Expand an installable under nixosConfigurations (no system segment)"),
            Command::new("repl")
                .about("Show an installable as a REPL would load it")
                .long_about("Print the installable unchanged; repl performs no expansion"),
            Command::new("parse")
                .about("Split an installable into locator and attribute path")
                .long_about("Show the locator / attribute-path split without expansion"),
            Command::new("resolve")
                .about("Resolve an indirect reference through the registry")
                .long_about("Look up a registry entry name and print its concrete locator"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    // Generate main flakeref.1 man page
    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("flakeref.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
