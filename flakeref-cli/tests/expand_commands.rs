//! Integration tests for the expansion subcommands.

mod common;

use common::{TestEnv, REGISTRY_JSON};
use predicates::prelude::*;

#[test]
fn test_build_expands_package() {
    let env = TestEnv::new();
    env.command()
        .args(["--system", "x86_64-linux", "build", ".#hello"])
        .assert()
        .success()
        .stdout(predicate::str::contains("primary:  packages.x86_64-linux.hello"));
}

#[test]
fn test_build_empty_path_defaults() {
    let env = TestEnv::new();
    env.command()
        .args(["--system", "x86_64-linux", "build", "."])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "primary:  packages.x86_64-linux.default",
        ));
}

#[test]
fn test_run_has_fallback() {
    let env = TestEnv::new();
    env.command()
        .args([
            "--system",
            "x86_64-linux",
            "--format",
            "nix-args",
            "run",
            ".#hello",
        ])
        .assert()
        .success()
        .stdout(predicate::str::diff(
            ".#apps.x86_64-linux.hello\n.#packages.x86_64-linux.hello\n",
        ));
}

#[test]
fn test_develop_falls_back_to_packages() {
    let env = TestEnv::new();
    env.command()
        .args(["--system", "aarch64-darwin", "develop", "."])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "primary:  devShells.aarch64-darwin.default",
        ))
        .stdout(predicate::str::contains(
            "fallback: packages.aarch64-darwin.default",
        ));
}

#[test]
fn test_nixos_rebuild_skips_system() {
    let env = TestEnv::new();
    env.command()
        .args(["nixos-rebuild", ".#myhost"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "primary:  nixosConfigurations.myhost",
        ));
}

#[test]
fn test_repl_is_identity() {
    let env = TestEnv::new();
    env.command()
        .args(["--format", "nix-args", "repl", ".#lib.strings"])
        .assert()
        .success()
        .stdout(predicate::str::diff(".#lib.strings\n"));
}

#[test]
fn test_repl_empty_path_stays_empty() {
    let env = TestEnv::new();
    env.command()
        .args(["--format", "nix-args", "repl", "."])
        .assert()
        .success()
        .stdout(predicate::str::diff(".\n"));
}

#[test]
fn test_missing_system_exit_code() {
    let env = TestEnv::new();
    env.command()
        .args(["build", ".#hello"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("system"));
}

#[test]
fn test_system_from_config_file() {
    let env = TestEnv::new();
    env.write_user_config("default_system: x86_64-linux\n");
    env.command()
        .args(["build", ".#hello"])
        .assert()
        .success()
        .stdout(predicate::str::contains("packages.x86_64-linux.hello"));
}

#[test]
fn test_project_config_overrides_user_config() {
    let env = TestEnv::new();
    env.write_user_config("default_system: x86_64-linux\n");
    env.write_project_config("default_system: aarch64-linux\n");
    env.command()
        .args(["build", ".#hello"])
        .assert()
        .success()
        .stdout(predicate::str::contains("packages.aarch64-linux.hello"));
}

#[test]
fn test_system_flag_overrides_config() {
    let env = TestEnv::new();
    env.write_user_config("default_system: x86_64-linux\n");
    env.command()
        .args(["--system", "riscv64-linux", "build", ".#hello"])
        .assert()
        .success()
        .stdout(predicate::str::contains("packages.riscv64-linux.hello"));
}

#[test]
fn test_malformed_reference_exit_code() {
    let env = TestEnv::new();
    env.command()
        .args(["--system", "x86_64-linux", "build", ".#a#b"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("malformed"));
}

#[test]
fn test_indirect_resolved_through_registry() {
    let env = TestEnv::new();
    let registry = env.write_registry(REGISTRY_JSON);
    env.command()
        .arg("--registry")
        .arg(&registry)
        .args(["--system", "x86_64-linux", "build", "nixpkgs#hello"])
        .assert()
        .success()
        .stdout(predicate::str::contains("locator:  github:NixOS/nixpkgs"));
}

#[test]
fn test_indirect_without_registry_passes_through() {
    let env = TestEnv::new();
    env.command()
        .args(["--system", "x86_64-linux", "build", "nixpkgs#hello"])
        .assert()
        .success()
        .stdout(predicate::str::contains("locator:  nixpkgs"));
}

#[test]
fn test_unknown_registry_entry_exit_code() {
    let env = TestEnv::new();
    let registry = env.write_registry(REGISTRY_JSON);
    env.command()
        .arg("--registry")
        .arg(&registry)
        .args(["--system", "x86_64-linux", "build", "no-such-flake#hello"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("no-such-flake"));
}

#[test]
fn test_json_format() {
    let env = TestEnv::new();
    let output = env
        .command()
        .args([
            "--system",
            "x86_64-linux",
            "--format",
            "json",
            "run",
            "github:NixOS/nixpkgs#cowsay",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value =
        serde_json::from_slice(&output).expect("stdout should be valid JSON");
    assert_eq!(value["locator"], "github:NixOS/nixpkgs");
    assert_eq!(value["primary"], "apps.x86_64-linux.cowsay");
    assert_eq!(value["fallback"], "packages.x86_64-linux.cowsay");
}

#[test]
fn test_quoted_segment_survives_expansion() {
    let env = TestEnv::new();
    env.command()
        .args([
            "--system",
            "x86_64-linux",
            "--format",
            "nix-args",
            "build",
            ".#\"with.dot\"",
        ])
        .assert()
        .success()
        .stdout(predicate::str::diff(
            ".#packages.x86_64-linux.\"with.dot\"\n",
        ));
}
