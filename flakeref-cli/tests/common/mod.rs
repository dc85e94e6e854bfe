//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers for common patterns
//! - Registry and configuration fixtures

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A user-registry fixture with a github and a path target.
pub const REGISTRY_JSON: &str = r#"{
    "version": 2,
    "flakes": [
        {
            "from": { "type": "indirect", "id": "nixpkgs" },
            "to": { "type": "github", "owner": "NixOS", "repo": "nixpkgs" }
        },
        {
            "from": { "type": "indirect", "id": "dotfiles" },
            "to": { "type": "path", "path": "/home/user/dotfiles" }
        }
    ]
}"#;

/// Test environment with isolated configuration.
///
/// Commands run from a temporary directory with `--config-dir` pointed
/// inside it and all `FLAKEREF_*` variables cleared, so neither the real
/// user config nor a project `flakeref.yaml` above the workspace can
/// leak in.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the user configuration directory
    pub config_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let config_dir = temp_path.join("config");
        fs::create_dir_all(&config_dir).expect("Failed to create config dir");

        Self {
            temp_dir,
            temp_path,
            config_dir,
        }
    }

    /// Get a bare command builder without pre-configured flags.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("flakeref").expect("Failed to find flakeref binary");
        cmd.env_remove("FLAKEREF_SYSTEM")
            .env_remove("FLAKEREF_REGISTRY")
            .env_remove("FLAKEREF_OUTPUT_FORMAT")
            .env_remove("FLAKEREF_CONFIG_DIR")
            .env_remove("FLAKEREF_LOG_MODE");
        cmd
    }

    /// Get a command builder with isolated configuration pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.current_dir(&self.temp_path)
            .arg("--config-dir")
            .arg(&self.config_dir);
        cmd
    }

    /// Write a registry fixture and return its path.
    pub fn write_registry(&self, json: &str) -> PathBuf {
        let path = self.temp_path.join("registry.json");
        fs::write(&path, json).expect("Failed to write registry");
        path
    }

    /// Write the user configuration file.
    pub fn write_user_config(&self, yaml: &str) {
        fs::write(self.config_dir.join("config.yaml"), yaml)
            .expect("Failed to write user config");
    }

    /// Write a project `flakeref.yaml` in the working directory.
    pub fn write_project_config(&self, yaml: &str) {
        fs::write(self.temp_path.join("flakeref.yaml"), yaml)
            .expect("Failed to write project config");
    }
}
