//! Integration tests for registry loading and indirect resolution.

use std::fs;

use flakeref::config::ConfigBuilder;
use flakeref::{CommandKind, Installable, Registry, Resolve, System};

const REGISTRY_JSON: &str = r#"{
    "version": 2,
    "flakes": [
        {
            "from": { "type": "indirect", "id": "nixpkgs" },
            "to": { "type": "github", "owner": "NixOS", "repo": "nixpkgs", "ref": "nixos-unstable" }
        },
        {
            "from": { "type": "indirect", "id": "home-manager" },
            "to": { "type": "github", "owner": "nix-community", "repo": "home-manager" }
        },
        {
            "from": { "type": "indirect", "id": "dotfiles" },
            "to": { "type": "path", "path": "/home/user/dotfiles" }
        }
    ]
}"#;

fn write_registry(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("registry.json");
    fs::write(&path, REGISTRY_JSON).unwrap();
    path
}

#[test]
fn test_load_and_resolve_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let registry = Registry::load(&write_registry(&dir)).unwrap();
    assert_eq!(registry.len(), 3);

    let system: System = "x86_64-linux".parse().unwrap();
    let installable = Installable::resolve(
        "home-manager#hm-session",
        CommandKind::Build,
        Some(&system),
        Some(&registry),
    )
    .unwrap();

    assert_eq!(
        installable.locator().to_string(),
        "github:nix-community/home-manager"
    );
    assert_eq!(
        installable.expansion().primary().to_string(),
        "packages.x86_64-linux.hm-session"
    );
}

#[test]
fn test_unknown_entry_is_terminal() {
    let dir = tempfile::tempdir().unwrap();
    let registry = Registry::load(&write_registry(&dir)).unwrap();

    let err = registry.resolve("fleet").unwrap_err();
    assert!(err.is_not_found());
    assert!(err.to_string().contains("fleet"));
}

#[test]
fn test_registry_path_flows_through_config() {
    let dir = tempfile::tempdir().unwrap();
    let registry_path = write_registry(&dir);

    fs::write(
        dir.path().join("flakeref.yaml"),
        format!("registry_path: {}\n", registry_path.display()),
    )
    .unwrap();

    let config = ConfigBuilder::new()
        .with_working_dir(dir.path())
        .skip_env()
        .build()
        .unwrap();

    let registry = Registry::load(config.registry_path.as_deref().unwrap()).unwrap();
    assert!(registry.resolve("dotfiles").is_ok());
}
