//! Configuration file discovery and loading.
//!
//! Configuration lives in YAML files: a user config at
//! `~/.flakeref/config.yaml` and per-project `flakeref.yaml` files found
//! by walking up from the working directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Configuration source with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration from files on disk.
///
/// # Examples
///
/// ```no_run
/// use flakeref::config::ConfigLoader;
/// use std::path::Path;
///
/// let sources = ConfigLoader::load_all(Path::new("."), None).unwrap();
/// println!("found {} configuration sources", sources.len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Discover and load all configuration files.
    ///
    /// Searches for:
    /// 1. User config at `~/.flakeref/config.yaml` (precedence 1)
    /// 2. The nearest `flakeref.yaml` walking up from `working_dir`
    ///    (precedence 2)
    ///
    /// The `user_config_dir` parameter overrides where the user config is
    /// loaded from.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file exists but cannot be read
    /// or parsed.
    pub fn load_all(working_dir: &Path, user_config_dir: Option<&Path>) -> Result<Vec<ConfigSource>> {
        let mut sources = Vec::new();

        if let Some(user_config) = Self::load_user_config(user_config_dir)? {
            sources.push(user_config);
        }

        if let Some(project_config) = Self::discover_project_config(working_dir)? {
            sources.push(project_config);
        }

        sources.sort_by_key(|s| s.precedence);
        Ok(sources)
    }

    /// Load the user configuration file, if it exists.
    fn load_user_config(user_config_dir: Option<&Path>) -> Result<Option<ConfigSource>> {
        let config_path = match user_config_dir {
            Some(dir) => dir.join("config.yaml"),
            None => match home::home_dir() {
                Some(home) => home.join(".flakeref").join("config.yaml"),
                None => return Ok(None),
            },
        };

        if !config_path.exists() {
            return Ok(None);
        }

        let config = Self::load_file(&config_path)?;
        Ok(Some(ConfigSource {
            path: config_path,
            precedence: 1,
            config,
        }))
    }

    /// Find the nearest `flakeref.yaml` walking up from `start_dir`.
    ///
    /// Stops at the first directory containing one.
    ///
    /// # Errors
    ///
    /// Returns an error if a discovered file cannot be read or parsed.
    pub fn discover_project_config(start_dir: &Path) -> Result<Option<ConfigSource>> {
        let mut current = start_dir.to_path_buf();

        loop {
            let candidate = current.join("flakeref.yaml");
            if candidate.exists() {
                let config = Self::load_file(&candidate)?;
                return Ok(Some(ConfigSource {
                    path: candidate,
                    precedence: 2,
                    config,
                }));
            }

            if !current.pop() {
                return Ok(None);
            }
        }
    }

    /// Load and parse a single YAML configuration file.
    fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| {
            Error::Validation {
                field: path.display().to_string(),
                message: format!("cannot read configuration file: {e}"),
            }
        })?;
        let config: Config = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discover_finds_nearest_project_config() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        fs::write(
            dir.path().join("flakeref.yaml"),
            "default_system: x86_64-linux\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("a").join("flakeref.yaml"),
            "default_system: aarch64-darwin\n",
        )
        .unwrap();

        let source = ConfigLoader::discover_project_config(&nested)
            .unwrap()
            .unwrap();
        // The nearest file (in a/) wins; the walk stops there.
        assert_eq!(
            source.config.default_system.unwrap().as_str(),
            "aarch64-darwin"
        );
        assert_eq!(source.precedence, 2);
    }

    #[test]
    fn test_discover_returns_none_without_config() {
        let dir = tempfile::tempdir().unwrap();
        let found = ConfigLoader::discover_project_config(dir.path()).unwrap();
        assert!(found.is_none());
    }

    #[test]
    fn test_load_all_orders_by_precedence() {
        let dir = tempfile::tempdir().unwrap();
        let user_dir = dir.path().join("user");
        let project_dir = dir.path().join("project");
        fs::create_dir_all(&user_dir).unwrap();
        fs::create_dir_all(&project_dir).unwrap();

        fs::write(user_dir.join("config.yaml"), "output_format: json\n").unwrap();
        fs::write(
            project_dir.join("flakeref.yaml"),
            "output_format: human\n",
        )
        .unwrap();

        let sources = ConfigLoader::load_all(&project_dir, Some(&user_dir)).unwrap();
        assert_eq!(sources.len(), 2);
        assert!(sources[0].precedence < sources[1].precedence);
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("flakeref.yaml"), "default_system: [1, 2]\n").unwrap();
        assert!(ConfigLoader::discover_project_config(dir.path()).is_err());
    }
}
