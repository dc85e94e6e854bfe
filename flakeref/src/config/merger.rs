//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use flakeref::config::{Config, ConfigMerger};
///
/// let low = Config {
///     default_system: Some("x86_64-linux".parse().unwrap()),
///     ..Default::default()
/// };
/// let high = Config {
///     default_system: Some("aarch64-darwin".parse().unwrap()),
///     ..Default::default()
/// };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.default_system.unwrap().as_str(), "aarch64-darwin");
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into a final config.
    ///
    /// Sources must be provided in order from lowest to highest
    /// precedence; later sources overwrite set fields of earlier ones.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge source config into target (source overwrites target where
    /// set).
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.default_system.is_some() {
            target.default_system.clone_from(&source.default_system);
        }
        if source.registry_path.is_some() {
            target.registry_path.clone_from(&source.registry_path);
        }
        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }
    }
}
