//! Configuration system for flakeref.
//!
//! Hierarchical configuration with support for:
//! - YAML configuration files (user config and project `flakeref.yaml`)
//! - Environment variable overrides (`FLAKEREF_*`)
//! - Programmatic configuration via builder pattern
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following
//! precedence (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`FLAKEREF_*`)
//! 3. Project config (`flakeref.yaml`, nearest ancestor directory)
//! 4. User config (`~/.flakeref/config.yaml`)
//! 5. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use flakeref::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! if let Some(system) = &config.default_system {
//!     println!("default system: {system}");
//! }
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::Config;
