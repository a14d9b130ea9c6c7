//! Configuration system for innkeep.
//!
//! This module provides layered configuration with support for:
//! - YAML configuration files (user config and project `innkeep.yaml`)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation of the merged result
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`INNKEEP_*`)
//! 3. Project config (`innkeep.yaml`, nearest ancestor directory)
//! 4. User config (`~/.innkeep/config.yaml`)
//! 5. Built-in defaults
//!
//! Seeded `rooms` accumulate across sources instead of replacing each other.
//!
//! # Examples
//!
//! ```
//! use innkeep::config::{Config, ConfigBuilder, RoomSeed};
//!
//! let custom = Config {
//!     hotel_name: Some("Seaside Inn".to_string()),
//!     rooms: Some(vec![RoomSeed { number: "101".to_string(), cost_per_night: 50.0 }]),
//!     ..Default::default()
//! };
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(custom)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.hotel_name.as_deref(), Some("Seaside Inn"));
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(test)]
mod proptests;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{default_config_dir, ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, OutputFormat, RoomSeed};
pub use validator::ConfigValidator;
