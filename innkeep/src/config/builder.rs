//! Configuration builder.
//!
//! Ties together file loading, environment overrides, programmatic
//! overrides and validation.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;

/// Builds the effective configuration from all sources.
///
/// # Examples
///
/// ```
/// use innkeep::config::{Config, ConfigBuilder};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config { max_room_id: Some(50), ..Default::default() })
///     .build()
///     .unwrap();
/// assert_eq!(config.max_room_id(), 50);
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    config_dir: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Vec<Config>,
}

impl ConfigBuilder {
    /// Creates a builder that reads files and environment variables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the directory project configuration discovery starts from
    /// (default: the current directory).
    #[must_use]
    pub fn with_working_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    /// Sets the directory holding the user `config.yaml`
    /// (default: `~/.innkeep`).
    #[must_use]
    pub fn with_config_dir(mut self, dir: Option<&Path>) -> Self {
        self.config_dir = dir.map(Path::to_path_buf);
        self
    }

    /// Skips configuration files.
    #[must_use]
    pub const fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Skips `INNKEEP_*` environment variables.
    #[must_use]
    pub const fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Adds a programmatic override with the highest precedence.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides.push(config);
        self
    }

    /// Loads, merges and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or parsed, an environment
    /// variable is malformed, or the merged result fails validation.
    pub fn build(self) -> Result<Config> {
        let mut config = if self.skip_files {
            Config::default()
        } else {
            let working_dir = match self.working_dir {
                Some(dir) => dir,
                None => std::env::current_dir()?,
            };
            let sources = ConfigLoader::load_all(&working_dir, self.config_dir.as_deref())?;
            ConfigMerger::merge(sources)
        };

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        for override_config in &self.overrides {
            ConfigMerger::merge_into(&mut config, override_config);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}
