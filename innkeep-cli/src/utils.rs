//! Utility functions for CLI operations.
//!
//! Global options shared by every command, configuration loading and path
//! display helpers.

use crate::error::CliError;
use innkeep::config::{Config, ConfigBuilder, OutputFormat};
use std::path::{Path, PathBuf};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Directory holding the user `config.yaml`.
    pub config_dir: Option<PathBuf>,

    /// Listing format chosen on the command line.
    pub format: Option<OutputFormat>,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration files
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new().with_config_dir(global.config_dir.as_deref());

    if global.format.is_some() {
        builder = builder.with_config(Config {
            output_format: global.format,
            ..Config::default()
        });
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// Install the stderr logger for the selected verbosity.
///
/// A logger that cannot be installed is reported on stderr and the command
/// carries on without logging. Returns whether installation succeeded.
pub fn install_logger(verbose: bool, quiet: bool) -> bool {
    match innkeep::init_logger(verbose, quiet).install() {
        Ok(()) => true,
        Err(e) => {
            eprintln!("Warning: logging is disabled: {e}");
            false
        }
    }
}

/// Shorten a path for display.
///
/// If the path is within the home directory, show it as ~/...
/// Otherwise, show the full path.
pub fn shorten_path(path: &Path) -> String {
    if let Some(home) = home::home_dir() {
        if let Ok(relative) = path.strip_prefix(&home) {
            return format!("~/{}", relative.display());
        }
    }
    path.display().to_string()
}
