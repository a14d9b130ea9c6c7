//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `INNKEEP_*` environment variables that
//! override configuration file values.

use crate::config::schema::{Config, OutputFormat};
use crate::error::{Error, Result};
use std::env;

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use innkeep::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Reads `INNKEEP_HOTEL_NAME`, `INNKEEP_MAX_COST_PER_NIGHT`,
    /// `INNKEEP_MAX_ROOM_ID` and `INNKEEP_OUTPUT_FORMAT`.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., a non-numeric cost or an unknown format).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(name) = env::var("INNKEEP_HOTEL_NAME") {
            config.hotel_name = Some(name);
        }

        if let Ok(value) = env::var("INNKEEP_MAX_COST_PER_NIGHT") {
            config.max_cost_per_night =
                Some(value.trim().parse().map_err(|_| Error::Validation {
                    field: "INNKEEP_MAX_COST_PER_NIGHT".into(),
                    message: format!("Must be a number, got '{value}'"),
                })?);
        }

        if let Ok(value) = env::var("INNKEEP_MAX_ROOM_ID") {
            config.max_room_id = Some(value.trim().parse().map_err(|_| Error::Validation {
                field: "INNKEEP_MAX_ROOM_ID".into(),
                message: format!("Must be a positive integer, got '{value}'"),
            })?);
        }

        if let Ok(value) = env::var("INNKEEP_OUTPUT_FORMAT") {
            config.output_format =
                Some(
                    OutputFormat::parse(value.trim()).map_err(|message| Error::Validation {
                        field: "INNKEEP_OUTPUT_FORMAT".into(),
                        message,
                    })?,
                );
        }

        Ok(())
    }
}
