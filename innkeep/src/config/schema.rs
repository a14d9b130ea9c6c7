//! Configuration schema definitions.
//!
//! This module defines the configuration structure for innkeep: limits used
//! when reading operator input, the listing format, and an optional initial
//! room inventory.

use serde::{Deserialize, Serialize};

use crate::room::CostPerNight;

/// Default ceiling for nightly costs.
pub const DEFAULT_MAX_COST_PER_NIGHT: f64 = CostPerNight::MAX;

/// Default upper bound for room ids typed at prompts.
pub const DEFAULT_MAX_ROOM_ID: u32 = 1_000_000;

/// Complete configuration structure.
///
/// Every field is optional so that partial files can be layered; use the
/// accessor methods to read a value with its default applied.
///
/// # Examples
///
/// ```
/// use innkeep::config::{Config, OutputFormat};
///
/// let config = Config {
///     hotel_name: Some("Seaside Inn".to_string()),
///     output_format: Some(OutputFormat::Json),
///     ..Default::default()
/// };
/// assert_eq!(config.output_format(), OutputFormat::Json);
/// assert_eq!(config.max_room_id(), 1_000_000);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Name shown in the session header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotel_name: Option<String>,

    /// Largest nightly cost accepted when adding a room.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_cost_per_night: Option<f64>,

    /// Largest room id accepted at booking prompts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_room_id: Option<u32>,

    /// Output format for room and client listings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_format: Option<OutputFormat>,

    /// Rooms registered when a session starts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rooms: Option<Vec<RoomSeed>>,
}

impl Config {
    /// Returns the nightly cost ceiling, defaulting to 1,000,000.
    #[must_use]
    pub fn max_cost_per_night(&self) -> f64 {
        self.max_cost_per_night
            .unwrap_or(DEFAULT_MAX_COST_PER_NIGHT)
    }

    /// Returns the room id bound for prompts, defaulting to 1,000,000.
    #[must_use]
    pub fn max_room_id(&self) -> u32 {
        self.max_room_id.unwrap_or(DEFAULT_MAX_ROOM_ID)
    }

    /// Returns the listing format, defaulting to a table.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }

    /// Fills every unset scalar field with its default.
    ///
    /// Used when printing the effective configuration.
    #[must_use]
    pub fn with_defaults(mut self) -> Self {
        self.max_cost_per_night = Some(self.max_cost_per_night());
        self.max_room_id = Some(self.max_room_id());
        self.output_format = Some(self.output_format());
        self
    }
}

/// A room to register at startup.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RoomSeed {
    /// Display label, such as `101`.
    pub number: String,

    /// Nightly cost.
    pub cost_per_night: f64,
}

/// Output format for listings.
///
/// # Examples
///
/// ```
/// use innkeep::config::OutputFormat;
///
/// let format = OutputFormat::Json;
/// assert_eq!(format.to_string(), "json");
/// ```
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON output format.
    Json,
    /// CSV output format.
    Csv,
    /// TSV output format.
    Tsv,
}

impl OutputFormat {
    /// Parses a format name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error message if the name is not a known format.
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "tsv" => Ok(Self::Tsv),
            _ => Err(format!("unknown output format: {s}")),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Tsv => write!(f, "tsv"),
        }
    }
}
