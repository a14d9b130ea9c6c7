//! Configuration validation.
//!
//! Checks that limits are usable and that seeded rooms would be accepted by
//! the hotel.

use crate::config::schema::{Config, RoomSeed};
use crate::error::{Error, Result};
use crate::room::{CostPerNight, RoomLabel};

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use innkeep::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
///
/// let bad = Config { max_room_id: Some(0), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref name) = config.hotel_name {
            if name.trim().is_empty() {
                return Err(Error::Validation {
                    field: "hotel_name".into(),
                    message: "hotel name must be non-empty".into(),
                });
            }
        }

        if let Some(max_cost) = config.max_cost_per_night {
            Self::validate_max_cost(max_cost)?;
        }

        if config.max_room_id == Some(0) {
            return Err(Error::Validation {
                field: "max_room_id".into(),
                message: "max_room_id must be greater than 0".into(),
            });
        }

        if let Some(ref rooms) = config.rooms {
            Self::validate_rooms(rooms, config.max_cost_per_night())?;
            Self::validate_room_capacity(rooms.len(), config.max_room_id())?;
        }

        Ok(())
    }

    fn validate_max_cost(max_cost: f64) -> Result<()> {
        if !max_cost.is_finite() || max_cost <= 0.0 {
            return Err(Error::Validation {
                field: "max_cost_per_night".into(),
                message: "max_cost_per_night must be a positive number".into(),
            });
        }
        if max_cost > CostPerNight::MAX {
            return Err(Error::Validation {
                field: "max_cost_per_night".into(),
                message: format!(
                    "max_cost_per_night must not exceed {:.2}",
                    CostPerNight::MAX
                ),
            });
        }
        Ok(())
    }

    /// Seeded rooms take ids `1..=len`, so every one of them must stay
    /// bookable through the room id prompt.
    fn validate_room_capacity(seeded: usize, max_room_id: u32) -> Result<()> {
        if !u32::try_from(seeded).is_ok_and(|count| count <= max_room_id) {
            return Err(Error::Validation {
                field: "max_room_id".into(),
                message: format!(
                    "max_room_id {max_room_id} is below the {seeded} seeded rooms"
                ),
            });
        }
        Ok(())
    }

    fn validate_rooms(rooms: &[RoomSeed], max_cost: f64) -> Result<()> {
        for (index, seed) in rooms.iter().enumerate() {
            RoomLabel::new(&seed.number).map_err(|e| Error::Validation {
                field: format!("rooms[{index}].number"),
                message: e.message,
            })?;
            CostPerNight::with_ceiling(seed.cost_per_night, max_cost).map_err(|e| {
                Error::Validation {
                    field: format!("rooms[{index}].cost_per_night"),
                    message: e.message,
                }
            })?;
        }
        Ok(())
    }
}
