//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use innkeep::config::{Config, ConfigMerger};
///
/// let low = Config { hotel_name: Some("low".to_string()), ..Default::default() };
/// let high = Config { hotel_name: Some("high".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.hotel_name, Some("high".to_string()));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// # Merging Rules
    ///
    /// - Scalar fields: source overwrites if Some
    /// - Rooms: accumulated, lower precedence first
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.hotel_name.is_some() {
            target.hotel_name.clone_from(&source.hotel_name);
        }

        if source.max_cost_per_night.is_some() {
            target.max_cost_per_night = source.max_cost_per_night;
        }

        if source.max_room_id.is_some() {
            target.max_room_id = source.max_room_id;
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }

        if let Some(ref rooms) = source.rooms {
            target
                .rooms
                .get_or_insert_with(Vec::new)
                .extend(rooms.iter().cloned());
        }
    }
}
