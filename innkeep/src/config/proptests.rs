//! Property-based tests for configuration system.

use super::merger::ConfigMerger;
use super::schema::{Config, OutputFormat, RoomSeed};
use super::validator::ConfigValidator;
use proptest::prelude::*;

fn format_strategy() -> impl Strategy<Value = OutputFormat> {
    prop_oneof![
        Just(OutputFormat::Table),
        Just(OutputFormat::Json),
        Just(OutputFormat::Csv),
        Just(OutputFormat::Tsv),
    ]
}

fn seed_strategy() -> impl Strategy<Value = RoomSeed> {
    ("[A-Z]?[0-9]{1,4}", 1.0f64..1000.0).prop_map(|(number, cost_per_night)| RoomSeed {
        number,
        cost_per_night,
    })
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of("[A-Za-z ]{1,20}[A-Za-z]"),
        prop::option::of(1000.0f64..=1_000_000.0),
        prop::option::of(5u32..=1_000_000),
        prop::option::of(format_strategy()),
        prop::option::of(prop::collection::vec(seed_strategy(), 0..5)),
    )
        .prop_map(
            |(hotel_name, max_cost_per_night, max_room_id, output_format, rooms)| Config {
                hotel_name,
                max_cost_per_night,
                max_room_id,
                output_format,
                rooms,
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Set fields of the higher-precedence config always win
    #[test]
    fn config_merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut result = low.clone();
        ConfigMerger::merge_into(&mut result, &high);

        prop_assert_eq!(&result.hotel_name, if high.hotel_name.is_some() { &high.hotel_name } else { &low.hotel_name });
        prop_assert_eq!(result.max_room_id, high.max_room_id.or(low.max_room_id));
        prop_assert_eq!(result.max_cost_per_night, high.max_cost_per_night.or(low.max_cost_per_night));
        prop_assert_eq!(result.output_format, high.output_format.or(low.output_format));
    }

    // Seeded rooms accumulate in precedence order
    #[test]
    fn config_merge_accumulates_rooms(low in config_strategy(), high in config_strategy()) {
        let mut result = low.clone();
        ConfigMerger::merge_into(&mut result, &high);

        let expected: Vec<RoomSeed> = low.rooms.iter().flatten()
            .chain(high.rooms.iter().flatten())
            .cloned()
            .collect();
        prop_assert_eq!(result.rooms.unwrap_or_default(), expected);
    }

    // Merging with an empty config is the identity
    #[test]
    fn config_merge_empty_is_identity(config in config_strategy()) {
        let mut result = config.clone();
        ConfigMerger::merge_into(&mut result, &Config::default());
        prop_assert_eq!(result, config);
    }

    // Generated configs are within bounds, so they validate
    #[test]
    fn generated_configs_validate(config in config_strategy()) {
        prop_assert!(ConfigValidator::validate(&config).is_ok());
    }

    // YAML serialization round-trips
    #[test]
    fn config_yaml_roundtrip(config in config_strategy()) {
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        prop_assert_eq!(parsed, config);
    }
}
