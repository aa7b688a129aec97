// tests/config.rs
use toy_robot::{ConfigError, ParseErrorPolicy, Simulator, SimulatorConfig, TableBounds};

#[test]
fn test_defaults() {
    let config = SimulatorConfig::default();
    assert_eq!(config.table_size, 5);
    assert_eq!(config.on_parse_error, ParseErrorPolicy::Abort);
    assert_eq!(Simulator::default().bounds().size(), 5);
}

#[test]
fn test_toml_keys_are_camel_case() {
    let config = SimulatorConfig::from_toml_str(
        r#"
        tableSize = 7
        onParseError = "skip"
        "#,
    )
    .unwrap();
    assert_eq!(config.table_size, 7);
    assert_eq!(config.on_parse_error, ParseErrorPolicy::Skip);
}

#[test]
fn test_missing_keys_take_defaults() {
    let config = SimulatorConfig::from_toml_str("").unwrap();
    assert_eq!(config, SimulatorConfig::default());
}

#[test]
fn test_malformed_toml() {
    let err = SimulatorConfig::from_toml_str("tableSize = \"big\"").unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_table_size_validation() {
    for size in [0, i32::MAX as u32 + 1, u32::MAX] {
        let config = SimulatorConfig {
            table_size: size,
            ..Default::default()
        };
        assert!(matches!(
            Simulator::new(config),
            Err(ConfigError::InvalidTableSize(s)) if s == size
        ));
    }
    assert_eq!(TableBounds::new(1).unwrap().size(), 1);
    assert!(TableBounds::new(i32::MAX as u32).is_ok());
}

#[test]
fn test_single_cell_table() {
    let config = SimulatorConfig {
        table_size: 1,
        ..Default::default()
    };
    let mut sim = Simulator::new(config).unwrap();
    let out = sim
        .run(["PLACE 0,0,EAST", "MOVE", "LEFT", "MOVE", "REPORT"])
        .unwrap();
    assert_eq!(out, vec!["0,0,NORTH"]);
}
