use jsonpick::config::Config;

#[test]
fn test_config_defaults() {
    let config = Config::default();

    assert!(config.pretty);
    assert!(!config.raw_strings);
    assert_eq!(config.log_level, "warn");
}

#[test]
fn test_serialize_default_config() {
    let config = Config::default();
    let toml_str = toml::to_string(&config).expect("Failed to serialize config");

    assert!(toml_str.contains("pretty = true"));
    assert!(toml_str.contains("raw_strings = false"));
    assert!(toml_str.contains("log_level = \"warn\""));
}

#[test]
fn test_deserialize_custom_config() {
    let config: Config = toml::from_str(
        r#"
        pretty = false
        raw_strings = true
        log_level = "debug"
        "#,
    )
    .unwrap();

    assert!(!config.pretty);
    assert!(config.raw_strings);
    assert_eq!(config.log_level, "debug");
}

#[test]
fn test_written_config_loads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let config = Config {
        raw_strings: true,
        log_level: "info".to_string(),
        ..Config::default()
    };
    std::fs::write(&path, toml::to_string_pretty(&config).unwrap()).unwrap();

    assert_eq!(Config::load_from(&path).unwrap(), config);
}

#[test]
fn test_invalid_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "pretty = \"maybe\"").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("Invalid config"));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn test_missing_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load_from(&dir.path().join("absent.toml")).unwrap_err();
    assert!(err.to_string().contains("Failed to read config"));
}
