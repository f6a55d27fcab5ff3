use wordbattle::config::{Config, ConfigError, GameConfig, WordsConfig};

/// Test that Config::default() produces the expected values.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert!(config.words.url.starts_with("https://"));
    assert!(config.words.url.ends_with("words.json"));
    assert_eq!(config.words.timeout_seconds, 10);
    assert_eq!(config.words.connect_timeout_seconds, 5);
    assert_eq!(config.game.right_answer_min_tries, 3);
    assert_eq!(config.game.right_answer_max_tries, 6);
    assert_eq!(config.logging.filter, "info");
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("wordbattle/config.toml"));
}

#[test]
fn test_validation_passes_for_default() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[words]
url = "http://localhost:8080/words.json"

[game]
right_answer_max_tries = 9
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.words.url, "http://localhost:8080/words.json");
    assert_eq!(config.words.timeout_seconds, 10);
    assert_eq!(config.game.right_answer_min_tries, 3);
    assert_eq!(config.game.right_answer_max_tries, 9);
    assert_eq!(config.logging.filter, "info");
}

#[test]
fn test_parse_invalid_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[words\nurl = ").unwrap();

    let result = Config::load_from(&path);
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn test_validation_fails_non_http_url() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[words]\nurl = \"ftp://example.com/words.json\"\n").unwrap();

    let result = Config::load_from(&path);
    assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
}

#[test]
fn test_validation_fails_zero_timeout() {
    let config = Config {
        words: WordsConfig {
            timeout_seconds: 0,
            ..WordsConfig::default()
        },
        ..Config::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_validation_fails_empty_try_range() {
    let config = Config {
        game: GameConfig {
            right_answer_min_tries: 4,
            right_answer_max_tries: 4,
        },
        ..Config::default()
    };
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("right_answer_min_tries"));
}

#[test]
fn test_config_roundtrip() {
    let config = Config::default();
    let text = toml::to_string(&config).unwrap();
    let parsed: Config = toml::from_str(&text).unwrap();
    assert_eq!(parsed, config);
}
