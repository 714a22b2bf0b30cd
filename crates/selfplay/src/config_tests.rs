use super::*;

#[test]
fn test_empty_file_gives_defaults() {
    assert_eq!(MatchConfig::from_toml_str("").unwrap(), MatchConfig::default());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let config = MatchConfig::from_toml_str(
        r#"
        num_games = 4
        depth = 2
        move_time_ms = 250
        engine2 = "minimax"
        "#,
    )
    .unwrap();
    assert_eq!(config.num_games, 4);
    assert_eq!(config.depth, 2);
    assert_eq!(config.move_time_ms, Some(250));
    assert_eq!(config.engine1, EngineSpec::Minimax);
    assert_eq!(config.engine2, EngineSpec::Minimax);
    assert_eq!(config.max_plies, 256);
    assert!(config.alternate_sides);
}

#[test]
fn test_bad_values_are_rejected() {
    assert!(matches!(
        MatchConfig::from_toml_str("engine1 = \"stockfish\""),
        Err(ConfigError::Parse(_))
    ));
    assert!(matches!(
        MatchConfig::from_toml_str("depth = \"deep\""),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_missing_file_gives_defaults() {
    let path = std::env::temp_dir().join("selfplay-config-that-does-not-exist.toml");
    assert_eq!(MatchConfig::load(&path).unwrap(), MatchConfig::default());
}

#[test]
fn test_load_from_file() {
    let path = std::env::temp_dir().join(format!("selfplay-config-{}.toml", std::process::id()));
    std::fs::write(&path, "max_plies = 40\nalternate_sides = false\n").unwrap();
    let config = MatchConfig::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(config.max_plies, 40);
    assert!(!config.alternate_sides);
}

#[test]
fn test_engine_spec_parsing() {
    assert_eq!("Minimax".parse::<EngineSpec>().unwrap(), EngineSpec::Minimax);
    assert_eq!("random".parse::<EngineSpec>().unwrap(), EngineSpec::Random);
    assert!(matches!(
        "neural".parse::<EngineSpec>(),
        Err(ConfigError::UnknownEngine(name)) if name == "neural"
    ));
    assert_eq!(EngineSpec::Random.to_string(), "random");
}

#[test]
fn test_search_limits_follow_config() {
    let mut config = MatchConfig::default();
    assert_eq!(config.search_limits().move_time, None);
    config.move_time_ms = Some(20);
    let limits = config.search_limits();
    assert_eq!(limits.depth, 3);
    assert_eq!(limits.move_time, Some(Duration::from_millis(20)));
}
