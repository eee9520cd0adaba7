use temper::{ConfigError, RenderConfig};

#[test]
fn test_default_config() {
    let config = RenderConfig::default();
    assert_eq!(config.indent, 4);
    assert!(!config.separate_blocks);
}

#[test]
fn test_parse_config() {
    let toml_str = r#"
indent = 2
separate-blocks = true
    "#;
    let config: RenderConfig = toml::from_str(toml_str).unwrap();
    assert_eq!(config.indent, 2);
    assert!(config.separate_blocks);
}

#[test]
fn test_partial_config_uses_defaults() {
    let config: RenderConfig = toml::from_str("separate-blocks = true").unwrap();
    assert_eq!(config.indent, 4);
    assert!(config.separate_blocks);
}

#[test]
fn test_missing_config_file() {
    let err = RenderConfig::from_file("does/not/exist.toml").unwrap_err();
    assert!(matches!(err, ConfigError::NotFound(ref path) if path.contains("exist.toml")));
}

#[test]
fn test_config_from_file() {
    let path = std::env::temp_dir().join(format!("temper-config-{}.toml", std::process::id()));
    std::fs::write(&path, "indent = 8\n").unwrap();

    let config = RenderConfig::from_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(config.indent, 8);
    assert!(!config.separate_blocks);
}

#[test]
fn test_invalid_config_file() {
    let path = std::env::temp_dir().join(format!("temper-bad-{}.toml", std::process::id()));
    std::fs::write(&path, "indent = \"wide\"\n").unwrap();

    let err = RenderConfig::from_file(&path).unwrap_err();
    std::fs::remove_file(&path).unwrap();

    assert!(matches!(err, ConfigError::ParseError(_)));
}
