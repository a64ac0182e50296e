use std::path::PathBuf;

use iptf_map_core::config::{
    DEFAULT_CONTENT_ROOT, DEFAULT_OUTPUT_PATH, DEFAULT_SKIP_FILES, DEFAULT_SUMMARY_MAX_LEN,
};
use iptf_map_core::{Config, ConfigError};
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.content.root, PathBuf::from(DEFAULT_CONTENT_ROOT));
    assert_eq!(config.content.skip_files, DEFAULT_SKIP_FILES);
    assert_eq!(config.content.summary_max_len, DEFAULT_SUMMARY_MAX_LEN);
    assert_eq!(config.output.path, PathBuf::from(DEFAULT_OUTPUT_PATH));
    assert!(config.output.pretty);
}

#[test]
fn test_config_to_toml() {
    let toml_str = Config::default_config_string();
    assert!(toml_str.contains("[content]"));
    assert!(toml_str.contains("[output]"));
}

#[test]
fn test_config_from_toml() {
    let toml_str = r#"
[content]
root = "docs"
summary_max_len = 120

[output]
pretty = false
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.content.root, PathBuf::from("docs"));
    assert_eq!(config.content.summary_max_len, 120);
    assert!(!config.output.pretty);
    assert_eq!(config.output.path, PathBuf::from(DEFAULT_OUTPUT_PATH));
}

#[test]
fn test_from_file_rejects_invalid_values() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("iptf-map.toml");
    std::fs::write(&path, "[content]\nsummary_max_len = 0\n").unwrap();

    assert!(matches!(Config::from_file(&path), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_from_file_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("iptf-map.toml");
    std::fs::write(&path, "[content\nroot = ").unwrap();

    assert!(matches!(Config::from_file(&path), Err(ConfigError::ParseError(_))));
}
