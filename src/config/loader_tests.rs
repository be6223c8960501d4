//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::env;
use std::fs;

#[test]
fn default_config_path_contains_incv_config_toml() {
    let path = default_config_path().expect("Should have default path");
    let path_str = path.to_string_lossy();
    assert!(
        path_str.contains("incv") && path_str.ends_with("config.toml"),
        "Path should contain 'incv' and end with 'config.toml', got: {}",
        path_str
    );
}

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/config.toml");
    assert_eq!(
        result,
        Ok(None),
        "Missing config file should return Ok(None), not an error"
    );
}

#[test]
fn load_config_file_parses_valid_toml() {
    let temp_dir = env::temp_dir();
    let config_path = temp_dir.join("incv_test_config.toml");

    let toml_content = r#"
api_base_url = "http://incidents.internal:8080/api"
per_page = 25
debounce_ms = 200
"#;

    fs::write(&config_path, toml_content).expect("Failed to write test config");

    let config = load_config_file(&config_path)
        .expect("Should successfully parse valid TOML")
        .expect("Should return Some(ConfigFile) for existing file");

    assert_eq!(
        config.api_base_url,
        Some("http://incidents.internal:8080/api".to_string())
    );
    assert_eq!(config.per_page, Some(25));
    assert_eq!(config.debounce_ms, Some(200));
    assert_eq!(config.log_file_path, None);

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let temp_dir = env::temp_dir();
    let config_path = temp_dir.join("incv_test_invalid.toml");

    let invalid_toml = "this is not valid TOML ][}{";
    fs::write(&config_path, invalid_toml).expect("Failed to write invalid test config");

    let result = load_config_file(&config_path);
    match result {
        Err(ConfigError::ParseError { path, reason: _ }) => {
            assert_eq!(path, config_path);
        }
        _ => panic!("Expected ParseError, got {:?}", result),
    }

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_rejects_unknown_fields() {
    let temp_dir = env::temp_dir();
    let config_path = temp_dir.join("incv_test_unknown_field.toml");

    fs::write(&config_path, "unknown_setting = true\n").expect("Failed to write test config");

    assert!(
        load_config_file(&config_path).is_err(),
        "Unknown fields should be rejected"
    );

    fs::remove_file(config_path).ok();
}

#[test]
fn merge_config_uses_defaults_for_missing_file() {
    let resolved = merge_config(None);
    assert_eq!(resolved, ResolvedConfig::default());
}

#[test]
fn merge_config_prefers_file_values() {
    let file = ConfigFile {
        api_base_url: Some("http://other:9000/api".to_string()),
        per_page: None,
        debounce_ms: Some(500),
        log_file_path: None,
    };

    let resolved = merge_config(Some(file));
    assert_eq!(resolved.api_base_url, "http://other:9000/api");
    assert_eq!(resolved.per_page, ResolvedConfig::default().per_page);
    assert_eq!(resolved.debounce_ms, 500);
}

#[test]
fn default_config_values() {
    let defaults = ResolvedConfig::default();
    assert_eq!(defaults.api_base_url, "http://127.0.0.1:5000/api");
    assert_eq!(defaults.per_page, 15);
    assert_eq!(defaults.debounce_ms, 350);
}

#[test]
#[serial(incv_env)]
fn env_overrides_apply_over_file_values() {
    env::set_var("INCV_API_URL", "http://from-env:1234/api");
    env::set_var("INCV_PER_PAGE", "30");

    let resolved = apply_env_overrides(ResolvedConfig::default());
    assert_eq!(resolved.api_base_url, "http://from-env:1234/api");
    assert_eq!(resolved.per_page, 30);

    env::remove_var("INCV_API_URL");
    env::remove_var("INCV_PER_PAGE");
}

#[test]
#[serial(incv_env)]
fn unparsable_env_per_page_is_ignored() {
    env::set_var("INCV_PER_PAGE", "many");

    let resolved = apply_env_overrides(ResolvedConfig::default());
    assert_eq!(resolved.per_page, ResolvedConfig::default().per_page);

    env::remove_var("INCV_PER_PAGE");
}

#[test]
fn cli_overrides_beat_everything() {
    let base = ResolvedConfig {
        api_base_url: "http://from-file:1/api".to_string(),
        ..ResolvedConfig::default()
    };

    let resolved = apply_cli_overrides(base, Some("http://from-cli:2/api".to_string()), Some(5));
    assert_eq!(resolved.api_base_url, "http://from-cli:2/api");
    assert_eq!(resolved.per_page, 5);
}

#[test]
fn cli_none_leaves_config_untouched() {
    let base = ResolvedConfig::default();
    let resolved = apply_cli_overrides(base.clone(), None, None);
    assert_eq!(resolved, base);
}
