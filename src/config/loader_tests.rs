//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::collections::HashMap;
use std::env;
use std::fs;
use std::str::FromStr;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn default_config_path_contains_tiptime_config_toml() {
    if let Some(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(
            path_str.contains("tiptime") && path_str.ends_with("config.toml"),
            "Path should contain 'tiptime' and end with 'config.toml', got: {}",
            path_str
        );
    }
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
    let config_path = env::temp_dir().join("tiptime_test_config.toml");

    let toml_content = r#"
locale = "de-DE"
default_tip_percent = 18.5
round_up = true
log_file_path = "/tmp/tiptime-test.log"
"#;

    fs::write(&config_path, toml_content).expect("Failed to write test config");

    let config = load_config_file(&config_path)
        .expect("Should successfully parse valid TOML")
        .expect("Should return Some(ConfigFile) for existing file");

    assert_eq!(config.locale, Some("de-DE".to_string()));
    assert_eq!(config.default_tip_percent, Some(18.5));
    assert_eq!(config.round_up, Some(true));
    assert_eq!(
        config.log_file_path,
        Some(PathBuf::from("/tmp/tiptime-test.log"))
    );

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let config_path = env::temp_dir().join("tiptime_test_invalid.toml");

    fs::write(&config_path, "this is not valid TOML ][}{").expect("Failed to write test config");

    match load_config_file(&config_path) {
        Err(ConfigError::ParseError { path, reason: _ }) => {
            assert_eq!(path, config_path);
        }
        other => panic!("Expected ParseError, got {:?}", other),
    }

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_rejects_unknown_fields() {
    let config_path = env::temp_dir().join("tiptime_test_unknown_field.toml");

    fs::write(&config_path, "theme = \"dark\"\n").expect("Failed to write test config");

    let result = load_config_file(&config_path);
    assert!(
        matches!(result, Err(ConfigError::ParseError { .. })),
        "Unknown fields should be rejected, got {:?}",
        result
    );

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_handles_partial_config() {
    let config_path = env::temp_dir().join("tiptime_test_partial.toml");

    fs::write(&config_path, "round_up = true\n").expect("Failed to write test config");

    let config = load_config_file(&config_path).unwrap().unwrap();
    assert_eq!(config.round_up, Some(true));
    assert_eq!(config.locale, None);
    assert_eq!(config.default_tip_percent, None);

    fs::remove_file(config_path).ok();
}

#[test]
fn merge_config_uses_defaults_when_none() {
    let resolved = merge_config(None);
    assert_eq!(resolved.default_tip_percent, DEFAULT_TIP_PERCENT);
    assert!(!resolved.round_up);
    assert_eq!(resolved.log_file_path, default_log_path());
}

#[test]
fn merge_config_overrides_with_config_file_values() {
    let config_file = ConfigFile {
        locale: Some("ja_JP.UTF-8".to_string()),
        default_tip_percent: Some(20.0),
        round_up: Some(true),
        log_file_path: None,
    };

    let resolved = merge_config(Some(config_file));
    assert_eq!(resolved.locale.to_string(), "ja-JP");
    assert_eq!(resolved.default_tip_percent, Decimal::from(20));
    assert!(resolved.round_up);
}

#[test]
fn merge_config_keeps_fractional_tip() {
    let config_file = ConfigFile {
        default_tip_percent: Some(17.5),
        ..ConfigFile::default()
    };

    let resolved = merge_config(Some(config_file));
    assert_eq!(
        resolved.default_tip_percent,
        Decimal::from_str("17.5").unwrap()
    );
}

#[test]
fn merge_config_ignores_unusable_values() {
    let config_file = ConfigFile {
        locale: Some("not a locale".to_string()),
        default_tip_percent: Some(f64::NAN),
        ..ConfigFile::default()
    };

    let resolved = merge_config(Some(config_file));
    let defaults = ResolvedConfig::default();
    assert_eq!(resolved.locale, defaults.locale);
    assert_eq!(resolved.default_tip_percent, DEFAULT_TIP_PERCENT);
}

#[test]
fn env_override_replaces_locale() {
    let config = ResolvedConfig {
        locale: Locale::en_us(),
        ..ResolvedConfig::default()
    };

    let with_env = apply_env_overrides_from(config, lookup(&[(LOCALE_ENV_VAR, "fr_FR")]));
    assert_eq!(with_env.locale.to_string(), "fr-FR");
}

#[test]
fn env_override_ignores_garbage_locale() {
    let config = ResolvedConfig {
        locale: Locale::en_us(),
        ..ResolvedConfig::default()
    };

    let with_env = apply_env_overrides_from(config, lookup(&[(LOCALE_ENV_VAR, "C")]));
    assert_eq!(with_env.locale, Locale::en_us());
}

#[test]
fn cli_overrides_take_highest_precedence() {
    let config_file = ConfigFile {
        locale: Some("de-DE".to_string()),
        round_up: Some(false),
        ..ConfigFile::default()
    };

    let merged = merge_config(Some(config_file));
    let with_env = apply_env_overrides_from(merged, lookup(&[(LOCALE_ENV_VAR, "fr-FR")]));
    assert_eq!(with_env.locale.to_string(), "fr-FR");

    let with_cli = apply_cli_overrides(with_env, Locale::parse("pt-BR"), Some(true));
    assert_eq!(with_cli.locale.to_string(), "pt-BR");
    assert!(with_cli.round_up);
}

#[test]
fn cli_overrides_leave_unset_fields_alone() {
    let config = ResolvedConfig {
        locale: Locale::en_us(),
        round_up: true,
        ..ResolvedConfig::default()
    };

    let with_cli = apply_cli_overrides(config, None, None);
    assert_eq!(with_cli.locale, Locale::en_us());
    assert!(with_cli.round_up);
}

#[test]
#[serial(config_env)]
fn explicit_path_wins_over_env_var() {
    let explicit = env::temp_dir().join("tiptime_test_explicit.toml");
    let from_env = env::temp_dir().join("tiptime_test_from_env.toml");
    fs::write(&explicit, "locale = \"en-GB\"\n").unwrap();
    fs::write(&from_env, "locale = \"de-DE\"\n").unwrap();

    env::set_var(CONFIG_ENV_VAR, &from_env);
    let config = load_config_with_precedence(Some(explicit.clone()))
        .unwrap()
        .unwrap();
    env::remove_var(CONFIG_ENV_VAR);

    assert_eq!(config.locale, Some("en-GB".to_string()));

    fs::remove_file(explicit).ok();
    fs::remove_file(from_env).ok();
}

#[test]
#[serial(config_env)]
fn env_var_path_is_used_without_explicit_path() {
    let from_env = env::temp_dir().join("tiptime_test_env_only.toml");
    fs::write(&from_env, "round_up = true\n").unwrap();

    env::set_var(CONFIG_ENV_VAR, &from_env);
    let config = load_config_with_precedence(None);
    env::remove_var(CONFIG_ENV_VAR);

    assert_eq!(config.unwrap().unwrap().round_up, Some(true));

    fs::remove_file(from_env).ok();
}

#[test]
#[serial(config_env)]
fn empty_env_var_path_is_invalid() {
    env::set_var(CONFIG_ENV_VAR, "");
    let result = load_config_with_precedence(None);
    env::remove_var(CONFIG_ENV_VAR);

    assert!(matches!(result, Err(ConfigError::InvalidPath(_))));
}
