//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::env;
use std::fs;

#[test]
fn default_config_path_ends_with_rowdrag_config_toml() {
    if let Some(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(
            path_str.contains("rowdrag") && path_str.ends_with("config.toml"),
            "Path should contain 'rowdrag' and end with 'config.toml', got: {}",
            path_str
        );
    }
}

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/rowdrag.toml");
    assert_eq!(
        result,
        Ok(None),
        "Missing config file should return Ok(None), not an error"
    );
}

#[test]
fn load_config_file_parses_valid_toml() {
    let config_path = env::temp_dir().join("rowdrag_test_config.toml");

    let toml_content = r#"
row_height = 4
edge_margin = 5
scroll_step = 2
frame_interval_ms = 33
row_count = 50
color_seed = 9
"#;

    fs::write(&config_path, toml_content).expect("Failed to write test config");

    let config = load_config_file(&config_path)
        .expect("Should successfully parse valid TOML")
        .expect("Should return Some(ConfigFile) for existing file");

    assert_eq!(config.row_height, Some(4));
    assert_eq!(config.edge_margin, Some(5));
    assert_eq!(config.scroll_step, Some(2));
    assert_eq!(config.frame_interval_ms, Some(33));
    assert_eq!(config.row_count, Some(50));
    assert_eq!(config.color_seed, Some(9));
    assert_eq!(config.log_file_path, None);

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let config_path = env::temp_dir().join("rowdrag_test_invalid.toml");
    fs::write(&config_path, "this is not valid TOML ][}{").expect("write invalid config");

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
fn config_file_rejects_unknown_fields() {
    let result: Result<ConfigFile, _> = toml::from_str("theme = \"monokai\"");
    assert!(result.is_err(), "Unknown keys should be rejected");
}

#[test]
fn merge_config_uses_defaults_when_none() {
    assert_eq!(merge_config(None), ResolvedConfig::default());
}

#[test]
fn merge_config_overrides_with_config_file_values() {
    let config_file = ConfigFile {
        row_height: Some(2),
        edge_margin: Some(6),
        scroll_step: Some(3),
        frame_interval_ms: Some(40),
        row_count: Some(12),
        color_seed: Some(1),
        log_file_path: Some(PathBuf::from("/tmp/rowdrag-custom.log")),
    };

    let resolved = merge_config(Some(config_file));

    assert_eq!(resolved.row_height, 2);
    assert_eq!(resolved.edge_margin, 6);
    assert_eq!(resolved.scroll_step, 3);
    assert_eq!(resolved.frame_interval_ms, 40);
    assert_eq!(resolved.row_count, 12);
    assert_eq!(resolved.color_seed, 1);
    assert_eq!(resolved.log_file_path, PathBuf::from("/tmp/rowdrag-custom.log"));
}

#[test]
fn merge_config_uses_defaults_for_none_fields() {
    let config_file = ConfigFile {
        row_count: Some(7),
        ..ConfigFile::default()
    };

    let resolved = merge_config(Some(config_file));
    let defaults = ResolvedConfig::default();

    assert_eq!(resolved.row_count, 7);
    assert_eq!(resolved.row_height, defaults.row_height);
    assert_eq!(resolved.edge_margin, defaults.edge_margin);
    assert_eq!(resolved.log_file_path, defaults.log_file_path);
}

#[test]
fn resolved_config_default_has_expected_values() {
    let config = ResolvedConfig::default();
    assert_eq!(config.row_height, 3);
    assert_eq!(config.edge_margin, 3);
    assert_eq!(config.scroll_step, 1);
    assert_eq!(config.frame_interval_ms, 16);
    assert_eq!(config.row_count, 300);
    assert!(config.validate().is_ok());
}

#[test]
fn validate_rejects_zero_row_height() {
    let config = ResolvedConfig {
        row_height: 0,
        ..ResolvedConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidValue {
            field: "row_height",
            ..
        })
    ));
}

#[test]
fn validate_rejects_zero_scroll_step_and_interval() {
    let no_step = ResolvedConfig {
        scroll_step: 0,
        ..ResolvedConfig::default()
    };
    let no_interval = ResolvedConfig {
        frame_interval_ms: 0,
        ..ResolvedConfig::default()
    };
    assert!(no_step.validate().is_err());
    assert!(no_interval.validate().is_err());
}

#[test]
fn drag_config_converts_cells() {
    let drag = ResolvedConfig::default().drag_config();
    assert_eq!(drag.row_height, 3.0);
    assert_eq!(drag.edge_margin, 3.0);
    assert_eq!(drag.scroll_step, 1.0);
    assert_eq!(drag.frame_interval, Duration::from_millis(16));
}

/// RAII guard to ensure environment variable cleanup even under test parallelism.
/// Removes the var on drop, preventing test pollution in parallel execution.
struct EnvGuard(&'static str);

impl EnvGuard {
    fn new(name: &'static str) -> Self {
        env::remove_var(name);
        EnvGuard(name)
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        env::remove_var(self.0);
    }
}

#[test]
#[serial(rowdrag_rows)]
fn apply_env_overrides_respects_rowdrag_rows() {
    let _guard = EnvGuard::new(ROWS_ENV_VAR);
    env::set_var(ROWS_ENV_VAR, "42");

    let config = apply_env_overrides(ResolvedConfig::default());

    assert_eq!(config.row_count, 42);
}

#[test]
#[serial(rowdrag_rows)]
fn apply_env_overrides_ignores_unparsable_rows() {
    let _guard = EnvGuard::new(ROWS_ENV_VAR);
    env::set_var(ROWS_ENV_VAR, "lots");

    let config = apply_env_overrides(ResolvedConfig::default());

    assert_eq!(config.row_count, ResolvedConfig::default().row_count);
}

#[test]
#[serial(rowdrag_rows)]
fn apply_env_overrides_no_change_when_env_var_not_set() {
    let _guard = EnvGuard::new(ROWS_ENV_VAR);
    let config = apply_env_overrides(ResolvedConfig::default());
    assert_eq!(config, ResolvedConfig::default());
}

#[test]
#[serial(rowdrag_config)]
fn load_config_with_precedence_prefers_explicit_path() {
    let _guard = EnvGuard::new(CONFIG_ENV_VAR);
    let explicit = env::temp_dir().join("rowdrag_test_explicit.toml");
    let from_env = env::temp_dir().join("rowdrag_test_env_ignored.toml");
    fs::write(&explicit, "row_count = 11").expect("write explicit config");
    fs::write(&from_env, "row_count = 22").expect("write env config");
    env::set_var(CONFIG_ENV_VAR, &from_env);

    let config = load_config_with_precedence(Some(explicit.clone()))
        .expect("load ok")
        .expect("file exists");

    assert_eq!(config.row_count, Some(11));

    fs::remove_file(explicit).ok();
    fs::remove_file(from_env).ok();
}

#[test]
#[serial(rowdrag_config)]
fn load_config_with_precedence_uses_env_var_when_no_explicit_path() {
    let _guard = EnvGuard::new(CONFIG_ENV_VAR);
    let from_env = env::temp_dir().join("rowdrag_test_env.toml");
    fs::write(&from_env, "row_count = 22").expect("write env config");
    env::set_var(CONFIG_ENV_VAR, &from_env);

    let config = load_config_with_precedence(None)
        .expect("load ok")
        .expect("file exists");

    assert_eq!(config.row_count, Some(22));

    fs::remove_file(from_env).ok();
}

#[test]
fn apply_cli_overrides_sets_only_given_fields() {
    let overrides = CliOverrides {
        rows: Some(5),
        row_height: None,
        seed: Some(77),
    };

    let config = apply_cli_overrides(ResolvedConfig::default(), overrides);

    assert_eq!(config.row_count, 5);
    assert_eq!(config.color_seed, 77);
    assert_eq!(config.row_height, ResolvedConfig::default().row_height);
}

#[test]
fn apply_cli_overrides_no_overrides() {
    let config = apply_cli_overrides(ResolvedConfig::default(), CliOverrides::default());
    assert_eq!(config, ResolvedConfig::default());
}

#[test]
#[serial(rowdrag_rows)]
fn precedence_chain_full_defaults_to_cli() {
    let _guard = EnvGuard::new(ROWS_ENV_VAR);
    let file = ConfigFile {
        row_count: Some(10),
        row_height: Some(5),
        ..ConfigFile::default()
    };
    env::set_var(ROWS_ENV_VAR, "20");

    let merged = merge_config(Some(file));
    assert_eq!(merged.row_count, 10, "Config file should override default");

    let with_env = apply_env_overrides(merged);
    assert_eq!(with_env.row_count, 20, "Env should override config file");

    let with_cli = apply_cli_overrides(
        with_env,
        CliOverrides {
            rows: Some(30),
            ..CliOverrides::default()
        },
    );
    assert_eq!(with_cli.row_count, 30, "CLI should override everything");
    assert_eq!(with_cli.row_height, 5, "Untouched fields keep file value");
}

#[test]
fn default_log_path_ends_with_rowdrag_log() {
    let path = default_log_path();
    assert!(
        path.to_string_lossy().ends_with("rowdrag.log"),
        "Default log path should end with 'rowdrag.log', got: {:?}",
        path
    );
}
