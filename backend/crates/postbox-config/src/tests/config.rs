use crate::tests::{EnvGuard, setup_config_dir};
use crate::{Config, ConfigError};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};
use log::LevelFilter;
use serial_test::serial;

#[test]
#[serial]
fn given_no_config_file_when_load_then_ok_with_defaults() {
    // Given
    let _temp = setup_config_dir();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.rate_limit.cooldown_secs, eq(crate::DEFAULT_COOLDOWN_SECS));
    assert_that!(config.session.viewport_lines, eq(crate::DEFAULT_VIEWPORT_LINES));
    assert_that!(config.session.max_body_chars, eq(crate::DEFAULT_MAX_BODY_CHARS));
    assert_that!(config.database.path.as_str(), eq("postbox.db"));
    assert_that!(config.validate(), ok(anything()));
}

#[test]
#[serial]
fn given_no_log_file_when_resolved_then_none_so_terminal_logging_used() {
    // Given
    let _temp = setup_config_dir();
    let config = Config::load().unwrap();

    // When
    let path = config.log_file_path();

    // Then
    assert!(config.logging.file.is_none());
    assert!(matches!(path, Ok(None)));
}

#[test]
#[serial]
fn given_missing_config_dir_when_load_then_directory_created() {
    // Given
    let temp = tempfile::TempDir::new().unwrap();
    let nested = temp.path().join("a").join("b");
    let _guard = EnvGuard::set("POSTBOX_CONFIG_DIR", nested.to_str().unwrap());

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    assert!(nested.is_dir());
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_uses_toml_values() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
              [rate_limit]
              cooldown_secs = 30

              [session]
              viewport_lines = 8

              [logging]
              level = "debug"
              file = "postbox.log"
          "#,
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.rate_limit.cooldown_secs, eq(30));
    assert_that!(config.session.viewport_lines, eq(8));
    assert_that!(config.session.tick_interval_secs, eq(crate::DEFAULT_TICK_INTERVAL_SECS));
    assert_that!(*config.logging.level, eq(LevelFilter::Debug));
    assert_that!(
        config.log_file_path().unwrap().unwrap(),
        eq(&temp.path().join("log").join("postbox.log"))
    );
}

#[test]
#[serial]
fn given_env_var_and_toml_when_load_then_env_var_overrides_toml() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        "[rate_limit]\ncooldown_secs = 30",
    )
    .unwrap();
    let _cooldown = EnvGuard::set("POSTBOX_RATE_LIMIT_COOLDOWN_SECS", "15");
    let _colored = EnvGuard::set("POSTBOX_LOG_COLORED", "false");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.rate_limit.cooldown_secs, eq(15));
    assert_that!(config.logging.colored, eq(false));
}

#[test]
#[serial]
fn given_unparseable_env_value_when_load_then_keeps_previous_value() {
    // Given
    let _temp = setup_config_dir();
    let _viewport = EnvGuard::set("POSTBOX_SESSION_VIEWPORT_LINES", "lots");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.session.viewport_lines, eq(crate::DEFAULT_VIEWPORT_LINES));
}

#[test]
#[serial]
fn given_invalid_toml_when_load_then_toml_error() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "[session\nviewport_lines =").unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
    assert!(matches!(result, Err(ConfigError::Toml { .. })));
}

#[test]
#[serial]
fn given_relative_database_path_when_resolved_then_inside_config_dir() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let config = Config::load().unwrap();

    // When
    let path = config.database_path().unwrap();

    // Then
    assert_that!(path, eq(&temp.path().join("postbox.db")));
}
