use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err, none, ok, some};
use serial_test::serial;

// =========================================================================
// Happy Path Tests
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_load_then_ok_with_defaults() {
    // Given
    let (_temp, _guard) = setup_config_dir();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.server.port, eq(crate::DEFAULT_PORT));
    assert_that!(config.database.path.as_str(), eq("data.db"));
    assert_that!(config.auth.enabled, eq(false));
    assert_that!(config.media.upload_dir.as_str(), eq("upload/users"));
    assert_that!(config.follow.retry_on_conflict, eq(true));
}

#[test]
#[serial]
fn given_no_config_file_when_load_and_validate_then_ok() {
    // Given
    let (_temp, _guard) = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_missing_config_dir_when_load_then_directory_is_created() {
    // Given
    let (temp, _root) = setup_config_dir();
    let nested = temp.path().join("nested");
    let _guard = EnvGuard::set("SM_CONFIG_DIR", nested.to_str().unwrap());

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    assert_that!(nested.is_dir(), eq(true));
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_uses_toml_values() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
              [server]
              port = 9000

              [media]
              root = "files"

              [follow]
              retry_on_conflict = false
          "#,
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(9000));
    assert_that!(config.media.root.as_str(), eq("files"));
    assert_that!(config.follow.retry_on_conflict, eq(false));
    assert_that!(config.server.host.as_str(), eq(crate::DEFAULT_HOST));
}

#[test]
#[serial]
fn given_malformed_toml_when_load_then_error_names_file() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "[server\nport = ").unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("config.toml"));
}

#[test]
#[serial]
fn given_env_var_and_toml_when_load_then_env_var_overrides_toml() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "[server]\nport = 9000").unwrap();
    let _port_guard = EnvGuard::set("SM_SERVER_PORT", "8888");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(8888));
}

#[test]
#[serial]
fn given_multiple_env_overrides_when_load_then_all_apply() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _port = EnvGuard::set("SM_SERVER_PORT", "7777");
    let _host = EnvGuard::set("SM_SERVER_HOST", "0.0.0.0");
    let _colored = EnvGuard::set("SM_LOG_COLORED", "false");
    let _file = EnvGuard::set("SM_LOG_FILE", "server.log");
    let _retry = EnvGuard::set("SM_FOLLOW_RETRY_ON_CONFLICT", "0");
    let _bytes = EnvGuard::set("SM_MEDIA_MAX_UPLOAD_BYTES", "2048");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(7777));
    assert_that!(config.server.host.as_str(), eq("0.0.0.0"));
    assert_that!(config.logging.colored, eq(false));
    assert_that!(config.logging.file.as_deref(), some(eq("server.log")));
    assert_that!(config.follow.retry_on_conflict, eq(false));
    assert_that!(config.media.max_upload_bytes, eq(2048));
}

#[test]
#[serial]
fn given_unparseable_port_override_when_load_then_default_is_kept() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _port = EnvGuard::set("SM_SERVER_PORT", "not-a-port");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(crate::DEFAULT_PORT));
}

// =========================================================================
// Derived Paths
// =========================================================================

#[test]
#[serial]
fn given_defaults_when_resolving_paths_then_they_live_under_config_dir() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let config = Config::load().unwrap();

    // When
    let db = config.database_path().unwrap();
    let media = config.media_root().unwrap();

    // Then
    assert_that!(db, eq(&temp.path().join("data.db")));
    assert_that!(media, eq(&temp.path().join("media")));
    assert_that!(config.log_file_path().unwrap(), none());
}

#[test]
#[serial]
fn given_log_file_when_resolving_path_then_joined_with_log_dir() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let _file = EnvGuard::set("SM_LOG_FILE", "sm.log");
    let config = Config::load().unwrap();

    // When
    let path = config.log_file_path().unwrap();

    // Then
    assert_that!(path, some(eq(&temp.path().join("log").join("sm.log"))));
}

#[test]
#[serial]
fn given_database_path_with_parent_segments_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _path = EnvGuard::set("SM_DATABASE_PATH", "../escape.db");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
fn given_config_when_bind_addr_then_host_and_port_joined() {
    let config = Config::default();

    assert_that!(config.bind_addr(), eq("127.0.0.1:8000"));
}
