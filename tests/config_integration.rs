use practice_portal::config::AppConfig;
use serial_test::serial;
use std::env;
use std::fs;
use std::io::Write;

const BIN: &str = "practice-portal";

// Helper to clear environment variables that might interfere with tests
fn clear_env_vars() {
    unsafe {
        env::remove_var("PORTAL_SERVER__PORT");
        env::remove_var("PORTAL_SITE__PRACTICE_NAME");
        env::remove_var("PORTAL_SESSION__LOOKUP_TIMEOUT_MS");
        env::remove_var("CONFIG_FILE");
        env::remove_var("PORT");
        env::remove_var("TIMEOUT_DISABLED");
    }
}

#[test]
#[serial]
fn test_default_config() {
    clear_env_vars();

    let config = AppConfig::load_from_args([BIN]).expect("Failed to load config");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.session.cookie_name, "practice_session");
    assert_eq!(config.session.lookup_timeout_ms, 2000);
    assert_eq!(config.site.practice_name, "Doctor Mike");
    assert!(config.demo.enabled);
}

#[test]
#[serial]
fn test_env_override() {
    clear_env_vars();
    unsafe {
        env::set_var("PORTAL_SERVER__PORT", "9090");
        env::set_var("PORTAL_SESSION__LOOKUP_TIMEOUT_MS", "250");
    }

    let config = AppConfig::load_from_args([BIN]).expect("Failed to load config");
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.session.lookup_timeout_ms, 250);

    clear_env_vars();
}

#[test]
#[serial]
fn test_cli_beats_env() {
    clear_env_vars();
    unsafe {
        env::set_var("PORTAL_SERVER__PORT", "9090");
    }

    let config = AppConfig::load_from_args([BIN, "--port", "4040", "--timeout-disabled", "true"])
        .expect("Failed to load config");
    assert_eq!(config.server.port, 4040);
    assert!(config.server.timeout_disabled);

    clear_env_vars();
}

#[test]
#[serial]
fn test_file_load() {
    clear_env_vars();

    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("Failed to create temp config");
    writeln!(
        file,
        "server:\n  port: 7070\nsite:\n  practice_name: \"Riverside Clinic\"\ndemo:\n  enabled: false"
    )
    .expect("Failed to write temp config");

    unsafe {
        env::set_var("CONFIG_FILE", file.path());
    }

    let config = AppConfig::load_from_args([BIN]).expect("Failed to load config from file");
    assert_eq!(config.server.port, 7070);
    assert_eq!(config.site.practice_name, "Riverside Clinic");
    assert!(!config.demo.enabled);
    // Untouched keys keep their defaults.
    assert_eq!(config.session.cookie_name, "practice_session");

    clear_env_vars();
}

#[test]
#[serial]
fn test_cwd_config_fallback() {
    clear_env_vars();

    let cwd_path = "config.yaml";
    fs::write(cwd_path, "server:\n  port: 6060\n").expect("Failed to write ./config.yaml");

    let config = AppConfig::load_from_args([BIN]);

    fs::remove_file(cwd_path).expect("Failed to remove ./config.yaml");

    assert_eq!(config.expect("Failed to load config").server.port, 6060);
}
