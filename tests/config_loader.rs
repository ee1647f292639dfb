use std::fs;
use storefront::config::Config;
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, content).expect("write config");
    (dir, path)
}

#[test]
fn empty_file_yields_defaults() {
    let (_dir, path) = write_config("");
    let config = Config::load_from(&path).expect("loads");
    assert_eq!(config.server.url, "ws://localhost:8081");
    assert_eq!(config.server.connect_timeout_seconds, 10);
    assert_eq!(config.ui.tick_rate_ms, 250);
}

#[test]
fn explicit_values_override_defaults() {
    let (_dir, path) = write_config(
        r#"
[server]
url = "wss://store.example.com/ws"
connect_timeout_seconds = 3

[ui]
tick_rate_ms = 100
"#,
    );
    let config = Config::load_from(&path).expect("loads");
    assert_eq!(config.server.url, "wss://store.example.com/ws");
    assert_eq!(config.server.connect_timeout_seconds, 3);
    assert_eq!(config.ui.tick_rate_ms, 100);
    // Untouched fields keep their defaults.
    assert_eq!(config.server.initial_backoff_ms, 500);
}

#[test]
fn non_websocket_url_fails_validation() {
    let (_dir, path) = write_config(
        r#"
[server]
url = "http://store.example.com"
"#,
    );
    assert!(Config::load_from(&path).is_err());
}

#[test]
fn zero_tick_rate_fails_validation() {
    let (_dir, path) = write_config(
        r#"
[ui]
tick_rate_ms = 0
"#,
    );
    assert!(Config::load_from(&path).is_err());
}

#[test]
fn inverted_backoff_bounds_fail_validation() {
    let (_dir, path) = write_config(
        r#"
[server]
initial_backoff_ms = 5000
max_backoff_ms = 1000
"#,
    );
    assert!(Config::load_from(&path).is_err());
}

#[test]
fn unparsable_toml_is_an_error() {
    let (_dir, path) = write_config("[server\nurl = ");
    assert!(Config::load_from(&path).is_err());
}

#[test]
fn missing_default_file_falls_back_to_defaults() {
    // load() tolerates an absent config file entirely.
    let config = Config::default();
    assert!(config.validate().is_ok());
}
