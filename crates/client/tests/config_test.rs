use std::env;
use std::path::PathBuf;
use std::time::Duration;

use pretty_assertions::assert_eq;
use tabletime_client::api::HttpApi;
use tabletime_client::config::ClientConfig;
use tabletime_core::DEFAULT_ROOM_CODE;

// The TABLETIME_* variables are process-global, so a single test owns the
// whole set and exercises both phases in sequence.
#[test]
fn test_env_overrides_and_defaults() {
    unsafe {
        env::set_var("TABLETIME_API_URL", "http://coordinator:8080/api");
        env::set_var("TABLETIME_ROOM_CODE", "WEEKLY");
        env::set_var("TABLETIME_IDENTITY_FILE", "/tmp/tabletime-id");
        env::set_var("TABLETIME_DEBOUNCE_MS", "250");
    }
    let config = ClientConfig::from_env().unwrap();
    assert_eq!(config.api_base_url, "http://coordinator:8080/api");
    assert_eq!(config.room_code, "WEEKLY");
    assert_eq!(config.identity_path, PathBuf::from("/tmp/tabletime-id"));
    assert_eq!(config.debounce, Duration::from_millis(250));

    // Unset variables fall back to the local-development defaults, and a
    // debounce value that does not parse falls back as well.
    unsafe {
        env::remove_var("TABLETIME_API_URL");
        env::remove_var("TABLETIME_ROOM_CODE");
        env::remove_var("TABLETIME_IDENTITY_FILE");
        env::set_var("TABLETIME_DEBOUNCE_MS", "soon");
    }
    let config = ClientConfig::from_env().unwrap();
    assert_eq!(config.api_base_url, "http://localhost:3000/api");
    assert_eq!(config.room_code, DEFAULT_ROOM_CODE);
    assert_eq!(config.identity_path, PathBuf::from(".tabletime-identity"));
    assert_eq!(config.debounce, Duration::from_millis(400));

    unsafe {
        env::remove_var("TABLETIME_DEBOUNCE_MS");
    }
}

#[test]
fn test_transport_built_from_config() {
    let config = ClientConfig {
        api_base_url: "http://localhost:3000/api".to_string(),
        room_code: "WEEKLY".to_string(),
        identity_path: PathBuf::from(".tabletime-identity"),
        debounce: Duration::from_millis(400),
    };

    let api = HttpApi::from_config(&config);
    assert_eq!(api.base_url(), "http://localhost:3000/api");
    assert_eq!(api.room_code(), "WEEKLY");
}
