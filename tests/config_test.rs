use std::{collections::HashMap, env, fs, net::IpAddr, path::PathBuf};

use pretty_assertions::assert_eq;
use spotop::config::*;
use spotop::error::ConfigError;
use tempfile::TempDir;

// Helper function to build a config from a fixed set of variables
fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn test_defaults() {
    let config = config_from(&[]).unwrap();

    assert_eq!(config.client_id, "");
    assert_eq!(config.client_secret, "");
    assert_eq!(config.redirect_uri, "");
    assert_eq!(config.auth_url, DEFAULT_AUTH_URL);
    assert_eq!(config.token_url, DEFAULT_TOKEN_URL);
    assert_eq!(config.api_url, DEFAULT_API_URL);
    assert_eq!(config.host, "0.0.0.0".parse::<IpAddr>().unwrap());
    assert_eq!(config.port, 3000);
    assert_eq!(config.public_dir, PathBuf::from("public"));
}

#[test]
fn test_values_from_lookup() {
    let config = config_from(&[
        ("CLIENT_ID", "abc"),
        ("CLIENT_SECRET", "secret"),
        ("REDIRECT_URI", "http://x/y"),
        ("SPOTIFY_API_URL", "http://localhost:9000/v1/"),
        ("HOST", "127.0.0.1"),
        ("PORT", "8080"),
        ("PUBLIC_DIR", "/srv/www"),
    ])
    .unwrap();

    assert_eq!(config.client_id, "abc");
    assert_eq!(config.client_secret, "secret");
    assert_eq!(config.redirect_uri, "http://x/y");
    // Trailing slash is trimmed
    assert_eq!(config.api_url, "http://localhost:9000/v1");
    assert_eq!(config.host, "127.0.0.1".parse::<IpAddr>().unwrap());
    assert_eq!(config.port, 8080);
    assert_eq!(config.public_dir, PathBuf::from("/srv/www"));
}

#[test]
fn test_invalid_port() {
    let err = config_from(&[("PORT", "abc")]).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort(ref raw) if raw == "abc"));

    let err = config_from(&[("PORT", "70000")]).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort(_)));
}

#[test]
fn test_invalid_host() {
    let err = config_from(&[("HOST", "not-an-ip")]).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidHost(_)));
}

#[test]
fn test_missing_credentials() {
    let config = config_from(&[]).unwrap();
    assert_eq!(
        config.missing_credentials(),
        vec!["CLIENT_ID", "CLIENT_SECRET", "REDIRECT_URI"]
    );

    let config = config_from(&[("CLIENT_ID", "abc"), ("REDIRECT_URI", "http://x/y")]).unwrap();
    assert_eq!(config.missing_credentials(), vec!["CLIENT_SECRET"]);
}

#[test]
fn test_debug_redacts_client_secret() {
    let config = config_from(&[("CLIENT_ID", "abc"), ("CLIENT_SECRET", "top-secret")]).unwrap();
    let debug = format!("{:?}", config);

    assert!(debug.contains("abc"));
    assert!(!debug.contains("top-secret"));
}

#[test]
fn test_load_env_precedence() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("first.env");
    let second = dir.path().join("second.env");
    let missing = dir.path().join("missing.env");

    fs::write(
        &first,
        "SPOTOP_TEST_FIRST_ONLY=first\nSPOTOP_TEST_SHARED=first\nSPOTOP_TEST_PRESET=first\n",
    )
    .unwrap();
    fs::write(
        &second,
        "SPOTOP_TEST_SHARED=second\nSPOTOP_TEST_SECOND_ONLY=second\n",
    )
    .unwrap();

    // SAFETY: the SPOTOP_TEST_* variables are only touched by this test.
    unsafe { env::set_var("SPOTOP_TEST_PRESET", "process") };

    let loaded = load_env_from(&[missing, first.clone(), second.clone()]);

    // Missing file is skipped, not an error
    assert_eq!(loaded, vec![first, second]);

    // Process environment beats every file
    assert_eq!(env::var("SPOTOP_TEST_PRESET").unwrap(), "process");
    // Earlier file beats later file
    assert_eq!(env::var("SPOTOP_TEST_SHARED").unwrap(), "first");
    assert_eq!(env::var("SPOTOP_TEST_FIRST_ONLY").unwrap(), "first");
    assert_eq!(env::var("SPOTOP_TEST_SECOND_ONLY").unwrap(), "second");
}

#[test]
fn test_load_env_without_files() {
    let dir = TempDir::new().unwrap();

    let loaded = load_env_from(&[dir.path().join(".env")]);

    assert!(loaded.is_empty());
}

#[test]
fn test_env_file_candidates_prefer_working_directory() {
    let candidates = env_file_candidates();

    assert_eq!(candidates[0], PathBuf::from(".env"));
    assert!(
        candidates
            .iter()
            .skip(1)
            .all(|path| path.ends_with("spotop/.env"))
    );
}
