use pretty_assertions::assert_eq;
use spotop::config::Config;
use spotop::types::{Resource, TokenPair};
use spotop::utils::*;

// Helper function to create a config with only the given credentials set
fn create_test_config(client_id: &str, redirect_uri: &str) -> Config {
    let mut config = Config::from_lookup(|_| None).unwrap();
    config.client_id = client_id.to_string();
    config.client_secret = "secret".to_string();
    config.redirect_uri = redirect_uri.to_string();
    config
}

#[test]
fn test_basic_credentials() {
    assert_eq!(basic_credentials("abc", "secret"), "Basic YWJjOnNlY3JldA==");

    // Empty credentials still produce a well-formed header
    assert_eq!(basic_credentials("", ""), "Basic Og==");
}

#[test]
fn test_authorize_url_contains_client_and_encoded_values() {
    let config = create_test_config("abc", "http://x/y");
    let url = authorize_url(&config);

    assert!(url.starts_with("https://accounts.spotify.com/authorize?"));
    assert!(url.contains("response_type=code"));
    assert!(url.contains("client_id=abc"));
    assert!(url.contains("redirect_uri=http%3A%2F%2Fx%2Fy"));
    assert!(url.contains("scope=user-read-email%20user-top-read%20playlist-read-private"));
}

#[test]
fn test_authorize_url_with_missing_configuration() {
    // No validation: empty values simply end up in the URL
    let config = create_test_config("", "");
    let url = authorize_url(&config);

    assert!(url.contains("client_id=&"));
    assert!(url.ends_with("redirect_uri="));
}

#[test]
fn test_landing_url() {
    assert_eq!(landing_url("A"), "/index.html?token=A");
    assert_eq!(landing_url("a b&c"), "/index.html?token=a%20b%26c");
}

#[test]
fn test_api_endpoint_joins_paths() {
    assert_eq!(
        api_endpoint("https://api.spotify.com/v1", "me"),
        "https://api.spotify.com/v1/me"
    );
    assert_eq!(
        api_endpoint("https://api.spotify.com/v1/", "/me/top/tracks?limit=10"),
        "https://api.spotify.com/v1/me/top/tracks?limit=10"
    );
}

#[test]
fn test_resource_paths() {
    assert_eq!(Resource::Profile.path(), "me");
    assert_eq!(Resource::TopArtists.path(), "me/top/artists?limit=10");
    assert_eq!(Resource::TopTracks.path(), "me/top/tracks?limit=10");
}

#[test]
fn test_token_pair_debug_redacts_tokens() {
    let tokens: TokenPair =
        serde_json::from_str(r#"{"access_token":"access-123","refresh_token":"refresh-456"}"#)
            .unwrap();

    let debug = format!("{:?}", tokens);
    assert!(!debug.contains("access-123"));
    assert!(!debug.contains("refresh-456"));
}

#[test]
fn test_token_pair_without_refresh_token() {
    let tokens: TokenPair = serde_json::from_str(r#"{"access_token":"A"}"#).unwrap();

    assert_eq!(tokens.access_token, "A");
    assert_eq!(tokens.refresh_token, "");
}
