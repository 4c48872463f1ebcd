use base64::{Engine, engine::general_purpose::STANDARD};

use crate::config::Config;

/// Scopes requested during authorization, space separated.
pub const SCOPES: &str = "user-read-email user-top-read playlist-read-private";

/// Value of the `Authorization` header for client credentials.
pub fn basic_credentials(client_id: &str, client_secret: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{client_id}:{client_secret}")))
}

/// Builds the provider authorization URL the `/login` route redirects to.
pub fn authorize_url(config: &Config) -> String {
    format!(
        "{auth_url}?response_type=code&client_id={client_id}&scope={scope}&redirect_uri={redirect_uri}",
        auth_url = config.auth_url,
        client_id = config.client_id,
        scope = urlencoding::encode(SCOPES),
        redirect_uri = urlencoding::encode(&config.redirect_uri),
    )
}

/// Location of the landing page carrying the access token.
pub fn landing_url(access_token: &str) -> String {
    format!("/index.html?token={}", urlencoding::encode(access_token))
}

/// Joins the Web API base URL and a relative resource path.
pub fn api_endpoint(api_url: &str, path: &str) -> String {
    format!("{}/{}", api_url.trim_end_matches('/'), path.trim_start_matches('/'))
}
