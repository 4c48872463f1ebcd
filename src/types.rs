use std::fmt;

use axum::{
    body::Bytes,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

/// Access/refresh token pair returned by the token endpoint.
///
/// The refresh token is kept only because the provider sends it; nothing in
/// the crate reads it.
#[derive(Clone, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: String,
}

impl fmt::Debug for TokenPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenPair")
            .field("access_token", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .finish()
    }
}

/// Query string sent by the provider to `/callback`.
#[derive(Debug, Default, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub error: Option<String>,
}

/// Query string of the proxy routes.
#[derive(Debug, Default, Deserialize)]
pub struct TokenParams {
    pub token: Option<String>,
}

/// Read-only Web API resources exposed by the proxy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Profile,
    TopArtists,
    TopTracks,
}

impl Resource {
    /// Path relative to the Web API base URL.
    pub fn path(self) -> &'static str {
        match self {
            Resource::Profile => "me",
            Resource::TopArtists => "me/top/artists?limit=10",
            Resource::TopTracks => "me/top/tracks?limit=10",
        }
    }
}

/// A Web API response forwarded as received.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub content_type: Option<HeaderValue>,
    pub body: Bytes,
}

impl IntoResponse for UpstreamResponse {
    fn into_response(self) -> Response {
        let content_type = self
            .content_type
            .unwrap_or_else(|| HeaderValue::from_static("application/json"));

        (self.status, [(header::CONTENT_TYPE, content_type)], self.body).into_response()
    }
}
