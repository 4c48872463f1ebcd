//! Typed errors for configuration, token exchange and resource proxying.
//!
//! The `Display` output of [`AuthError`] and [`ApiError`] is what clients see,
//! so it only carries fixed messages. Underlying causes stay in `source()` and
//! are logged server-side.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Prefix of every body returned when the authorization callback fails.
pub const AUTH_FAILURE_PREFIX: &str = "Erro na autenticação: ";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PORT must be a number between 0 and 65535, got {0:?}")]
    InvalidPort(String),

    #[error("HOST must be an IP address, got {0:?}")]
    InvalidHost(String),
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("authorization was denied by the provider ({0})")]
    Denied(String),

    #[error("the token endpoint could not be reached")]
    Transport(#[source] reqwest::Error),

    #[error("the token endpoint rejected the request with status {0}")]
    Rejected(StatusCode),

    #[error("the token endpoint returned an unreadable response")]
    MalformedBody(#[source] reqwest::Error),
}

impl AuthError {
    /// HTTP status returned to the browser for this failure.
    ///
    /// Anything Spotify blames on the user or the code (denied consent, 4xx
    /// from the token endpoint) maps to `401 Unauthorized`. Failures on the
    /// provider side or in transit map to `502 Bad Gateway`.
    pub fn status(&self) -> StatusCode {
        match self {
            AuthError::Denied(_) => StatusCode::UNAUTHORIZED,
            AuthError::Rejected(status) if status.is_client_error() => StatusCode::UNAUTHORIZED,
            AuthError::Rejected(_) | AuthError::Transport(_) | AuthError::MalformedBody(_) => {
                StatusCode::BAD_GATEWAY
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        (self.status(), format!("{AUTH_FAILURE_PREFIX}{self}")).into_response()
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("the Spotify API could not be reached")]
    Transport(#[source] reqwest::Error),

    #[error("the Spotify API response could not be read")]
    Body(#[source] reqwest::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.to_string() }));
        (StatusCode::BAD_GATEWAY, body).into_response()
    }
}
