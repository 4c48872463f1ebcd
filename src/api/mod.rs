//! # API Module
//!
//! HTTP handlers for the routes served by [`crate::server`].
//!
//! ## Endpoints
//!
//! ### Authentication
//!
//! - [`login`] - redirects the browser to the Spotify authorization page
//! - [`callback`] - exchanges the returned code and redirects to the landing
//!   page with the access token in the query string
//!
//! ### Web API proxy
//!
//! - [`me`], [`top_artists`], [`top_tracks`] - forward the `token` query
//!   parameter as a bearer token and return the upstream JSON as is
//!
//! ### Monitoring
//!
//! - [`health`] - status and version
//!
//! All handlers read configuration from the shared [`crate::server::AppState`]
//! extension and keep nothing between requests.

mod callback;
mod health;
mod login;
mod proxy;

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

pub use callback::callback;
pub use health::health;
pub use login::login;
pub use proxy::{me, top_artists, top_tracks};

/// `302 Found` pointing at `location`.
pub(crate) fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}
