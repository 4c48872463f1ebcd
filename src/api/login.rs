use std::sync::Arc;

use axum::{Extension, response::Response};

use crate::{server::AppState, utils};

/// Redirects the browser to the Spotify authorization page.
///
/// Builds the URL from the configured client id and redirect URI with the
/// fixed read-only scopes and answers `302 Found`. No request leaves the
/// server here; a misconfigured client only shows up on Spotify's side.
///
/// # Example
///
/// ```text
/// GET /login
/// 302 Location: https://accounts.spotify.com/authorize?response_type=code&client_id=abc&scope=user-read-email%20user-top-read%20playlist-read-private&redirect_uri=http%3A%2F%2Fx%2Fy
/// ```
pub async fn login(Extension(state): Extension<Arc<AppState>>) -> Response {
    super::found(&utils::authorize_url(&state.config))
}
