use std::sync::Arc;

use axum::{Extension, extract::Query};

use crate::{
    error::ApiError,
    server::AppState,
    spotify,
    types::{Resource, TokenParams, UpstreamResponse},
};

/// Current user's profile (`GET /v1/me`).
///
/// # Arguments
///
/// * `token` query parameter - access token forwarded as `Authorization: Bearer`
///
/// # Returns
///
/// The upstream status and JSON body unchanged, error responses included.
/// Only a failed connection turns into a local `502`.
///
/// # Example
///
/// ```text
/// GET /me?token=BQC...
/// 200 {"display_name": "...", "id": "...", ...}
/// ```
pub async fn me(
    Query(params): Query<TokenParams>,
    Extension(state): Extension<Arc<AppState>>,
) -> Result<UpstreamResponse, ApiError> {
    forward(&state, Resource::Profile, params).await
}

/// The user's ten most listened artists (`GET /v1/me/top/artists?limit=10`).
///
/// Same forwarding rules as [`me`].
pub async fn top_artists(
    Query(params): Query<TokenParams>,
    Extension(state): Extension<Arc<AppState>>,
) -> Result<UpstreamResponse, ApiError> {
    forward(&state, Resource::TopArtists, params).await
}

/// The user's ten most listened tracks (`GET /v1/me/top/tracks?limit=10`).
///
/// Same forwarding rules as [`me`].
pub async fn top_tracks(
    Query(params): Query<TokenParams>,
    Extension(state): Extension<Arc<AppState>>,
) -> Result<UpstreamResponse, ApiError> {
    forward(&state, Resource::TopTracks, params).await
}

async fn forward(
    state: &AppState,
    resource: Resource,
    params: TokenParams,
) -> Result<UpstreamResponse, ApiError> {
    // Missing token is forwarded as empty; the provider decides.
    let token = params.token.unwrap_or_default();

    spotify::client::get_resource(&state.http, &state.config.api_url, resource, &token)
        .await
        .inspect_err(|e| tracing::warn!(error = ?e, ?resource, "proxy request failed"))
}
