use std::{net::SocketAddr, sync::Arc};

use axum::{
    Extension, Router,
    body::Body,
    http::Request,
    routing::get,
};
use reqwest::Client;
use tokio::net::TcpListener;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing::Span;

use crate::{Res, api, config::Config};

/// State shared by every handler: immutable configuration and one HTTP client.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Config,
    pub http: Client,
}

impl AppState {
    /// Wraps the configuration together with a fresh connection pool.
    ///
    /// The same `reqwest::Client` serves the token exchange and every proxied
    /// request, so keep-alive connections to Spotify are reused across users.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }
}

/// Span opened for every inbound request.
///
/// Records the method and the path only. The query string carries the access
/// token on the proxy routes and the landing page, and the authorization code
/// on `/callback`.
pub fn request_span(request: &Request<Body>) -> Span {
    tracing::info_span!(
        "request",
        method = %request.method(),
        path = %request.uri().path(),
    )
}

/// Builds the application router.
///
/// `/profile` maps to `profile.html` and every unmatched path falls back to a
/// file lookup under the configured public directory.
pub fn router(state: Arc<AppState>) -> Router {
    let public_dir = state.config.public_dir.clone();

    Router::new()
        .route("/health", get(api::health))
        .route("/login", get(api::login))
        .route("/callback", get(api::callback))
        .route("/me", get(api::me))
        .route("/top-artists", get(api::top_artists))
        .route("/top-tracks", get(api::top_tracks))
        .route_service("/profile", ServeFile::new(public_dir.join("profile.html")))
        .fallback_service(ServeDir::new(public_dir))
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
}

/// Binds the listening socket for the configured host and port.
///
/// Kept apart from [`serve`] so the caller learns about an address already in
/// use before announcing the server.
///
/// # Errors
///
/// Returns the underlying I/O error when the address cannot be bound.
///
/// # Example
///
/// ```
/// let listener = server::bind(&config).await?;
/// success!("App running at {}", listener.local_addr()?);
/// server::serve(listener, state).await?;
/// ```
pub async fn bind(config: &Config) -> Res<TcpListener> {
    let addr = SocketAddr::new(config.host, config.port);
    Ok(TcpListener::bind(addr).await?)
}

/// Serves the router on an already bound listener until the process is stopped.
pub async fn serve(listener: TcpListener, state: Arc<AppState>) -> Res<()> {
    tracing::info!(addr = %listener.local_addr()?, "listening");
    axum::serve(listener, router(state)).await?;
    Ok(())
}
