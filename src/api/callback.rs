use std::sync::Arc;

use axum::{Extension, extract::Query, response::Response};

use crate::{error::AuthError, server::AppState, spotify, types::CallbackParams, utils};

/// Completes the authorization-code flow.
///
/// A provider-reported `error` short-circuits without calling the token
/// endpoint. Otherwise the `code` (empty when absent) is exchanged and the
/// browser is sent to the landing page with the access token attached.
pub async fn callback(
    Query(params): Query<CallbackParams>,
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Response, AuthError> {
    if let Some(reason) = params.error {
        tracing::warn!(%reason, "authorization denied");
        return Err(AuthError::Denied(reason));
    }

    let code = params.code.unwrap_or_default();

    let tokens = spotify::auth::exchange_code(&state.http, &state.config, &code)
        .await
        .inspect_err(|e| tracing::warn!(error = ?e, "token exchange failed"))?;

    Ok(super::found(&utils::landing_url(&tokens.access_token)))
}
