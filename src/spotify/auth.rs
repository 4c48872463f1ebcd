use reqwest::{Client, header};

use crate::{config::Config, error::AuthError, types::TokenPair, utils};

/// Exchanges an authorization code for an access/refresh token pair.
///
/// Sends one form-encoded POST to the configured token endpoint with the
/// `authorization_code` grant, the code and the redirect URI, authenticated
/// with HTTP Basic client credentials.
///
/// # Errors
///
/// - [`AuthError::Transport`] when the request never gets a response
/// - [`AuthError::Rejected`] when the token endpoint answers with a non-2xx status
/// - [`AuthError::MalformedBody`] when the body is not the expected JSON
pub async fn exchange_code(
    client: &Client,
    config: &Config,
    code: &str,
) -> Result<TokenPair, AuthError> {
    let res = client
        .post(&config.token_url)
        .header(
            header::AUTHORIZATION,
            utils::basic_credentials(&config.client_id, &config.client_secret),
        )
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", config.redirect_uri.as_str()),
        ])
        .send()
        .await
        .map_err(AuthError::Transport)?;

    let status = res.status();
    if !status.is_success() {
        return Err(AuthError::Rejected(status));
    }

    res.json::<TokenPair>()
        .await
        .map_err(AuthError::MalformedBody)
}
