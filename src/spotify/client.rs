use reqwest::{Client, header};

use crate::{
    error::ApiError,
    types::{Resource, UpstreamResponse},
    utils,
};

/// Issues a bearer-authenticated GET for a Web API resource.
///
/// The token is not checked. Non-2xx answers are not errors here: the status,
/// content type and body come back untouched so the caller can forward them.
///
/// # Errors
///
/// - [`ApiError::Transport`] when no response is received
/// - [`ApiError::Body`] when the body cannot be read to the end
pub async fn get_resource(
    client: &Client,
    api_url: &str,
    resource: Resource,
    token: &str,
) -> Result<UpstreamResponse, ApiError> {
    let url = utils::api_endpoint(api_url, resource.path());

    let res = client
        .get(&url)
        .bearer_auth(token)
        .send()
        .await
        .map_err(ApiError::Transport)?;

    let status = res.status();
    let content_type = res.headers().get(header::CONTENT_TYPE).cloned();
    let body = res.bytes().await.map_err(ApiError::Body)?;

    Ok(UpstreamResponse {
        status,
        content_type,
        body,
    })
}
