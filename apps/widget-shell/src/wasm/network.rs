use super::*;

use gloo_net::http::Request;

/// Issues the single credential-less configuration fetch and hands the raw
/// status and body back to the core for classification. No retry and no
/// timeout; a hung request leaves the widget absent.
pub(super) async fn fetch_config_body(url: &str) -> Result<(u16, String), BootstrapError> {
    let response = Request::get(url)
        .credentials(web_sys::RequestCredentials::Omit)
        .send()
        .await
        .map_err(|error| BootstrapError::Network(error.to_string()))?;
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|error| BootstrapError::Network(error.to_string()))?;
    Ok((status, body))
}
