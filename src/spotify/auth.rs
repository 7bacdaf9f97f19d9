use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::{Client, header};

use crate::{config::SpotifyConfig, errors::ProxyError, types::Token};

/// Performs a client-credentials token exchange.
///
/// Authenticates to the token endpoint with
/// `Authorization: Basic base64(client_id:client_secret)` and requests an
/// application-scoped grant. This is the only place the client secret is
/// ever used.
///
/// # Returns
///
/// - `Ok(Token)` - Fresh access token and its validity duration in seconds
/// - `Err(ProxyError::Auth)` - The endpoint rejected the exchange; carries
///   the upstream status code and body text
/// - `Err(ProxyError::Internal)` - Network failure or an unparseable
///   response body
///
/// # API Documentation
///
/// Uses the OAuth 2.0 `client_credentials` grant as specified by Spotify's
/// token endpoint: form-encoded body, basic authentication, JSON response
/// containing `access_token` and `expires_in`.
pub async fn request_token(http: &Client, cfg: &SpotifyConfig) -> Result<Token, ProxyError> {
    let credentials = STANDARD.encode(format!("{}:{}", cfg.client_id, cfg.client_secret));

    let response = http
        .post(&cfg.token_url)
        .header(header::AUTHORIZATION, format!("Basic {credentials}"))
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body("grant_type=client_credentials")
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ProxyError::Auth {
            status: status.as_u16(),
            body,
        });
    }

    let token = response.json::<Token>().await?;
    Ok(token)
}
