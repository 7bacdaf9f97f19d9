use reqwest::Client;

use crate::{
    config::SpotifyConfig,
    errors::ProxyError,
    server::AppState,
    types::{PlaylistResponse, ProjectedPlaylist},
    utils,
};

/// Runs the full fetch pipeline for one inbound playlist request.
///
/// Resolves the market, acquires a valid application token from the cache,
/// fetches the playlist from the upstream API and projects it into the
/// reduced client shape. Each failure surfaces as the matching
/// [`ProxyError`] variant; translation to an HTTP response happens only at
/// the endpoint boundary.
///
/// # Arguments
///
/// * `state` - Shared application state (HTTP client, config, token cache)
/// * `id` - Opaque upstream playlist identifier, not validated here
/// * `market` - Caller-supplied region code, if any
pub async fn fetch_playlist(
    state: &AppState,
    id: &str,
    market: Option<&str>,
) -> Result<ProjectedPlaylist, ProxyError> {
    let market = utils::resolve_market(market, &state.default_market);
    let token = state
        .tokens
        .get_valid_token(&state.http, &state.spotify)
        .await?;
    let playlist = get_playlist(&state.http, &state.spotify, &token, id, &market).await?;
    Ok(utils::project_playlist(playlist))
}

/// Retrieves a playlist by identifier from the Spotify Web API.
///
/// Issues an authenticated GET against the region-aware playlist endpoint.
/// A non-success response is captured as [`ProxyError::Resource`] with the
/// upstream status code and body text so the caller can forward both
/// verbatim. No retries.
pub async fn get_playlist(
    http: &Client,
    cfg: &SpotifyConfig,
    token: &str,
    id: &str,
    market: &str,
) -> Result<PlaylistResponse, ProxyError> {
    let api_url = format!(
        "{url}/playlists/{id}?market={market}",
        url = &cfg.api_url,
        id = id,
        market = market
    );

    let response = http.get(&api_url).bearer_auth(token).send().await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ProxyError::Resource {
            status: status.as_u16(),
            body,
        });
    }

    let playlist = response.json::<PlaylistResponse>().await?;
    Ok(playlist)
}
