use axum::{Extension, Router, routing::get};
use reqwest::Client;
use std::{net::SocketAddr, str::FromStr, sync::Arc};

use crate::{api, config, config::SpotifyConfig, error, management::TokenCache, spotify};

/// Shared state for the request-handling path: the upstream HTTP client,
/// the Spotify configuration and the process-wide token cache.
pub struct AppState {
    pub http: Client,
    pub spotify: SpotifyConfig,
    pub tokens: TokenCache,
    pub default_market: String,
}

impl AppState {
    pub fn from_env() -> Self {
        AppState {
            http: spotify::http_client(),
            spotify: SpotifyConfig::from_env(),
            tokens: TokenCache::new(),
            default_market: config::default_market(),
        }
    }
}

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route(
            "/api/playlist/{id}",
            get(api::playlist).layer(Extension(state)),
        )
}

pub async fn start_api_server(state: Arc<AppState>, addr: &str) {
    let addr = match SocketAddr::from_str(addr) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app(state)).await.unwrap();
}
