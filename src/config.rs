//! Configuration management for the playlist proxy.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. Credentials are required and the
//! process refuses to start without them; endpoint URLs, the default market
//! and the listen address carry sensible defaults that can be overridden.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. `.env` file in the working directory
//! 4. Application defaults (where applicable)

use dotenv;
use std::{env, path::PathBuf};

/// Loads environment variables from a `.env` file.
///
/// Looks for the file in the platform-specific local data directory under
/// `playlist-proxy/.env` (creating the directory if needed) and falls back
/// to a `.env` in the working directory. A missing file is not an error;
/// deployments that inject real environment variables need neither.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/playlist-proxy/.env`
/// - macOS: `~/Library/Application Support/playlist-proxy/.env`
/// - Windows: `%LOCALAPPDATA%/playlist-proxy/.env`
///
/// # Errors
///
/// Returns an error only if the parent directory cannot be created.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("playlist-proxy/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if dotenv::from_path(&path).is_err() {
        dotenv::dotenv().ok();
    }
    Ok(())
}

/// Returns the address and port the proxy binds to.
///
/// Reads the `SERVER_ADDRESS` environment variable, defaulting to
/// `127.0.0.1:3001`.
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| "127.0.0.1:3001".to_string())
}

/// Returns the Spotify application client ID.
///
/// # Panics
///
/// Panics if the `SPOTIFY_CLIENT_ID` environment variable is not set.
pub fn spotify_client_id() -> String {
    env::var("SPOTIFY_CLIENT_ID").expect("SPOTIFY_CLIENT_ID must be set")
}

/// Returns the Spotify application client secret.
///
/// # Panics
///
/// Panics if the `SPOTIFY_CLIENT_SECRET` environment variable is not set.
///
/// # Security Note
///
/// The client secret should be kept confidential and never exposed in logs
/// or version control. Keeping it server-side is the reason this proxy
/// exists.
pub fn spotify_client_secret() -> String {
    env::var("SPOTIFY_CLIENT_SECRET").expect("SPOTIFY_CLIENT_SECRET must be set")
}

/// Returns the token exchange URL, defaulting to the public Spotify
/// accounts endpoint. Overridable for tests and staging.
pub fn spotify_token_url() -> String {
    env::var("SPOTIFY_TOKEN_URL")
        .unwrap_or_else(|_| "https://accounts.spotify.com/api/token".to_string())
}

/// Returns the Web API base URL, defaulting to the public Spotify API.
pub fn spotify_api_url() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| "https://api.spotify.com/v1".to_string())
}

/// Returns the market used when a request carries no usable `market`
/// parameter. Reads `DEFAULT_MARKET`, defaulting to `FR`.
pub fn default_market() -> String {
    env::var("DEFAULT_MARKET").unwrap_or_else(|_| "FR".to_string())
}

/// Everything the upstream client needs to talk to Spotify.
///
/// Built once at startup and injected into the request path, so the core
/// stays testable against a stub endpoint without touching process
/// environment.
#[derive(Debug, Clone)]
pub struct SpotifyConfig {
    pub client_id: String,
    pub client_secret: String,
    pub token_url: String,
    pub api_url: String,
}

impl SpotifyConfig {
    pub fn from_env() -> Self {
        SpotifyConfig {
            client_id: spotify_client_id(),
            client_secret: spotify_client_secret(),
            token_url: spotify_token_url(),
            api_url: spotify_api_url(),
        }
    }
}
