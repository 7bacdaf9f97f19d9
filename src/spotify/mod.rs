//! # Spotify Integration Module
//!
//! This module is the outbound half of the proxy: everything that talks to
//! the Spotify Web API lives here. It handles the application-level
//! authentication exchange and the playlist fetch, and owns the HTTP client
//! both go through.
//!
//! ## Core Modules
//!
//! - [`auth`] - Client-credentials token exchange. The application
//!   identifier and secret are combined into a single basic-auth header;
//!   no end user is involved and no secret ever reaches the browser.
//! - [`playlist`] - Playlist retrieval and the fetch pipeline that turns an
//!   inbound request into a projected response or a typed error.
//!
//! ## Error Handling
//!
//! Both submodules return [`crate::errors::ProxyError`]. Upstream
//! non-success statuses are captured with their body text and either
//! surfaced as an authentication failure (token endpoint) or passed through
//! verbatim to the caller (resource endpoint). Nothing in this module
//! retries; a failed call is retried only by a new inbound request.

pub mod auth;
pub mod playlist;

use std::time::Duration;

use reqwest::Client;

const HTTP_TIMEOUT_SECS: u64 = 10;
const HTTP_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Builds the shared HTTP client used for every upstream call.
///
/// The explicit timeouts bound a hang-on-connect upstream; without them a
/// stalled fetch would leave the triggering request pending indefinitely.
pub fn http_client() -> Client {
    Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .connect_timeout(Duration::from_secs(HTTP_CONNECT_TIMEOUT_SECS))
        .build()
        .expect("failed to build HTTP client")
}
