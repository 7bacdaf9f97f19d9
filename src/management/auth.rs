use chrono::Utc;
use reqwest::Client;
use tokio::sync::Mutex;

use crate::{config::SpotifyConfig, errors::ProxyError, info, spotify, types::Token};

/// Retire tokens this many seconds before their reported expiry to absorb
/// clock skew and in-flight latency.
const EXPIRY_MARGIN_SECS: i64 = 60;

/// A cached application token with its retirement instant.
#[derive(Debug, Clone)]
pub struct CachedToken {
    pub access_token: String,
    pub expires_at: i64,
}

impl CachedToken {
    /// Records a freshly exchanged token obtained at `obtained_at`
    /// (unix seconds).
    pub fn issued(token: &Token, obtained_at: i64) -> Self {
        CachedToken {
            access_token: token.access_token.clone(),
            expires_at: obtained_at + token.expires_in as i64 - EXPIRY_MARGIN_SECS,
        }
    }

    /// Usable iff the current time is strictly before the retirement
    /// instant.
    pub fn is_current(&self, now: i64) -> bool {
        now < self.expires_at
    }
}

/// Process-wide cache for the application access token.
///
/// Constructed once at startup and shared behind the application state.
/// The slot is empty until the first exchange and is refreshed in place
/// whenever a caller finds it expired; it is never persisted.
pub struct TokenCache {
    slot: Mutex<Option<CachedToken>>,
}

impl TokenCache {
    pub fn new() -> Self {
        TokenCache {
            slot: Mutex::new(None),
        }
    }

    /// Returns a valid access token, exchanging credentials if the cached
    /// one is absent or expired.
    ///
    /// The fast path takes the lock only long enough to clone the token.
    /// The exchange itself runs outside the lock, so overlapping callers
    /// that all observe an expired slot may each perform a redundant
    /// exchange; the last writer wins and every fetched token remains
    /// individually valid.
    ///
    /// A failed exchange leaves the slot as it was, so the next caller
    /// retries.
    pub async fn get_valid_token(
        &self,
        http: &Client,
        cfg: &SpotifyConfig,
    ) -> Result<String, ProxyError> {
        {
            let slot = self.slot.lock().await;
            if let Some(cached) = slot.as_ref() {
                if cached.is_current(Utc::now().timestamp()) {
                    return Ok(cached.access_token.clone());
                }
            }
        }

        let token = spotify::auth::request_token(http, cfg).await?;
        info!(
            "Exchanged application credentials; token valid for {}s",
            token.expires_in
        );

        let cached = CachedToken::issued(&token, Utc::now().timestamp());
        let access_token = cached.access_token.clone();
        *self.slot.lock().await = Some(cached);
        Ok(access_token)
    }

    /// Snapshot of the cached token, if any. Used by tests to observe the
    /// slot without going through an exchange.
    pub async fn cached(&self) -> Option<CachedToken> {
        self.slot.lock().await.clone()
    }
}

impl Default for TokenCache {
    fn default() -> Self {
        Self::new()
    }
}
