//! High-level state management for the proxy.
//!
//! Currently home to the application token cache, the one piece of
//! process-wide mutable state this service owns.

mod auth;

pub use auth::{CachedToken, TokenCache};
