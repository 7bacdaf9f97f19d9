//! # API Module
//!
//! HTTP endpoints exposed to the browser client. This is the only layer
//! that knows about status codes and response envelopes; everything below
//! it works with typed results.
//!
//! ## Endpoints
//!
//! - [`playlist`] - `GET /api/playlist/{id}` with an optional `market`
//!   query parameter. Returns the projected playlist on success, forwards
//!   the upstream status with an `{"error": ...}` envelope on upstream
//!   failure, and reports anything else as a 500.
//! - [`health`] - `GET /health` liveness probe for monitoring systems and
//!   load balancers.
//!
//! ## Error Translation
//!
//! All failures from the fetch pipeline are caught here, at a single
//! boundary. There is no per-step recovery and no retry; a failed exchange
//! or fetch is retried only by a new inbound request.

mod health;
mod playlist;

pub use health::health;
pub use playlist::playlist;
