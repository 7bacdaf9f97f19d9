//! Spotify Playlist Proxy Library
//!
//! This library implements a small backend proxy that sits between a browser
//! client and the Spotify Web API. It authenticates as an application using
//! the client-credentials grant, caches the resulting access token, and
//! reduces the verbose upstream playlist representation to the minimal shape
//! the frontend consumes. The client secret never leaves this process.
//!
//! # Modules
//!
//! - `api` - HTTP endpoint handlers exposed to the browser client
//! - `config` - Configuration management and environment variables
//! - `errors` - The error taxonomy for the fetch pipeline
//! - `management` - Application token caching and refresh
//! - `server` - Router construction and the HTTP serve loop
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Pure helpers: region resolution and projection
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use playlist_proxy::{config, server};
//!
//! #[tokio::main]
//! async fn main() {
//!     config::load_env().await.unwrap();
//!     let state = Arc::new(server::AppState::from_env());
//!     server::start_api_server(state, &config::server_addr()).await;
//! }
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod management;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern at the outermost layer using a
/// boxed dynamic error trait object. The core fetch pipeline uses the typed
/// [`errors::ProxyError`] instead; this alias is for glue code and tests.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Listening on {}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Loaded Spotify application credentials");
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// # Behavior
///
/// This macro terminates the process with exit code 1 after printing. It is
/// reserved for unrecoverable startup errors; request-time failures go
/// through [`errors::ProxyError`] and are reported to the caller instead.
///
/// # Example
///
/// ```
/// error!("Failed to parse server address: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// # Example
///
/// ```
/// warning!("Upstream returned {} for playlist {}", status, id);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
