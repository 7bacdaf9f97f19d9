use thiserror::Error;

/// Error taxonomy for the fetch pipeline.
///
/// Every failure between an inbound request and the response falls into one
/// of three kinds. The HTTP boundary in `api::playlist` translates them:
/// `Resource` forwards the upstream status and body verbatim, everything
/// else becomes a 500 with the error's textual form.
#[derive(Error, Debug)]
pub enum ProxyError {
    /// The client-credentials exchange was rejected by the token endpoint.
    #[error("token exchange failed with status {status}: {body}")]
    Auth { status: u16, body: String },
    /// The resource fetch returned a non-success status; passed through as-is.
    #[error("upstream returned status {status}")]
    Resource { status: u16, body: String },
    /// Network failure, parse failure, or a programming error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<reqwest::Error> for ProxyError {
    fn from(e: reqwest::Error) -> Self {
        ProxyError::Internal(e.to_string())
    }
}
