//! Transport setup errors.

use thiserror::Error;

/// Errors raised before the request is sent.
///
/// Failures after send are not errors; they come back as
/// `Completion::TransportFailed` so the status-0 branch can handle them.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The endpoint URL did not parse.
    #[error("invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// The endpoint URL has a scheme other than http/https.
    #[error("unsupported URL scheme: {0}")]
    UnsupportedScheme(String),
    /// Configuring the curl handle failed.
    #[error("curl setup failed: {0}")]
    Setup(curl::Error),
}
