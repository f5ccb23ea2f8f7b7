//! Single HTTP GET transfer.
//!
//! Uses the curl crate (libcurl) to send one GET and collect the status code
//! and response body. No timeouts and no cancellation: the transfer either
//! completes or never does. A network-level failure after send is a
//! completion, not an error; it feeds the status-0 branch downstream.

mod error;

pub use error::TransportError;

use crate::request::RequestDescriptor;

/// Terminal outcome of one transfer.
#[derive(Debug)]
pub enum Completion {
    /// The server answered with a status code and body.
    Response { status: u32, body: Vec<u8> },
    /// The transfer never reached a terminal status (connect refused, DNS
    /// failure, reset mid-stream).
    TransportFailed(curl::Error),
}

/// Sends the described request and waits for its completion.
///
/// Runs in the current thread; call from `spawn_blocking` if used from async
/// code. Setup failures (invalid URL, handle configuration) are hard errors;
/// anything that goes wrong after send comes back as
/// `Completion::TransportFailed`.
pub fn perform(request: &RequestDescriptor) -> Result<Completion, TransportError> {
    let parsed = url::Url::parse(&request.url)?;
    match parsed.scheme() {
        "http" | "https" => {}
        other => return Err(TransportError::UnsupportedScheme(other.to_string())),
    }

    let mut easy = curl::easy::Easy::new();
    easy.url(&request.url).map_err(TransportError::Setup)?;
    easy.get(true).map_err(TransportError::Setup)?;
    easy.follow_location(true).map_err(TransportError::Setup)?;
    easy.max_redirections(10).map_err(TransportError::Setup)?;

    let mut body: Vec<u8> = Vec::new();
    let sent = {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })
            .map_err(TransportError::Setup)?;
        transfer.perform()
    };

    if let Err(e) = sent {
        tracing::debug!("GET {} failed before a terminal status: {}", request.url, e);
        return Ok(Completion::TransportFailed(e));
    }

    let status = easy.response_code().map_err(TransportError::Setup)?;
    tracing::debug!(
        "GET {} completed with status {} ({} body bytes)",
        request.url,
        status,
        body.len()
    );
    Ok(Completion::Response { status, body })
}
