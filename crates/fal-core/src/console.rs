//! Status classification and console line rendering.
//!
//! The three-way branch on the HTTP status code is the whole observable
//! contract: 200 prints the body, 400 prints a fixed message, anything else
//! prints the code. A transport-level failure never reached a terminal
//! status and reports code 0, the same value XMLHttpRequest exposes.

use crate::transport::Completion;

/// Three-way classification of a completion's status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    Ok200,
    BadRequest400,
    Other(u32),
}

/// Classify a raw status code.
pub fn classify_status(status: u32) -> StatusClass {
    match status {
        200 => StatusClass::Ok200,
        400 => StatusClass::BadRequest400,
        other => StatusClass::Other(other),
    }
}

/// Status code observed for a completion (0 for transport-level failures).
pub fn completion_status(completion: &Completion) -> u32 {
    match completion {
        Completion::Response { status, .. } => *status,
        Completion::TransportFailed(_) => 0,
    }
}

/// Render the single console line for a completion.
///
/// Non-UTF-8 bodies are rendered lossily; the 400 branch ignores the body.
pub fn console_line(completion: &Completion) -> String {
    match completion {
        Completion::Response { status, body } => match classify_status(*status) {
            StatusClass::Ok200 => format!("response: {}", String::from_utf8_lossy(body)),
            StatusClass::BadRequest400 => "There was an error 400".to_string(),
            StatusClass::Other(code) => {
                format!("something else other than 200 was returned: {}", code)
            }
        },
        Completion::TransportFailed(_) => {
            "something else other than 200 was returned: 0".to_string()
        }
    }
}
