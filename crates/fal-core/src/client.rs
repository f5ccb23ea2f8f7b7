//! Fetch-and-log client: one GET, one completion, one console line.
//!
//! The request lifecycle has two states. `PendingFetch` is the pending state
//! (sent, no completion processed); `FetchReport` is the done state.
//! `complete` consumes the pending request by value, so a second completion
//! for the same request is unrepresentable.

use anyhow::{Context, Result};

use crate::config::FalConfig;
use crate::console;
use crate::request::RequestDescriptor;
use crate::transport::{self, Completion};

/// A request whose completion has not yet been processed.
#[derive(Debug)]
pub struct PendingFetch {
    descriptor: RequestDescriptor,
}

impl PendingFetch {
    pub fn descriptor(&self) -> &RequestDescriptor {
        &self.descriptor
    }

    /// Fold the transport's completion signal into the final report.
    pub fn complete(self, completion: Completion) -> FetchReport {
        FetchReport {
            status: console::completion_status(&completion),
            line: console::console_line(&completion),
            descriptor: self.descriptor,
        }
    }
}

/// Report for one completed request: exactly one console line.
#[derive(Debug)]
pub struct FetchReport {
    /// The request that produced this report.
    pub descriptor: RequestDescriptor,
    /// Observed status code (0 for transport-level failures).
    pub status: u32,
    /// The one console line to print.
    pub line: String,
}

/// The fetch-and-log client. Issues exactly one GET per `run`.
pub struct FetchClient {
    endpoint: String,
}

impl FetchClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config(cfg: &FalConfig) -> Self {
        Self::new(cfg.endpoint.clone())
    }

    /// Issue the GET and wait for its completion.
    ///
    /// The blocking curl transfer runs on a worker thread; the caller's task
    /// suspends at this one await point until the transport completes. Errors
    /// are setup failures only; every reachable status code (and the status-0
    /// transport failure) produces an `Ok` report.
    pub async fn run(&self) -> Result<FetchReport> {
        let pending = PendingFetch {
            descriptor: RequestDescriptor::get(&self.endpoint),
        };
        let descriptor = pending.descriptor.clone();
        tracing::debug!("sending {} {}", descriptor.method, descriptor.url);

        let completion = tokio::task::spawn_blocking(move || transport::perform(&descriptor))
            .await
            .context("transport worker panicked")??;

        let report = pending.complete(completion);
        tracing::debug!("done: status={} line={:?}", report.status, report.line);
        Ok(report)
    }
}
