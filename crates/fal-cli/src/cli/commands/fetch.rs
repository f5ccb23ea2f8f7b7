//! `fal fetch` – run the client once and print its console line.

use anyhow::Result;
use fal_core::client::FetchClient;
use fal_core::config::FalConfig;

/// Fetch the endpoint (config value, or `--url` override) and print the one
/// outcome line. Every status branch is a successful run; only setup
/// failures (bad URL, panicked worker) bubble up as errors.
pub async fn run_fetch(cfg: &FalConfig, url_override: Option<&str>) -> Result<()> {
    let client = match url_override {
        Some(url) => FetchClient::new(url),
        None => FetchClient::from_config(cfg),
    };
    let report = client.run().await?;
    println!("{}", report.line);
    Ok(())
}
