//! `fal config` – show the resolved config path and endpoint.

use anyhow::Result;
use fal_core::config::{self, FalConfig};

pub fn run_config(cfg: &FalConfig) -> Result<()> {
    let path = config::config_path()?;
    println!("config: {}", path.display());
    println!("endpoint: {}", cfg.endpoint);
    Ok(())
}
