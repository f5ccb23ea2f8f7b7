use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Endpoint the original demo polled; used when no config or override is given.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8081/demoEntities";

/// Global configuration loaded from `~/.config/fal/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FalConfig {
    /// REST endpoint to fetch.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Default for FalConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("fal")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FalConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = FalConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: FalConfig = toml::from_str(&data)?;
    Ok(cfg)
}
