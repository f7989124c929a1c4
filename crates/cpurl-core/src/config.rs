use crate::host::HostOs;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// OS family assumed when encoding/normalizing paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OsChoice {
    /// Use the OS family of the host this process runs on.
    #[default]
    Auto,
    Windows,
    Posix,
}

impl OsChoice {
    /// Resolve the choice to a concrete [`HostOs`].
    pub fn resolve(self) -> HostOs {
        match self {
            OsChoice::Auto => HostOs::current(),
            OsChoice::Windows => HostOs::Windows,
            OsChoice::Posix => HostOs::Posix,
        }
    }
}

/// Global configuration loaded from `~/.config/cpurl/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CpurlConfig {
    /// OS family for drive-letter handling: "auto" (default), "windows" or "posix".
    #[serde(default)]
    pub os: OsChoice,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("cpurl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<CpurlConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = CpurlConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: CpurlConfig = toml::from_str(&data)?;
    Ok(cfg)
}
