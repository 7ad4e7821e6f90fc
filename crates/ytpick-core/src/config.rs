use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/ytpick/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YtpickConfig {
    /// Resolution tokens a listing row must carry to count as video.
    #[serde(default = "default_resolutions")]
    pub resolutions: Vec<String>,
    /// Fragments the downloader fetches in parallel per stream.
    #[serde(default = "default_concurrent_fragments")]
    pub concurrent_fragments: u32,
    /// Directory downloads land in, relative to the working directory.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// JS runtime yt-dlp uses for player extraction.
    #[serde(default = "default_js_runtime")]
    pub js_runtime: String,
}

fn default_resolutions() -> Vec<String> {
    ["2160", "1440", "1080"].iter().map(|s| s.to_string()).collect()
}

fn default_concurrent_fragments() -> u32 {
    4
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("videos")
}

fn default_js_runtime() -> String {
    "node".to_string()
}

impl Default for YtpickConfig {
    fn default() -> Self {
        Self {
            resolutions: default_resolutions(),
            concurrent_fragments: default_concurrent_fragments(),
            output_dir: default_output_dir(),
            js_runtime: default_js_runtime(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("ytpick")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<YtpickConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = YtpickConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: YtpickConfig = toml::from_str(&data)?;
    Ok(cfg)
}
