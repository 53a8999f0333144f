//! Config file at `<config_dir>/sgst/config.json`.

use anyhow::{Context, Result};
use sgst_client::ClientConfig;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "config.json";

pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Cannot get config directory")?;
    let dir = base.join("sgst");
    if !dir.exists() {
        fs::create_dir_all(&dir).context("Failed to create config directory")?;
    }
    Ok(dir)
}

/// Load the config, falling back to defaults when the file is missing.
pub fn load_config(dir: &Path) -> Result<ClientConfig> {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(ClientConfig::default());
    }
    let content = fs::read_to_string(&path).context("Failed to read config file")?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file {}", path.display()))
}

pub fn save_config(dir: &Path, config: &ClientConfig) -> Result<()> {
    let path = dir.join(CONFIG_FILE);
    let temp_path = dir.join(format!("{CONFIG_FILE}.tmp"));
    let content = serde_json::to_string_pretty(config)?;

    // Atomic write
    fs::write(&temp_path, content).context("Failed to write temp config")?;
    fs::rename(&temp_path, &path).context("Failed to save config")
}

pub fn update_config<F>(dir: &Path, updater: F) -> Result<ClientConfig>
where
    F: FnOnce(&mut ClientConfig) -> Result<()>,
{
    let mut config = load_config(dir)?;
    updater(&mut config)?;
    save_config(dir, &config)?;
    Ok(config)
}

/// Set one key from its string form.
pub fn apply_setting(config: &mut ClientConfig, key: &str, value: &str) -> Result<()> {
    match key {
        "base_url" => {
            let url = value.trim().trim_end_matches('/');
            url::Url::parse(url).map_err(|e| anyhow::anyhow!("Invalid URL {value}: {e}"))?;
            config.base_url = url.to_string();
        },
        "api_prefix" => config.api_prefix = value.trim().to_string(),
        "timeout_secs" => {
            config.timeout_secs =
                value.parse().map_err(|_| anyhow::anyhow!("Invalid number: {value}"))?;
        },
        "search_debounce_ms" => {
            config.search_debounce_ms =
                value.parse().map_err(|_| anyhow::anyhow!("Invalid number: {value}"))?;
        },
        "page_size" => {
            let size: u32 = value.parse().map_err(|_| anyhow::anyhow!("Invalid number: {value}"))?;
            anyhow::ensure!(size > 0, "page_size must be at least 1");
            config.page_size = size;
        },
        _ => anyhow::bail!("Unknown config key: {key}"),
    }
    Ok(())
}
