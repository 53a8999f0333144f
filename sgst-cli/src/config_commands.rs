use anyhow::Result;
use colored::Colorize;
use sgst_client::ClientConfig;
use std::path::Path;

use crate::config::{apply_setting, update_config};

pub fn show(config: &ClientConfig, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(config)?);
        return Ok(());
    }

    println!("{}", "SGST Configuration:".cyan().bold());
    println!("  Backend: {}", config.base_url);
    println!("  API prefix: {}", config.api_prefix);
    println!("  API root: {}", config.api_root());
    println!("  Timeout: {}s", config.timeout_secs);
    println!("  Search debounce: {}ms", config.search_debounce_ms);
    println!("  Page size: {}", config.page_size);
    Ok(())
}

pub fn set(dir: &Path, key: &str, value: &str) -> Result<()> {
    update_config(dir, |config| apply_setting(config, key, value))?;
    println!("{} Config updated: {} = {}", "✓".green(), key, value);
    Ok(())
}
