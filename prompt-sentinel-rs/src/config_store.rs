//! Configuration file discovery and persistence

use anyhow::{bail, Context, Result};
use prompt_validation::Config;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_DIR: &str = "promptsentinel";
const CONFIG_FILE: &str = "config.json";
const FALLBACK_CONFIG_FILE: &str = "promptsentinel.json";

/// `~/.config/promptsentinel/config.json`, or `./promptsentinel.json` without a home directory
pub fn default_config_path() -> PathBuf {
    match dirs::home_dir() {
        Some(home) => home.join(".config").join(CONFIG_DIR).join(CONFIG_FILE),
        None => PathBuf::from(".").join(FALLBACK_CONFIG_FILE),
    }
}

/// Explicit path if given, otherwise the default location
pub fn config_path(explicit: Option<&Path>) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(default_config_path)
}

/// Load a configuration file; a missing file yields the defaults
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        log::debug!("No configuration at {}, using defaults", path.display());
        return Ok(Config::default());
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config: Config = serde_json::from_str(&data)
        .with_context(|| format!("failed to parse config file {}", path.display()))?;

    for pattern in config.invalid_patterns() {
        log::warn!("Pattern '{}' does not compile and will be skipped", pattern);
    }

    Ok(config)
}

/// Write a configuration as pretty-printed JSON, creating parent directories
pub fn save_config(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create config directory {}", parent.display()))?;
    }

    let data = serde_json::to_string_pretty(config).context("failed to marshal config")?;
    fs::write(path, data)
        .with_context(|| format!("failed to write config file {}", path.display()))?;

    log::info!("Saved configuration to {}", path.display());
    Ok(())
}

/// Write the default configuration unless a file already exists
pub fn init_config(path: &Path) -> Result<Config> {
    if path.exists() {
        bail!("configuration file already exists at {}", path.display());
    }

    let config = Config::default();
    save_config(&config, path)?;
    Ok(config)
}
