//! Config loader — reads `~/.telenote/config.json` and merges env vars.
//!
//! # Loading precedence
//! 1. Defaults (from `Config::default()`)
//! 2. JSON file at `~/.telenote/config.json`
//! 3. Environment variables `TELENOTE_<FIELD>` (override JSON)

use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::schema::Config;

/// Default config file path.
pub fn get_config_path() -> PathBuf {
    crate::utils::get_data_path().join("config.json")
}

/// Load configuration from the given (or default) path + env vars.
///
/// Falls back to `Config::default()` if the file doesn't exist or can't be parsed.
pub fn load_config(path: Option<&Path>) -> Config {
    let config_path = path
        .map(PathBuf::from)
        .unwrap_or_else(get_config_path);

    load_config_from_path(&config_path)
}

/// Load config from a specific file path.
fn load_config_from_path(path: &Path) -> Config {
    if !path.exists() {
        info!("No config file found at {}, using defaults", path.display());
        return apply_env_overrides(Config::default());
    }

    debug!("Loading config from {}", path.display());

    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            warn!("Failed to read config file {}: {}", path.display(), e);
            return apply_env_overrides(Config::default());
        }
    };

    let config: Config = match serde_json::from_str(&content) {
        Ok(c) => c,
        Err(e) => {
            warn!("Failed to parse config JSON: {}", e);
            return apply_env_overrides(Config::default());
        }
    };

    apply_env_overrides(config)
}

/// Save configuration to disk (pretty-printed JSON with camelCase keys).
pub fn save_config(config: &Config, path: Option<&Path>) -> std::io::Result<()> {
    let config_path = path
        .map(PathBuf::from)
        .unwrap_or_else(get_config_path);

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(config).map_err(std::io::Error::other)?;

    std::fs::write(&config_path, json)?;
    debug!("Config saved to {}", config_path.display());
    Ok(())
}

/// Apply environment variable overrides on top of a loaded config.
///
/// Supported overrides:
/// - `TELENOTE_TOKEN` → `token`
/// - `TELENOTE_PARSE_MODE` → `parse_mode`
/// - `TELENOTE_DISABLE_WEB_PAGE_PREVIEW` → `disable_web_page_preview`
/// - `TELENOTE_API_BASE` → `api_base`
/// - `TELENOTE_TIMEOUT_SECS` → `timeout_secs`
fn apply_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary key lookup.
fn apply_overrides(mut config: Config, lookup: impl Fn(&str) -> Option<String>) -> Config {
    if let Some(val) = lookup("TELENOTE_TOKEN") {
        config.token = val;
    }
    if let Some(val) = lookup("TELENOTE_PARSE_MODE") {
        if !val.is_empty() {
            config.parse_mode = Some(val);
        }
    }
    if let Some(val) = lookup("TELENOTE_DISABLE_WEB_PAGE_PREVIEW") {
        config.disable_web_page_preview = val == "true" || val == "1";
    }
    if let Some(val) = lookup("TELENOTE_API_BASE") {
        config.api_base = val;
    }
    if let Some(val) = lookup("TELENOTE_TIMEOUT_SECS") {
        match val.parse::<u64>() {
            Ok(n) => config.timeout_secs = n,
            Err(_) => warn!("Ignoring invalid TELENOTE_TIMEOUT_SECS={}", val),
        }
    }

    config
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
