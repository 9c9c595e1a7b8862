//! Dashboard configuration: the feed endpoint and view defaults.
//!
//! A small TOML document supplies the feed URL plus the defaults the view
//! starts from. Only `feed_url` is required:
//!
//! ```toml
//! feed_url = "https://rates.example.net/json/exchange-rate.json"
//! default_start_date = "2023-11-25"
//! default_initial_value = 100000000.0
//! ```
//!
//! Entrypoints:
//! - Parse from a TOML string: [`load_config_str`]
//! - Read + parse from a file path: [`load_config_path`]
//! - Locate the file (flag, then environment, then cwd):
//!   [`resolve_config_path`]

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Environment variable consulted for the config path when the CLI flag is
/// absent.
pub const CONFIG_PATH_ENV: &str = "RATE_DASHBOARD_CONFIG";

const DEFAULT_CONFIG_PATH: &str = "rate_dashboard.toml";

/// Parsed dashboard configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DashboardConfig {
    /// Absolute URL of the exchange-rate JSON document.
    pub feed_url: String,

    /// Start of the default date range shown on first load; the end is
    /// always "today".
    #[serde(default = "default_start_date")]
    pub default_start_date: NaiveDate,

    /// Default amount for the adjusted-value projection.
    #[serde(default = "default_initial_value")]
    pub default_initial_value: f64,
}

fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 11, 25).unwrap()
}

fn default_initial_value() -> f64 {
    100_000_000.0
}

/// Parses a config from a TOML string.
///
/// Errors:
/// - TOML parse failures (unknown fields included)
/// - An empty `feed_url`
pub fn load_config_str(toml_str: &str) -> anyhow::Result<DashboardConfig> {
    let cfg: DashboardConfig =
        toml::from_str(toml_str).context("failed to parse dashboard config TOML")?;
    if cfg.feed_url.trim().is_empty() {
        bail!("feed_url cannot be empty");
    }
    Ok(cfg)
}

/// Reads a config TOML file from disk and parses it.
///
/// See [`load_config_str`] for parsing details.
pub fn load_config_path(path: impl AsRef<Path>) -> anyhow::Result<DashboardConfig> {
    let text = std::fs::read_to_string(path.as_ref())
        .with_context(|| format!("read config file {}", path.as_ref().display()))?;
    load_config_str(&text)
}

/// Resolves the config file location: the CLI flag wins, then the
/// `RATE_DASHBOARD_CONFIG` variable, then `./rate_dashboard.toml`.
pub fn resolve_config_path(flag: Option<&str>) -> PathBuf {
    if let Some(path) = flag {
        return PathBuf::from(path);
    }
    if let Some(path) = shared_utils::env::optional_var(CONFIG_PATH_ENV) {
        return PathBuf::from(path);
    }
    PathBuf::from(DEFAULT_CONFIG_PATH)
}
