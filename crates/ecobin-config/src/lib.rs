//! Shared configuration for the EcoBin CLI.
//!
//! TOML file + environment loading via figment, and translation to
//! `ecobin_core::SyncConfig`.

use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use ecobin_core::SyncConfig;

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Backend base URL (e.g., "http://localhost:5000").
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Seconds between background refresh cycles.
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_secs: u64,

    /// Number of history entries fetched per refresh.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// Number of leaderboard rows fetched per refresh.
    #[serde(default = "default_leaderboard_limit")]
    pub leaderboard_limit: usize,

    /// Display defaults.
    #[serde(default)]
    pub defaults: Defaults,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_secs: default_timeout(),
            refresh_interval_secs: default_refresh_interval(),
            history_limit: default_history_limit(),
            leaderboard_limit: default_leaderboard_limit(),
            defaults: Defaults::default(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
        }
    }
}

fn default_api_url() -> String {
    "http://localhost:5000".into()
}
fn default_timeout() -> u64 {
    30
}
fn default_refresh_interval() -> u64 {
    30
}
fn default_history_limit() -> usize {
    10
}
fn default_leaderboard_limit() -> usize {
    10
}
fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("io", "ecobin", "ecobin").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("ecobin");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    let path = config_path();

    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(&path))
        .merge(Env::prefixed("ECOBIN_"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if the file doesn't exist.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(&path, toml_str)?;
    Ok(())
}

// ── Translation to SyncConfig ───────────────────────────────────────

/// Build a `SyncConfig` from the file config — no CLI flag overrides.
pub fn to_sync_config(cfg: &Config) -> Result<SyncConfig, ConfigError> {
    let base_url: url::Url = cfg.api_url.parse().map_err(|_| ConfigError::Validation {
        field: "api_url".into(),
        reason: format!("invalid URL: {}", cfg.api_url),
    })?;

    Ok(SyncConfig {
        base_url,
        timeout: Duration::from_secs(cfg.timeout_secs),
        refresh_interval: Duration::from_secs(cfg.refresh_interval_secs),
        history_limit: cfg.history_limit,
        leaderboard_limit: cfg.leaderboard_limit,
        session_dir: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_translate_to_sync_config() {
        let cfg = Config::default();
        let sync = to_sync_config(&cfg).expect("defaults are valid");
        assert_eq!(sync.base_url.as_str(), "http://localhost:5000/");
        assert_eq!(sync.timeout, Duration::from_secs(30));
        assert_eq!(sync.refresh_interval, Duration::from_secs(30));
        assert_eq!(sync.history_limit, 10);
        assert_eq!(sync.leaderboard_limit, 10);
    }

    #[test]
    fn invalid_api_url_is_rejected() {
        let cfg = Config {
            api_url: "not a url".into(),
            ..Config::default()
        };
        let err = to_sync_config(&cfg).expect_err("must fail");
        assert!(matches!(err, ConfigError::Validation { .. }));
    }

    #[test]
    fn toml_and_env_layer_over_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("ECOBIN_REFRESH_INTERVAL_SECS", "5");
            let figment = Figment::new()
                .merge(Serialized::defaults(Config::default()))
                .merge(Env::prefixed("ECOBIN_"));
            let cfg: Config = figment.extract()?;
            assert_eq!(cfg.refresh_interval_secs, 5);
            assert_eq!(cfg.api_url, "http://localhost:5000");
            Ok(())
        });
    }
}
