//! CLI configuration — thin wrapper around `ecobin_config` shared types.
//!
//! Re-exports the shared types and adds resolution that respects
//! `GlobalOpts` flag overrides (--api-url, --timeout).

use std::time::Duration;

use ecobin_core::SyncConfig;

use crate::cli::GlobalOpts;
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use ecobin_config::{Config, config_path, load_config_or_default, save_config};

// ── CLI-specific helpers ────────────────────────────────────────────

/// Translate the file config + global flags into a `SyncConfig`.
///
/// CLI flag overrides take priority over file values.
pub fn resolve_sync_config(cfg: &Config, global: &GlobalOpts) -> Result<SyncConfig, CliError> {
    // 1. Backend URL (flag > env > file)
    let url_str = global.api_url.as_deref().unwrap_or(&cfg.api_url);
    let base_url: url::Url = url_str.parse().map_err(|_| CliError::Validation {
        field: "api-url".into(),
        reason: format!("invalid URL: {url_str}"),
    })?;

    Ok(SyncConfig {
        base_url,
        timeout: Duration::from_secs(global.timeout),
        refresh_interval: Duration::from_secs(cfg.refresh_interval_secs),
        history_limit: cfg.history_limit,
        leaderboard_limit: cfg.leaderboard_limit,
        session_dir: None,
    })
}
