// ── Runtime synchronizer configuration ──
//
// Describes *how* to reach the backend and how aggressively to poll.
// The CLI constructs a `SyncConfig` from file/env configuration and
// hands it in; core never reads config files itself.

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use ecobin_api::DEFAULT_BASE_URL;

/// Configuration for one `Synchronizer`.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Backend base URL (e.g. `http://localhost:5000`).
    pub base_url: Url,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Interval between automatic refreshes while a session is active.
    pub refresh_interval: Duration,
    /// Waste-log page size requested on each refresh.
    pub history_limit: usize,
    /// Leaderboard size requested on each refresh.
    pub leaderboard_limit: usize,
    /// Session persistence directory override. `None` uses the platform
    /// data directory.
    pub session_dir: Option<PathBuf>,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            timeout: Duration::from_secs(30),
            refresh_interval: Duration::from_secs(30),
            history_limit: 10,
            leaderboard_limit: 10,
            session_dir: None,
        }
    }
}
