// ── Persistent session store ──
//
// Persists the authenticated identity plus a login timestamp with a fixed
// one-hour TTL, backed by two files in the platform data directory. The
// in-memory session stays authoritative: persistence is best-effort, and
// the fallible `try_*` capabilities are wrapped by swallow-and-log variants
// so callers choose explicitly to ignore storage failures.

use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::Utc;
use directories::ProjectDirs;
use thiserror::Error;
use tracing::{debug, warn};

use crate::model::User;

/// How long a persisted session stays valid: one hour.
pub const SESSION_DURATION: Duration = Duration::from_millis(3_600_000);

const IDENTITY_FILE: &str = "user.json";
const STAMP_FILE: &str = "session";

/// Storage-level failures. Never surfaced to the user; the public
/// `load`/`save`/`clear` wrappers log and continue.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("persisted identity is not valid JSON: {0}")]
    Serde(#[from] serde_json::Error),
}

/// File-backed store for the identity snapshot and its login timestamp.
///
/// The two entries are always written and cleared together; `load` never
/// returns an identity whose timestamp entry is missing.
pub struct SessionStore {
    dir: PathBuf,
    ttl: Duration,
}

impl SessionStore {
    /// Open the store at the platform data directory.
    pub fn open() -> Self {
        let dir = ProjectDirs::from("io", "ecobin", "ecobin").map_or_else(
            || {
                let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
                p.push(".local");
                p.push("share");
                p.push("ecobin");
                p
            },
            |dirs| dirs.data_dir().to_path_buf(),
        );
        Self::at(dir)
    }

    /// Open the store at an explicit directory.
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            ttl: SESSION_DURATION,
        }
    }

    fn identity_path(&self) -> PathBuf {
        self.dir.join(IDENTITY_FILE)
    }

    fn stamp_path(&self) -> PathBuf {
        self.dir.join(STAMP_FILE)
    }

    // ── Fallible capabilities ────────────────────────────────────────

    /// Read the persisted identity, enforcing the TTL.
    ///
    /// Returns `None` when either entry is absent or unparseable. An
    /// expired session is purged eagerly: both entries are removed before
    /// returning `None`.
    pub fn try_load(&self) -> Result<Option<User>, SessionError> {
        let Some(stamp_raw) = read_optional(&self.stamp_path())? else {
            return Ok(None);
        };
        let Some(identity_raw) = read_optional(&self.identity_path())? else {
            return Ok(None);
        };

        let Ok(login_millis) = stamp_raw.trim().parse::<i64>() else {
            warn!("session timestamp is unparseable; ignoring persisted session");
            return Ok(None);
        };

        let age_millis = Utc::now().timestamp_millis().saturating_sub(login_millis);
        #[allow(clippy::cast_possible_truncation)]
        let ttl_millis = self.ttl.as_millis() as i64;
        if age_millis > ttl_millis {
            debug!(age_millis, "persisted session expired; purging");
            self.try_clear()?;
            return Ok(None);
        }

        let user: User = serde_json::from_str(&identity_raw)?;
        Ok(Some(user))
    }

    /// Persist the identity and stamp the current time, overwriting both
    /// entries together.
    pub fn try_save(&self, user: &User) -> Result<(), SessionError> {
        std::fs::create_dir_all(&self.dir)?;
        let identity = serde_json::to_string(user)?;
        std::fs::write(self.identity_path(), identity)?;
        std::fs::write(
            self.stamp_path(),
            Utc::now().timestamp_millis().to_string(),
        )?;
        Ok(())
    }

    /// Remove both persisted entries.
    pub fn try_clear(&self) -> Result<(), SessionError> {
        remove_optional(&self.identity_path())?;
        remove_optional(&self.stamp_path())?;
        Ok(())
    }

    // ── Swallow-and-log wrappers ─────────────────────────────────────

    /// Best-effort load; storage failures behave like an absent session.
    pub fn load(&self) -> Option<User> {
        match self.try_load() {
            Ok(user) => user,
            Err(e) => {
                warn!(error = %e, "failed to load persisted session");
                None
            }
        }
    }

    /// Best-effort save.
    pub fn save(&self, user: &User) {
        if let Err(e) = self.try_save(user) {
            warn!(error = %e, "failed to persist session");
        }
    }

    /// Best-effort clear.
    pub fn clear(&self) {
        if let Err(e) = self.try_clear() {
            warn!(error = %e, "failed to clear persisted session");
        }
    }
}

/// Read a file, mapping "not found" to `None`.
fn read_optional(path: &Path) -> Result<Option<String>, SessionError> {
    match std::fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Remove a file, tolerating it already being gone.
fn remove_optional(path: &Path) -> Result<(), SessionError> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}
