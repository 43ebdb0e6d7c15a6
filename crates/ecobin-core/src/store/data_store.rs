// ── Central reactive data store ──
//
// Holds the authoritative in-memory snapshot of the four synchronized
// slices (identity, bins, logs, leaderboard) plus the derived flags.
// Mutations are broadcast to subscribers via `watch` channels; each slice
// is replaced wholesale, never merged.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use tokio::sync::watch;

use crate::model::{SmartBin, User, WasteLog};

/// Central reactive store for the dashboard snapshot.
///
/// Reads are wait-free (`watch::Sender::borrow`); writes broadcast to all
/// subscribers. The session generation counter invalidates in-flight
/// refresh results issued before a logout: writers compare generations at
/// slice-assignment time and discard stale results.
pub struct DataStore {
    identity: watch::Sender<Option<Arc<User>>>,
    bins: watch::Sender<Arc<Vec<SmartBin>>>,
    logs: watch::Sender<Arc<Vec<WasteLog>>>,
    leaderboard: watch::Sender<Arc<Vec<User>>>,
    loading: watch::Sender<bool>,
    error: watch::Sender<Option<String>>,
    last_refresh: watch::Sender<Option<DateTime<Utc>>>,
    generation: AtomicU64,
}

impl DataStore {
    pub fn new() -> Self {
        let (identity, _) = watch::channel(None);
        let (bins, _) = watch::channel(Arc::new(Vec::new()));
        let (logs, _) = watch::channel(Arc::new(Vec::new()));
        let (leaderboard, _) = watch::channel(Arc::new(Vec::new()));
        let (loading, _) = watch::channel(false);
        let (error, _) = watch::channel(None);
        let (last_refresh, _) = watch::channel(None);

        Self {
            identity,
            bins,
            logs,
            leaderboard,
            loading,
            error,
            last_refresh,
            generation: AtomicU64::new(0),
        }
    }

    // ── Snapshot accessors ───────────────────────────────────────────

    pub fn identity(&self) -> Option<Arc<User>> {
        self.identity.borrow().clone()
    }

    pub fn bins_snapshot(&self) -> Arc<Vec<SmartBin>> {
        self.bins.borrow().clone()
    }

    pub fn logs_snapshot(&self) -> Arc<Vec<WasteLog>> {
        self.logs.borrow().clone()
    }

    pub fn leaderboard_snapshot(&self) -> Arc<Vec<User>> {
        self.leaderboard.borrow().clone()
    }

    pub fn loading(&self) -> bool {
        *self.loading.borrow()
    }

    pub fn error(&self) -> Option<String> {
        self.error.borrow().clone()
    }

    /// Derived flag: does the current identity carry the admin role?
    pub fn is_admin(&self) -> bool {
        self.identity.borrow().as_ref().is_some_and(|u| u.is_admin())
    }

    pub fn last_refresh(&self) -> Option<DateTime<Utc>> {
        *self.last_refresh.borrow()
    }

    /// How long ago the last completed refresh was, or `None` if never.
    pub fn data_age(&self) -> Option<chrono::Duration> {
        self.last_refresh().map(|t| Utc::now() - t)
    }

    // ── Subscriptions ────────────────────────────────────────────────

    pub fn subscribe_identity(&self) -> watch::Receiver<Option<Arc<User>>> {
        self.identity.subscribe()
    }

    pub fn subscribe_bins(&self) -> watch::Receiver<Arc<Vec<SmartBin>>> {
        self.bins.subscribe()
    }

    pub fn subscribe_logs(&self) -> watch::Receiver<Arc<Vec<WasteLog>>> {
        self.logs.subscribe()
    }

    pub fn subscribe_leaderboard(&self) -> watch::Receiver<Arc<Vec<User>>> {
        self.leaderboard.subscribe()
    }

    pub fn subscribe_loading(&self) -> watch::Receiver<bool> {
        self.loading.subscribe()
    }

    pub fn subscribe_error(&self) -> watch::Receiver<Option<String>> {
        self.error.subscribe()
    }

    pub fn subscribe_last_refresh(&self) -> watch::Receiver<Option<DateTime<Utc>>> {
        self.last_refresh.subscribe()
    }

    // ── Session generation ───────────────────────────────────────────

    /// The current session generation. Captured at the start of a refresh
    /// and compared before applying results.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    /// Invalidate all in-flight work from the current session.
    pub(crate) fn bump_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::AcqRel) + 1
    }

    // ── Mutators (synchronizer only) ─────────────────────────────────
    // `send_modify` updates unconditionally, even with zero receivers.

    pub(crate) fn set_identity(&self, user: Option<Arc<User>>) {
        self.identity.send_modify(|slot| *slot = user);
    }

    pub(crate) fn set_bins(&self, bins: Vec<SmartBin>) {
        self.bins.send_modify(|slot| *slot = Arc::new(bins));
    }

    pub(crate) fn set_logs(&self, logs: Vec<WasteLog>) {
        self.logs.send_modify(|slot| *slot = Arc::new(logs));
    }

    pub(crate) fn set_leaderboard(&self, users: Vec<User>) {
        self.leaderboard.send_modify(|slot| *slot = Arc::new(users));
    }

    pub(crate) fn set_loading(&self, value: bool) {
        self.loading.send_modify(|slot| *slot = value);
    }

    pub(crate) fn set_error(&self, message: Option<String>) {
        self.error.send_modify(|slot| *slot = message);
    }

    pub(crate) fn mark_refreshed(&self) {
        self.last_refresh
            .send_modify(|slot| *slot = Some(Utc::now()));
    }

    /// Reset everything to the anonymous state. Loading and error are
    /// cleared too so a torn-down session leaves no residue.
    pub(crate) fn clear_all(&self) {
        self.set_identity(None);
        self.set_bins(Vec::new());
        self.set_logs(Vec::new());
        self.set_leaderboard(Vec::new());
        self.set_loading(false);
        self.set_error(None);
        self.last_refresh.send_modify(|slot| *slot = None);
    }
}

impl Default for DataStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::Role;

    fn admin() -> User {
        User {
            id: "1".into(),
            full_name: "Root".into(),
            username: "root".into(),
            rfid_uid: String::new(),
            role: Role::Admin,
            current_points: 0,
            total_recycled: 0,
            carbon_saved_g: 0,
            department: String::new(),
        }
    }

    #[test]
    fn starts_anonymous_and_empty() {
        let store = DataStore::new();
        assert!(store.identity().is_none());
        assert!(store.bins_snapshot().is_empty());
        assert!(store.logs_snapshot().is_empty());
        assert!(store.leaderboard_snapshot().is_empty());
        assert!(!store.loading());
        assert!(store.error().is_none());
        assert!(!store.is_admin());
    }

    #[test]
    fn is_admin_follows_identity_role() {
        let store = DataStore::new();
        store.set_identity(Some(Arc::new(admin())));
        assert!(store.is_admin());

        store.set_identity(None);
        assert!(!store.is_admin());
    }

    #[test]
    fn clear_all_resets_every_slice_and_flag() {
        let store = DataStore::new();
        store.set_identity(Some(Arc::new(admin())));
        store.set_logs(vec![]);
        store.set_loading(true);
        store.set_error(Some("boom".into()));
        store.mark_refreshed();

        store.clear_all();
        assert!(store.identity().is_none());
        assert!(!store.loading());
        assert!(store.error().is_none());
        assert!(store.last_refresh().is_none());
    }

    #[test]
    fn generation_increments_monotonically() {
        let store = DataStore::new();
        let g0 = store.generation();
        assert_eq!(store.bump_generation(), g0 + 1);
        assert_eq!(store.generation(), g0 + 1);
    }

    #[tokio::test]
    async fn subscribers_see_slice_updates() {
        let store = DataStore::new();
        let mut rx = store.subscribe_loading();

        store.set_loading(true);
        rx.changed().await.unwrap();
        assert!(*rx.borrow());
    }
}
