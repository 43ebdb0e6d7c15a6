// ── Data synchronizer ──
//
// Full session lifecycle for the dashboard: login/restore, concurrent
// four-slice refresh, 30-second polling while a session is active, and a
// logout that synchronously disarms the poller. In-flight results from a
// torn-down session are discarded via the store's generation counter.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use secrecy::{ExposeSecret, SecretString};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use ecobin_api::types::RegisterRequest;
use ecobin_api::{ApiClient, TransportConfig};

use crate::config::SyncConfig;
use crate::convert::user_from_stats;
use crate::error::CoreError;
use crate::model::{ActivityLog, User, WasteLog};
use crate::session::SessionStore;
use crate::store::DataStore;

/// The number of independently refreshed state slices.
const SLICE_COUNT: usize = 4;

/// The main entry point for consumers.
///
/// Cheaply cloneable via `Arc<SyncInner>`. Owns the API client, the
/// reactive [`DataStore`], the persisted session, and the polling task.
#[derive(Clone)]
pub struct Synchronizer {
    inner: Arc<SyncInner>,
}

struct SyncInner {
    config: SyncConfig,
    api: ApiClient,
    store: Arc<DataStore>,
    session: SessionStore,
    cancel: Mutex<CancellationToken>,
    poll_task: Mutex<Option<JoinHandle<()>>>,
}

/// Lock a mutex, tolerating poisoning -- all guarded state stays valid
/// across panics.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl Synchronizer {
    /// Create a new synchronizer from configuration. Does not touch the
    /// network -- call [`restore()`](Self::restore) or
    /// [`login()`](Self::login) to establish a session.
    pub fn new(config: SyncConfig) -> Result<Self, CoreError> {
        let transport = TransportConfig {
            timeout: config.timeout,
        };
        let api = ApiClient::new(config.base_url.clone(), &transport)?;
        let session = config
            .session_dir
            .as_ref()
            .map_or_else(SessionStore::open, SessionStore::at);

        Ok(Self {
            inner: Arc::new(SyncInner {
                config,
                api,
                store: Arc::new(DataStore::new()),
                session,
                cancel: Mutex::new(CancellationToken::new()),
                poll_task: Mutex::new(None),
            }),
        })
    }

    /// Access the reactive data store.
    pub fn store(&self) -> &Arc<DataStore> {
        &self.inner.store
    }

    /// Access the synchronizer configuration.
    pub fn config(&self) -> &SyncConfig {
        &self.inner.config
    }

    // ── Session lifecycle ────────────────────────────────────────────

    /// Restore a persisted session, if one exists and is within its TTL.
    pub fn restore(&self) -> Option<Arc<User>> {
        let user = Arc::new(self.inner.session.load()?);
        self.inner.store.set_identity(Some(Arc::clone(&user)));
        debug!(username = %user.username, "session restored");
        Some(user)
    }

    /// Authenticate and establish a session.
    ///
    /// On success the identity is stored and persisted. Does not trigger a
    /// refresh -- callers (or [`start()`](Self::start)) decide when to load
    /// data, so login failures stay scoped to the login path.
    pub async fn login(
        &self,
        username: &str,
        password: &SecretString,
    ) -> Result<Arc<User>, CoreError> {
        let resp = self.inner.api.login(username, password).await?;
        let user = self.set_identity(User::from(resp.user));
        info!(username = %user.username, "logged in");
        Ok(user)
    }

    /// Create a new account. Does not establish a session.
    pub async fn register(
        &self,
        full_name: &str,
        username: &str,
        password: &SecretString,
        rfid_uid: &str,
    ) -> Result<i64, CoreError> {
        let request = RegisterRequest {
            full_name: full_name.to_owned(),
            username: username.to_owned(),
            password: password.expose_secret().to_owned(),
            rfid_uid: rfid_uid.to_owned(),
        };
        let resp = self.inner.api.register(&request).await?;
        Ok(resp.user_id)
    }

    /// Replace the identity and persist it. Never triggers a refresh.
    pub fn set_identity(&self, user: User) -> Arc<User> {
        let user = Arc::new(user);
        self.inner.store.set_identity(Some(Arc::clone(&user)));
        self.inner.session.save(&user);
        user
    }

    /// End the session: disarm the poller, invalidate in-flight refreshes,
    /// clear every slice, and remove the persisted session.
    ///
    /// Synchronous on purpose -- no trailing refresh may land after this
    /// returns. Results from fetches already in flight are discarded by the
    /// generation guard in [`refresh()`](Self::refresh).
    pub fn logout(&self) {
        self.inner.store.bump_generation();
        lock(&self.inner.cancel).cancel();
        if let Some(task) = lock(&self.inner.poll_task).take() {
            task.abort();
        }
        self.inner.store.clear_all();
        self.inner.session.clear();
        info!("logged out");
    }

    // ── Refresh ──────────────────────────────────────────────────────

    /// Fetch all four slices concurrently and apply whatever settled
    /// successfully.
    ///
    /// No-op without an identity. Each slice is replaced wholesale on
    /// success; a failed fetch leaves its slice stale and does not set the
    /// error flag. Only a cycle where every fetch fails raises the visible
    /// error banner. `loading` is always cleared before returning.
    ///
    /// Concurrent calls are allowed; last write wins per slice.
    pub async fn refresh(&self) -> Result<(), CoreError> {
        let store = &self.inner.store;
        let Some(user) = store.identity() else {
            return Ok(());
        };
        let generation = store.generation();
        let user_id = user
            .numeric_id()
            .ok_or_else(|| CoreError::Internal(format!("non-numeric user id: {}", user.id)))?;

        store.set_loading(true);
        store.set_error(None);

        let api = &self.inner.api;
        let config = &self.inner.config;

        // All four settle independently; one failure never aborts the rest.
        let (stats_res, history_res, leaderboard_res, bins_res) = tokio::join!(
            api.user_stats(user_id),
            api.user_history(user_id, config.history_limit),
            api.leaderboard(config.leaderboard_limit),
            api.bins(),
        );

        // Session torn down while we were in flight: discard everything.
        // logout() already reset loading, so there is nothing to clean up.
        if store.generation() != generation {
            debug!("discarding refresh results from a previous session generation");
            return Ok(());
        }

        let mut failures: Vec<String> = Vec::new();

        match stats_res {
            Ok(resp) => {
                let updated = Arc::new(user_from_stats(resp.user, &user));
                store.set_identity(Some(Arc::clone(&updated)));
                self.inner.session.save(&updated);
            }
            Err(e) => {
                debug!(error = %e, "stats fetch failed; keeping stale identity");
                failures.push(e.to_string());
            }
        }

        match history_res {
            Ok(resp) => {
                store.set_logs(resp.history.into_iter().map(WasteLog::from).collect());
            }
            Err(e) => {
                debug!(error = %e, "history fetch failed; keeping stale logs");
                failures.push(e.to_string());
            }
        }

        match leaderboard_res {
            Ok(resp) => {
                store.set_leaderboard(resp.leaderboard.into_iter().map(User::from).collect());
            }
            Err(e) => {
                debug!(error = %e, "leaderboard fetch failed; keeping stale leaderboard");
                failures.push(e.to_string());
            }
        }

        match bins_res {
            Ok(resp) => {
                store.set_bins(resp.bins.into_iter().map(Into::into).collect());
            }
            Err(e) => {
                debug!(error = %e, "bins fetch failed; keeping stale bins");
                failures.push(e.to_string());
            }
        }

        if failures.len() == SLICE_COUNT {
            // The whole cycle failed -- most likely the backend is down.
            warn!("refresh cycle failed on all slices");
            store.set_error(failures.into_iter().next());
        } else {
            store.mark_refreshed();
        }
        store.set_loading(false);

        Ok(())
    }

    // ── Polling lifecycle ────────────────────────────────────────────

    /// Perform an immediate refresh, then keep refreshing on the configured
    /// interval until [`stop()`](Self::stop) or [`logout()`](Self::logout).
    ///
    /// Re-arming replaces any previous polling task.
    pub fn start(&self) {
        let token = CancellationToken::new();
        {
            let mut guard = lock(&self.inner.cancel);
            guard.cancel();
            *guard = token.clone();
        }

        let sync = self.clone();
        let task = tokio::spawn(poll_task(sync, token));
        if let Some(previous) = lock(&self.inner.poll_task).replace(task) {
            previous.abort();
        }
    }

    /// Disarm the polling task without touching session state.
    pub fn stop(&self) {
        lock(&self.inner.cancel).cancel();
        if let Some(task) = lock(&self.inner.poll_task).take() {
            task.abort();
        }
    }

    /// One-shot: restore the session, run the closure, disarm polling.
    ///
    /// Optimized for CLI commands that need a single refresh cycle.
    pub async fn oneshot<F, Fut, T>(config: SyncConfig, f: F) -> Result<T, CoreError>
    where
        F: FnOnce(Synchronizer) -> Fut,
        Fut: std::future::Future<Output = Result<T, CoreError>>,
    {
        let sync = Synchronizer::new(config)?;
        sync.restore();
        let result = f(sync.clone()).await;
        sync.stop();
        result
    }

    // ── Admin operations ─────────────────────────────────────────────

    /// Zero a bin's fill level. Server round-trip, not a local mutation --
    /// the next refresh picks up the new telemetry.
    pub async fn reset_bin(&self, bin_id: i64) -> Result<String, CoreError> {
        self.require_admin("reset-bin")?;
        let resp = self.inner.api.reset_bin(bin_id).await?;
        Ok(resp.message.unwrap_or_else(|| "Bin reset".to_owned()))
    }

    /// System-wide recent activity with actor names.
    pub async fn recent_logs(&self, limit: usize) -> Result<Vec<ActivityLog>, CoreError> {
        self.require_admin("recent-logs")?;
        let resp = self.inner.api.recent_logs(limit).await?;
        Ok(resp.logs.into_iter().map(ActivityLog::from).collect())
    }

    fn require_admin(&self, operation: &str) -> Result<(), CoreError> {
        if self.inner.store.identity().is_none() {
            return Err(CoreError::NotLoggedIn);
        }
        if !self.inner.store.is_admin() {
            return Err(CoreError::AdminRequired {
                operation: operation.to_owned(),
            });
        }
        Ok(())
    }
}

// ── Background task ──────────────────────────────────────────────────

/// Refresh immediately, then on every interval tick until cancelled.
async fn poll_task(sync: Synchronizer, cancel: CancellationToken) {
    if let Err(e) = sync.refresh().await {
        warn!(error = %e, "initial refresh failed");
    }

    let mut interval = tokio::time::interval(sync.inner.config.refresh_interval);
    interval.tick().await; // consume the immediate first tick

    loop {
        tokio::select! {
            biased;
            () = cancel.cancelled() => break,
            _ = interval.tick() => {
                if let Err(e) = sync.refresh().await {
                    warn!(error = %e, "periodic refresh failed");
                }
            }
        }
    }
}
