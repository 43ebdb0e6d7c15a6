// ecobin-core: session lifecycle and polling data synchronization between
// ecobin-api and consumers (CLI).

pub mod config;
pub mod convert;
pub mod error;
pub mod model;
pub mod session;
pub mod store;
pub mod sync;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::SyncConfig;
pub use error::CoreError;
pub use session::{SESSION_DURATION, SessionStore};
pub use store::DataStore;
pub use sync::Synchronizer;

// Re-export model types at the crate root for ergonomics.
pub use model::{ActivityLog, BinStatus, Role, SmartBin, User, WasteLog};
