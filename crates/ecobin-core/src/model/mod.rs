// ── Unified domain model ──
//
// Every type in this module is the canonical client-side representation of
// an ecobin entity. The backend's snake_case wire shapes (ecobin-api) are
// normalized into these via `convert` before consumers ever see them.

pub mod bin;
pub mod user;
pub mod waste_log;

pub use bin::{BinStatus, SmartBin};
pub use user::{Role, User};
pub use waste_log::{ActivityLog, WasteLog};
