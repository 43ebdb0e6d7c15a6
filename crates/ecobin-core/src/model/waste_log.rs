use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One recycling event, immutable once fetched. The full list is replaced
/// on each refresh; there is no incremental merge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WasteLog {
    pub id: String,
    /// Owning user, by id reference only (not enforced client-side).
    pub user_id: Option<String>,
    pub waste_type: String,
    pub waste_count: i64,
    pub points_earned: i64,
    /// `None` means "no image" -- an empty URL from the backend maps here
    /// rather than to an empty string.
    pub image_url: Option<String>,
    /// `None` when the backend timestamp was missing or unparseable.
    pub timestamp: Option<DateTime<Utc>>,
}

/// A system-wide activity row for the admin feed: a waste log plus the
/// acting user's display name, joined in by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityLog {
    pub log: WasteLog,
    pub user_name: String,
}
