// Backend API response types
//
// Models for the ecobin backend's JSON API. Fields use `#[serde(default)]`
// liberally because the backend is inconsistent about field presence across
// endpoints (e.g. `image_url` may be absent, empty, or populated).

use serde::{Deserialize, Serialize};

// ── Error body ───────────────────────────────────────────────────────

/// Shape of a non-2xx response body.
///
/// The backend reports failures as either `{"error": "..."}` or
/// `{"message": "..."}` depending on the endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// The best available human-readable message, or a generic fallback.
    pub fn into_message(self) -> String {
        self.error
            .or(self.message)
            .unwrap_or_else(|| "Request failed".to_owned())
    }
}

// ── Authentication ───────────────────────────────────────────────────

/// `POST /api/login` response.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub status: String,
    pub user: LoginUser,
}

/// Identity subset returned by the login endpoint. Recycling totals,
/// RFID uid, and department are not included here -- they arrive with the
/// first stats refresh.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginUser {
    pub user_id: i64,
    pub full_name: String,
    pub username: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub current_points: i64,
}

/// `POST /api/register` request body.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub full_name: String,
    pub username: String,
    pub password: String,
    pub rfid_uid: String,
}

/// `POST /api/register` response.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    pub user_id: i64,
}

// ── User stats & history ─────────────────────────────────────────────

/// `GET /api/user/{id}/stats` response.
#[derive(Debug, Clone, Deserialize)]
pub struct StatsResponse {
    pub status: String,
    pub user: StatsUser,
}

/// Full identity snapshot from the stats endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct StatsUser {
    pub user_id: i64,
    pub full_name: String,
    pub username: String,
    #[serde(default)]
    pub current_points: i64,
    #[serde(default)]
    pub total_recycled_items: i64,
    #[serde(default)]
    pub carbon_saved_g: i64,
    #[serde(default)]
    pub role: String,
}

/// `GET /api/user/{id}/history` response.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryResponse {
    pub status: String,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

/// One waste-log row from the history endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryEntry {
    pub log_id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub waste_type: String,
    #[serde(default)]
    pub waste_count: i64,
    #[serde(default)]
    pub points_earned: i64,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub timestamp: String,
}

// ── Leaderboard ──────────────────────────────────────────────────────

/// `GET /api/leaderboard` response.
#[derive(Debug, Clone, Deserialize)]
pub struct LeaderboardResponse {
    pub status: String,
    #[serde(default)]
    pub leaderboard: Vec<LeaderboardEntry>,
}

/// One ranked user. Same shape as `StatsUser`; kept separate because the
/// two endpoints evolve independently on the backend.
#[derive(Debug, Clone, Deserialize)]
pub struct LeaderboardEntry {
    pub user_id: i64,
    pub full_name: String,
    pub username: String,
    #[serde(default)]
    pub current_points: i64,
    #[serde(default)]
    pub total_recycled_items: i64,
    #[serde(default)]
    pub carbon_saved_g: i64,
    #[serde(default)]
    pub role: String,
}

// ── Bins ─────────────────────────────────────────────────────────────

/// `GET /api/admin/bins` response.
#[derive(Debug, Clone, Deserialize)]
pub struct BinsResponse {
    pub status: String,
    #[serde(default)]
    pub bins: Vec<BinRecord>,
}

/// Raw bin telemetry. `current_fill_level` is a volume in liters, not a
/// percentage -- clients derive the percentage from `max_capacity`.
#[derive(Debug, Clone, Deserialize)]
pub struct BinRecord {
    pub bin_id: i64,
    #[serde(default)]
    pub bin_name: String,
    #[serde(default)]
    pub max_capacity: f64,
    #[serde(default)]
    pub current_fill_level: f64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// `POST /api/admin/reset-bin` response.
#[derive(Debug, Clone, Deserialize)]
pub struct ResetBinResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

// ── Admin activity feed ──────────────────────────────────────────────

/// `GET /api/admin/recent-logs` response.
#[derive(Debug, Clone, Deserialize)]
pub struct RecentLogsResponse {
    pub status: String,
    #[serde(default)]
    pub logs: Vec<RecentLogEntry>,
}

/// One system-wide activity row, with the acting user's display name
/// joined in by the backend.
#[derive(Debug, Clone, Deserialize)]
pub struct RecentLogEntry {
    pub log_id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub waste_type: String,
    #[serde(default)]
    pub waste_count: i64,
    #[serde(default)]
    pub points_earned: i64,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub timestamp: String,
}
