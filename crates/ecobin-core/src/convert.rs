// ── API-to-domain type conversions ──
//
// Bridges raw `ecobin_api` response types into canonical `ecobin_core::model`
// types. Each conversion normalizes field names, stringifies ids, and fills
// documented placeholders for data the backend does not supply. All mappers
// are total on optional fields.

use chrono::{DateTime, Utc};

use ecobin_api::types::{BinRecord, HistoryEntry, LeaderboardEntry, LoginUser, RecentLogEntry, StatsUser};

use crate::model::{ActivityLog, BinStatus, Role, SmartBin, User, WasteLog};

// ── Helpers ────────────────────────────────────────────────────────

/// Parse an ISO-8601 timestamp, silently dropping unparseable values.
fn parse_datetime(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// An empty or absent image URL means "no image".
fn normalize_image_url(raw: Option<String>) -> Option<String> {
    raw.filter(|url| !url.is_empty())
}

/// Fill percentage derived from raw volume, clamped to 0..=100.
///
/// Always recomputed from `current_fill_level / max_capacity`; the backend
/// value is a volume in liters, never a server-side percentage.
pub fn fill_percentage(current_fill_level: f64, max_capacity: f64) -> u8 {
    if max_capacity <= 0.0 {
        return 0;
    }
    let pct = (current_fill_level / max_capacity * 100.0).round();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        pct.clamp(0.0, 100.0) as u8
    }
}

// ── User ───────────────────────────────────────────────────────────

/// Identity created at login time.
///
/// The login endpoint omits recycling totals, RFID uid, and department;
/// totals default to zero and the identifiers stay empty until a richer
/// source provides them.
impl From<LoginUser> for User {
    fn from(u: LoginUser) -> Self {
        User {
            id: u.user_id.to_string(),
            full_name: u.full_name,
            username: u.username,
            rfid_uid: String::new(),
            role: Role::parse(&u.role),
            current_points: u.current_points,
            total_recycled: 0,
            carbon_saved_g: 0,
            department: String::new(),
        }
    }
}

/// Identity rebuilt from a stats refresh.
///
/// RFID uid and department are not returned by the stats endpoint and are
/// carried over from the previous identity snapshot instead of defaulted.
pub fn user_from_stats(u: StatsUser, prev: &User) -> User {
    User {
        id: u.user_id.to_string(),
        full_name: u.full_name,
        username: u.username,
        rfid_uid: prev.rfid_uid.clone(),
        role: Role::parse(&u.role),
        current_points: u.current_points,
        total_recycled: u.total_recycled_items,
        carbon_saved_g: u.carbon_saved_g,
        department: prev.department.clone(),
    }
}

/// A leaderboard row is a read-only display projection; RFID uid and
/// department are never supplied and stay empty.
impl From<LeaderboardEntry> for User {
    fn from(u: LeaderboardEntry) -> Self {
        User {
            id: u.user_id.to_string(),
            full_name: u.full_name,
            username: u.username,
            rfid_uid: String::new(),
            role: Role::parse(&u.role),
            current_points: u.current_points,
            total_recycled: u.total_recycled_items,
            carbon_saved_g: u.carbon_saved_g,
            department: String::new(),
        }
    }
}

// ── Waste logs ─────────────────────────────────────────────────────

impl From<HistoryEntry> for WasteLog {
    fn from(e: HistoryEntry) -> Self {
        WasteLog {
            id: e.log_id.to_string(),
            user_id: e.user_id.map(|id| id.to_string()),
            waste_type: e.waste_type,
            waste_count: e.waste_count,
            points_earned: e.points_earned,
            image_url: normalize_image_url(e.image_url),
            timestamp: parse_datetime(&e.timestamp),
        }
    }
}

impl From<RecentLogEntry> for ActivityLog {
    fn from(e: RecentLogEntry) -> Self {
        ActivityLog {
            log: WasteLog {
                id: e.log_id.to_string(),
                user_id: e.user_id.map(|id| id.to_string()),
                waste_type: e.waste_type,
                waste_count: e.waste_count,
                points_earned: e.points_earned,
                image_url: normalize_image_url(e.image_url),
                timestamp: parse_datetime(&e.timestamp),
            },
            user_name: e.user_name,
        }
    }
}

// ── Bins ───────────────────────────────────────────────────────────

impl From<BinRecord> for SmartBin {
    fn from(b: BinRecord) -> Self {
        SmartBin {
            id: b.bin_id.to_string(),
            name: b.bin_name,
            // The backend does not supply per-bin location text yet.
            location: "Campus Location".to_owned(),
            max_capacity: b.max_capacity,
            fill_pct: fill_percentage(b.current_fill_level, b.max_capacity),
            status: BinStatus::parse(&b.status),
            // No battery telemetry yet; fixed stand-in.
            battery_pct: 85,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats_user() -> StatsUser {
        StatsUser {
            user_id: 7,
            full_name: "Alice A".into(),
            username: "alice".into(),
            current_points: 150,
            total_recycled_items: 42,
            carbon_saved_g: 900,
            role: "user".into(),
        }
    }

    #[test]
    fn fill_percentage_rounding() {
        assert_eq!(fill_percentage(45.0, 60.0), 75);
        assert_eq!(fill_percentage(0.0, 100.0), 0);
        assert_eq!(fill_percentage(100.0, 100.0), 100);
    }

    #[test]
    fn fill_percentage_degenerate_capacity() {
        assert_eq!(fill_percentage(10.0, 0.0), 0);
        assert_eq!(fill_percentage(10.0, -5.0), 0);
        // Over-full readings clamp rather than overflow the u8.
        assert_eq!(fill_percentage(150.0, 100.0), 100);
    }

    #[test]
    fn login_user_has_empty_placeholders() {
        let user: User = LoginUser {
            user_id: 7,
            full_name: "Alice A".into(),
            username: "alice".into(),
            role: "user".into(),
            current_points: 120,
        }
        .into();

        assert_eq!(user.id, "7");
        assert_eq!(user.full_name, "Alice A");
        assert_eq!(user.role, Role::User);
        assert_eq!(user.current_points, 120);
        assert_eq!(user.rfid_uid, "");
        assert_eq!(user.department, "");
        assert_eq!(user.total_recycled, 0);
    }

    #[test]
    fn stats_user_carries_over_rfid_and_department() {
        let prev = User {
            id: "7".into(),
            full_name: "Old Name".into(),
            username: "alice".into(),
            rfid_uid: "04:AA:BB".into(),
            role: Role::User,
            current_points: 0,
            total_recycled: 0,
            carbon_saved_g: 0,
            department: "Physics".into(),
        };

        let user = user_from_stats(stats_user(), &prev);

        assert_eq!(user.full_name, "Alice A");
        assert_eq!(user.current_points, 150);
        assert_eq!(user.total_recycled, 42);
        // Not in the stats payload -- carried from the previous snapshot.
        assert_eq!(user.rfid_uid, "04:AA:BB");
        assert_eq!(user.department, "Physics");
    }

    #[test]
    fn leaderboard_entry_placeholders_stay_empty() {
        let user: User = LeaderboardEntry {
            user_id: 3,
            full_name: "Bob".into(),
            username: "bob".into(),
            current_points: 500,
            total_recycled_items: 80,
            carbon_saved_g: 2000,
            role: "admin".into(),
        }
        .into();

        assert_eq!(user.id, "3");
        assert_eq!(user.role, Role::Admin);
        assert_eq!(user.rfid_uid, "");
        assert_eq!(user.department, "");
    }

    #[test]
    fn empty_image_url_means_no_image() {
        let log: WasteLog = HistoryEntry {
            log_id: 1,
            user_id: Some(7),
            waste_type: "plastic".into(),
            waste_count: 2,
            points_earned: 20,
            image_url: Some(String::new()),
            timestamp: "2026-02-01T10:00:00Z".into(),
        }
        .into();

        assert_eq!(log.image_url, None);
        assert!(log.timestamp.is_some());
        assert_eq!(log.user_id.as_deref(), Some("7"));
    }

    #[test]
    fn unparseable_timestamp_maps_to_none() {
        let log: WasteLog = HistoryEntry {
            log_id: 2,
            user_id: None,
            waste_type: "paper".into(),
            waste_count: 1,
            points_earned: 5,
            image_url: None,
            timestamp: "yesterday-ish".into(),
        }
        .into();

        assert_eq!(log.timestamp, None);
        assert_eq!(log.user_id, None);
    }

    #[test]
    fn bin_record_conversion() {
        let bin: SmartBin = BinRecord {
            bin_id: 1,
            bin_name: "Library North".into(),
            max_capacity: 60.0,
            current_fill_level: 45.0,
            status: "active".into(),
            created_at: None,
        }
        .into();

        assert_eq!(bin.id, "1");
        assert_eq!(bin.fill_pct, 75);
        assert_eq!(bin.status, BinStatus::Active);
        assert_eq!(bin.location, "Campus Location");
        assert_eq!(bin.battery_pct, 85);
    }

    #[test]
    fn bin_status_mapping() {
        assert_eq!(BinStatus::parse("active"), BinStatus::Active);
        assert_eq!(BinStatus::parse("full"), BinStatus::Full);
        assert_eq!(BinStatus::parse("maintenance"), BinStatus::Maintenance);
        assert_eq!(BinStatus::parse("on-fire"), BinStatus::Unknown);
    }
}
