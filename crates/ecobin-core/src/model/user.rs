use serde::{Deserialize, Serialize};
use strum::Display;

/// Access level of an identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    /// Parse a backend role string. Anything unrecognized is a plain user --
    /// privilege must never be granted by a garbled field.
    pub fn parse(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("admin") {
            Self::Admin
        } else {
            Self::User
        }
    }
}

/// The authenticated user's client-side profile record.
///
/// Serde-serializable because the whole record is persisted as the session
/// identity. Mutated only by wholesale replacement; the stats refresh builds
/// a new record rather than patching fields in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub full_name: String,
    pub username: String,
    /// RFID credential identifier. Not returned by the stats or leaderboard
    /// endpoints; carried over from the previous snapshot (or empty).
    #[serde(default)]
    pub rfid_uid: String,
    pub role: Role,
    #[serde(default)]
    pub current_points: i64,
    #[serde(default)]
    pub total_recycled: i64,
    #[serde(default)]
    pub carbon_saved_g: i64,
    /// Like `rfid_uid`, only known from out-of-band sources.
    #[serde(default)]
    pub department: String,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// The numeric backend id, when the stringified id is well-formed.
    pub fn numeric_id(&self) -> Option<i64> {
        self.id.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parse_is_case_insensitive_and_defaults_to_user() {
        assert_eq!(Role::parse("admin"), Role::Admin);
        assert_eq!(Role::parse("Admin"), Role::Admin);
        assert_eq!(Role::parse("user"), Role::User);
        assert_eq!(Role::parse("superuser"), Role::User);
        assert_eq!(Role::parse(""), Role::User);
    }
}
