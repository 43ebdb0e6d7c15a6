use serde::{Deserialize, Serialize};
use strum::Display;

/// Operational state reported by a smart bin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BinStatus {
    Active,
    Full,
    Maintenance,
    /// Backend sent a status string we don't recognize.
    Unknown,
}

impl BinStatus {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "active" => Self::Active,
            "full" => Self::Full,
            "maintenance" => Self::Maintenance,
            _ => Self::Unknown,
        }
    }
}

/// A smart recycling bin, read-only on the client except for the admin
/// reset round-trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmartBin {
    pub id: String,
    pub name: String,
    /// Per-bin location text is not yet reported by the backend; this is a
    /// fixed placeholder until the telemetry schema grows a location field.
    pub location: String,
    /// Maximum capacity in liters.
    pub max_capacity: f64,
    /// Fill percentage 0..=100, recomputed from raw volume on every fetch.
    pub fill_pct: u8,
    pub status: BinStatus,
    /// Placeholder -- battery telemetry is not reported yet.
    pub battery_pct: u8,
}

impl SmartBin {
    /// Bins at or above this fill percentage warrant attention.
    pub const FILL_WARN_PCT: u8 = 80;

    pub fn needs_attention(&self) -> bool {
        self.fill_pct >= Self::FILL_WARN_PCT || self.status != BinStatus::Active
    }
}
