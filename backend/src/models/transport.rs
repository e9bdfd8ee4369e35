//! Transport records and status brackets.

use serde::{Deserialize, Serialize};

use crate::services::classifier;

/// Travel time assigned to settlements without a usable connection.
pub const UNREACHABLE_TRAVEL_MINUTES: u32 = 999;

/// Morning commute to the destination for a single settlement.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportRecord {
    /// Minutes to reach the destination, transfers included
    pub travel_time_minutes: u32,
    /// Number of transfers on the fastest connection
    pub transfers: u32,
    /// Whether the destination is reachable inside the morning window
    pub is_reachable: bool,
}

impl TransportRecord {
    pub const fn new(travel_time_minutes: u32, transfers: u32, is_reachable: bool) -> Self {
        Self {
            travel_time_minutes,
            transfers,
            is_reachable,
        }
    }

    /// Record used for names missing from the transport table.
    pub const fn unreachable() -> Self {
        Self::new(UNREACHABLE_TRAVEL_MINUTES, 0, false)
    }

    pub fn status(&self) -> TransportStatus {
        classifier::classify(self)
    }

    pub fn is_direct(&self) -> bool {
        self.transfers == 0
    }
}

impl Default for TransportRecord {
    fn default() -> Self {
        Self::unreachable()
    }
}

/// Travel-time bracket used for map colouring.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransportStatus {
    Excellent,
    Good,
    Average,
    Poor,
    Unreachable,
}

impl TransportStatus {
    /// All brackets, best first.
    pub const ALL: [TransportStatus; 5] = [
        TransportStatus::Excellent,
        TransportStatus::Good,
        TransportStatus::Average,
        TransportStatus::Poor,
        TransportStatus::Unreachable,
    ];

    pub fn color(self) -> &'static str {
        classifier::status_color(self)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TransportStatus::Excellent => "EXCELLENT",
            TransportStatus::Good => "GOOD",
            TransportStatus::Average => "AVERAGE",
            TransportStatus::Poor => "POOR",
            TransportStatus::Unreachable => "UNREACHABLE",
        }
    }
}

impl std::fmt::Display for TransportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
