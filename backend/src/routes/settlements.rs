use serde::{Deserialize, Serialize};

use crate::models::{TransportRecord, TransportStatus};

/// Transport lookup for an arbitrary settlement name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportLookup {
    pub name: String,
    pub record: TransportRecord,
    pub status: TransportStatus,
    pub color: String,
    /// False when the name is missing from the table and the fallback applied
    pub known: bool,
}

/// Bracket and colour for an ad-hoc record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub status: TransportStatus,
    pub color: String,
}

impl From<TransportStatus> for Classification {
    fn from(status: TransportStatus) -> Self {
        Self {
            status,
            color: status.color().to_string(),
        }
    }
}

/// Route function name constants
pub const LIST_SETTLEMENTS: &str = "list_settlements";
pub const GET_SETTLEMENT: &str = "get_settlement";
pub const GET_TRANSPORT: &str = "get_transport";
pub const CLASSIFY: &str = "classify";
