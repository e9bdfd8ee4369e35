use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Description of the served dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetMetadata {
    pub destination: String,
    pub window_start: NaiveTime,
    pub window_end: NaiveTime,
    pub settlement_count: usize,
    pub transport_table_size: usize,
    /// SHA-256 of the serialized settlement list
    pub checksum: String,
}

/// Route function name constant
pub const GET_METADATA: &str = "get_metadata";
