use serde::{Deserialize, Serialize};

/// Summary panel figures over a classified settlement list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitStats {
    pub total_count: usize,
    pub reachable_count: usize,
    pub unreachable_count: usize,
    /// Settlements in the excellent bracket
    pub excellent_count: usize,
    /// Settlements in the poor bracket
    pub difficult_count: usize,
    /// Mean travel time over reachable settlements other than the
    /// destination, rounded to whole minutes
    pub average_travel_minutes: u32,
}

/// Stats endpoint body: either the figures or a `no_data` marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StatsResponse {
    #[serde(rename = "ok")]
    Available(TransitStats),
    NoData,
}

impl From<Option<TransitStats>> for StatsResponse {
    fn from(stats: Option<TransitStats>) -> Self {
        match stats {
            Some(stats) => StatsResponse::Available(stats),
            None => StatsResponse::NoData,
        }
    }
}

/// Route function name constant
pub const GET_TRANSIT_STATS: &str = "get_transit_stats";
