//! Settlement classification.
//!
//! Maps a settlement to its transport record and the record to a colour-coded
//! status bracket. Everything here is total: unknown names resolve to the
//! unreachable record instead of failing.

use crate::data::transport_table;
use crate::models::{Settlement, SettlementWithData, TransportRecord, TransportStatus};

/// Upper bound (inclusive) of the excellent bracket, in minutes.
pub const EXCELLENT_MAX_MINUTES: u32 = 45;
/// Upper bound (inclusive) of the good bracket, in minutes.
pub const GOOD_MAX_MINUTES: u32 = 80;
/// Upper bound (inclusive) of the average bracket, in minutes.
pub const AVERAGE_MAX_MINUTES: u32 = 110;
/// Journeys of this length or longer never count as reachable.
pub const REACHABLE_CUTOFF_MINUTES: u32 = 180;

/// Bracket for a transport record. The reachability flag overrides the time.
pub fn classify(record: &TransportRecord) -> TransportStatus {
    if !record.is_reachable {
        return TransportStatus::Unreachable;
    }
    match record.travel_time_minutes {
        t if t <= EXCELLENT_MAX_MINUTES => TransportStatus::Excellent,
        t if t <= GOOD_MAX_MINUTES => TransportStatus::Good,
        t if t <= AVERAGE_MAX_MINUTES => TransportStatus::Average,
        _ => TransportStatus::Poor,
    }
}

/// Map colour for a bracket.
pub fn status_color(status: TransportStatus) -> &'static str {
    match status {
        TransportStatus::Excellent => "#22c55e", // green-500
        TransportStatus::Good => "#84cc16", // lime-500
        TransportStatus::Average => "#facc15", // yellow-400
        TransportStatus::Poor => "#f97316", // orange-500
        TransportStatus::Unreachable => "#dc2626", // red-600
    }
}

/// Raw table record for a settlement name.
pub fn lookup_transport(name: &str) -> TransportRecord {
    transport_table::lookup_or_unreachable(name)
}

/// Clear the reachability flag of journeys at or past the three-hour cut-off.
pub fn apply_cutoff(record: TransportRecord) -> TransportRecord {
    TransportRecord {
        is_reachable: record.is_reachable
            && record.travel_time_minutes < REACHABLE_CUTOFF_MINUTES,
        ..record
    }
}

/// Record for a settlement name with the three-hour cut-off applied.
pub fn transport_for_name(name: &str) -> TransportRecord {
    apply_cutoff(lookup_transport(name))
}

pub fn calculate_transport_data(settlement: &Settlement) -> TransportRecord {
    transport_for_name(&settlement.name)
}

/// Classify every settlement, preserving input order.
pub fn enrich_settlements(settlements: Vec<Settlement>) -> Vec<SettlementWithData> {
    settlements
        .into_iter()
        .map(|s| {
            let record = calculate_transport_data(&s);
            SettlementWithData::new(s, record)
        })
        .collect()
}
