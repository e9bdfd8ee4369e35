use crate::api::{SettlementWithData, TransitStats, TransportStatus};

/// Compute the summary panel figures for a classified settlement list.
///
/// Returns `None` for an empty list. The average travel time only covers
/// reachable settlements other than `destination`, and is 0 when there are
/// none.
pub fn compute_transit_stats(
    settlements: &[SettlementWithData],
    destination: &str,
) -> Option<TransitStats> {
    if settlements.is_empty() {
        return None;
    }

    let mut reachable_count = 0;
    let mut excellent_count = 0;
    let mut difficult_count = 0;
    let mut travel_sum: u64 = 0;
    let mut travel_samples: u64 = 0;

    for settlement in settlements {
        match settlement.status {
            TransportStatus::Excellent => excellent_count += 1,
            TransportStatus::Poor => difficult_count += 1,
            _ => {}
        }

        if settlement.is_reachable {
            reachable_count += 1;
            if settlement.name != destination {
                travel_sum += u64::from(settlement.travel_time_minutes);
                travel_samples += 1;
            }
        }
    }

    let average_travel_minutes = if travel_samples == 0 {
        0
    } else {
        (travel_sum as f64 / travel_samples as f64).round() as u32
    };

    let total_count = settlements.len();
    Some(TransitStats {
        total_count,
        reachable_count,
        unreachable_count: total_count - reachable_count,
        excellent_count,
        difficult_count,
        average_travel_minutes,
    })
}
