use baranya_transit::api::{Settlement, TransportRecord, TransportStatus};
use baranya_transit::data::{bundled_settlements, transport_table};
use baranya_transit::services::{calculate_transport_data, classify, enrich_settlements};

fn expected_status(record: &TransportRecord) -> TransportStatus {
    if !record.is_reachable || record.travel_time_minutes >= 180 {
        TransportStatus::Unreachable
    } else if record.travel_time_minutes <= 45 {
        TransportStatus::Excellent
    } else if record.travel_time_minutes <= 80 {
        TransportStatus::Good
    } else if record.travel_time_minutes <= 110 {
        TransportStatus::Average
    } else {
        TransportStatus::Poor
    }
}

#[test]
fn test_every_table_entry_classified_by_thresholds() {
    for (name, raw) in transport_table::entries() {
        let record = calculate_transport_data(&Settlement::new(name, 46.0, 18.0));
        assert_eq!(
            classify(&record),
            expected_status(&raw),
            "inconsistent bracket for {}",
            name
        );
    }
}

#[test]
fn test_threshold_edges() {
    let at = |minutes| classify(&TransportRecord::new(minutes, 0, true));
    assert_eq!(at(45), TransportStatus::Excellent);
    assert_eq!(at(46), TransportStatus::Good);
    assert_eq!(at(80), TransportStatus::Good);
    assert_eq!(at(81), TransportStatus::Average);
    assert_eq!(at(110), TransportStatus::Average);
    assert_eq!(at(111), TransportStatus::Poor);
}

#[test]
fn test_table_examples_on_bracket_edges() {
    // Husztót 45, Kovácsszénája 48, Tékes 80, Alsószentmárton 110
    let status_of = |name: &str| {
        calculate_transport_data(&Settlement::new(name, 46.0, 18.0)).status()
    };
    assert_eq!(status_of("Husztót"), TransportStatus::Excellent);
    assert_eq!(status_of("Kovácsszénája"), TransportStatus::Good);
    assert_eq!(status_of("Tékes"), TransportStatus::Good);
    assert_eq!(status_of("Alsószentmárton"), TransportStatus::Average);
}

#[test]
fn test_unknown_settlement_is_not_reachable() {
    for name in ["Budapest", "", "pécs", "Kömlő "] {
        let record = calculate_transport_data(&Settlement::new(name, 0.0, 0.0));
        assert!(!record.is_reachable, "{:?} should be unreachable", name);
        assert_eq!(record.travel_time_minutes, 999);
        assert_eq!(classify(&record), TransportStatus::Unreachable);
    }
}

#[test]
fn test_out_of_county_entry_is_unreachable() {
    let record = calculate_transport_data(&Settlement::new("Kömlő", 47.19, 20.43));
    assert!(!record.is_reachable);
}

#[test]
fn test_bundled_catalogue_classification_is_total() {
    let settlements = bundled_settlements().unwrap();
    let count = settlements.len();
    let enriched = enrich_settlements(settlements);
    assert_eq!(enriched.len(), count);
    for s in &enriched {
        assert_eq!(s.color, s.status.color());
    }
}

#[test]
fn test_classification_is_deterministic() {
    let a = enrich_settlements(bundled_settlements().unwrap());
    let b = enrich_settlements(bundled_settlements().unwrap());
    assert_eq!(a, b);
}
