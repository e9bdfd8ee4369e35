//! Settlement catalogue entries and their enriched form.

use serde::{Deserialize, Serialize};

use super::transport::{TransportRecord, TransportStatus};

/// A settlement shown on the map.
///
/// The name is the unique key used to look up the transport record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settlement {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

impl Settlement {
    pub fn new(name: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            name: name.into(),
            lat,
            lng,
        }
    }
}

/// A settlement joined with its transport record and derived classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettlementWithData {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub travel_time_minutes: u32,
    pub transfers: u32,
    pub is_reachable: bool,
    pub status: TransportStatus,
    pub color: String,
}

impl SettlementWithData {
    pub fn new(settlement: Settlement, record: TransportRecord) -> Self {
        let status = record.status();
        Self {
            name: settlement.name,
            lat: settlement.lat,
            lng: settlement.lng,
            travel_time_minutes: record.travel_time_minutes,
            transfers: record.transfers,
            is_reachable: record.is_reachable,
            status,
            color: status.color().to_string(),
        }
    }

    /// The transport record this entry was built from.
    pub fn record(&self) -> TransportRecord {
        TransportRecord {
            travel_time_minutes: self.travel_time_minutes,
            transfers: self.transfers,
            is_reachable: self.is_reachable,
        }
    }

    /// Coordinates in GeoJSON order (`[lng, lat]`).
    pub fn geojson_position(&self) -> [f64; 2] {
        [self.lng, self.lat]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geojson_position_is_lng_first() {
        let s = Settlement::new("Pécs", 46.0727, 18.2323);
        let data = SettlementWithData::new(s, TransportRecord::new(0, 0, true));
        assert_eq!(data.geojson_position(), [18.2323, 46.0727]);
    }

    #[test]
    fn test_with_data_derives_status_and_color() {
        let s = Settlement::new("Komló", 46.1915, 18.2610);
        let data = SettlementWithData::new(s, TransportRecord::new(40, 0, true));
        assert_eq!(data.status, TransportStatus::Excellent);
        assert_eq!(data.color, "#22c55e");
        assert_eq!(data.record(), TransportRecord::new(40, 0, true));
    }

    #[test]
    fn test_with_data_serialization() {
        let s = Settlement::new("Sellye", 45.8727, 17.8463);
        let data = SettlementWithData::new(s, TransportRecord::new(75, 0, true));
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["travel_time_minutes"], 75);
        assert_eq!(json["is_reachable"], true);
        assert_eq!(json["status"], "GOOD");
    }
}
