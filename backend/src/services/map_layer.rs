//! Map presentation data.
//!
//! Builds marker styling, popup text and the legend for the frontend map, and
//! a GeoJSON view of the classified settlements for libraries that consume
//! feature collections directly. Labels are Hungarian, as shown to users.

use serde_json::{json, Value};

use crate::api::{
    LegendItem, MarkerData, MarkerStyle, PopupContent, SettlementWithData, TransportRecord,
    TransportStatus,
};

/// Marker colour reserved for the destination.
pub const DESTINATION_COLOR: &str = "#3b82f6";

const DESTINATION_RADIUS: u32 = 10;
const SETTLEMENT_RADIUS: u32 = 6;
const FILL_OPACITY: f64 = 0.9;
const STROKE_WEIGHT: u32 = 1;

/// Marker and popup for a single settlement.
pub fn marker_for(settlement: &SettlementWithData, destination: &str) -> MarkerData {
    let is_destination = settlement.name == destination;
    let (radius, color) = if is_destination {
        (DESTINATION_RADIUS, DESTINATION_COLOR)
    } else {
        (SETTLEMENT_RADIUS, settlement.status.color())
    };

    MarkerData {
        name: settlement.name.clone(),
        lat: settlement.lat,
        lng: settlement.lng,
        status: settlement.status,
        is_destination,
        style: MarkerStyle {
            radius,
            color: color.to_string(),
            fill_color: color.to_string(),
            fill_opacity: FILL_OPACITY,
            weight: STROKE_WEIGHT,
        },
        popup: popup_for(settlement, is_destination),
    }
}

pub fn markers(settlements: &[SettlementWithData], destination: &str) -> Vec<MarkerData> {
    settlements
        .iter()
        .map(|s| marker_for(s, destination))
        .collect()
}

fn popup_for(settlement: &SettlementWithData, is_destination: bool) -> PopupContent {
    let title = settlement.name.clone();
    if is_destination {
        return PopupContent::Destination {
            title,
            subtitle: "Megyeszékhely (Célállomás)".to_string(),
        };
    }
    if !settlement.is_reachable {
        return PopupContent::Unreachable {
            title,
            notice: "Nem érhető el".to_string(),
            detail: "7:00 - 10:00 között (vagy menetidő > 3 óra)".to_string(),
        };
    }
    PopupContent::Reachable {
        title,
        travel_time: format!("{} perc", settlement.travel_time_minutes),
        transfers: transfer_label(&settlement.record()),
        highlight: settlement.status == TransportStatus::Poor,
    }
}

fn transfer_label(record: &TransportRecord) -> String {
    if record.is_direct() {
        "Közvetlen".to_string()
    } else {
        format!("{} db", record.transfers)
    }
}

/// Legend rows, best bracket first, followed by the destination.
pub fn legend(destination: &str) -> Vec<LegendItem> {
    let mut items: Vec<LegendItem> = TransportStatus::ALL
        .iter()
        .map(|&status| LegendItem {
            label: legend_label(status).to_string(),
            color: status.color().to_string(),
            status: Some(status),
        })
        .collect();

    items.push(LegendItem {
        label: format!("{} (Célállomás)", destination),
        color: DESTINATION_COLOR.to_string(),
        status: None,
    });
    items
}

fn legend_label(status: TransportStatus) -> &'static str {
    match status {
        TransportStatus::Excellent => "≤ 45 perc (Kiváló)",
        TransportStatus::Good => "46 - 80 perc (Jó)",
        TransportStatus::Average => "81 - 110 perc (Közepes)",
        TransportStatus::Poor => "> 110 perc (Lassú)",
        TransportStatus::Unreachable => "Nem elérhető (7-10 óra)",
    }
}

/// GeoJSON `FeatureCollection` of point features, one per settlement.
pub fn to_feature_collection(settlements: &[SettlementWithData], destination: &str) -> Value {
    let features: Vec<Value> = settlements
        .iter()
        .map(|s| {
            json!({
                "type": "Feature",
                "geometry": {
                    "type": "Point",
                    "coordinates": s.geojson_position(),
                },
                "properties": {
                    "name": s.name,
                    "travel_time_minutes": s.travel_time_minutes,
                    "transfers": s.transfers,
                    "is_reachable": s.is_reachable,
                    "status": s.status,
                    "color": s.color,
                    "is_destination": s.name == destination,
                },
            })
        })
        .collect();

    json!({
        "type": "FeatureCollection",
        "features": features,
    })
}
