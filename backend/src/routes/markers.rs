use serde::{Deserialize, Serialize};

use crate::models::TransportStatus;

/// Circle marker styling, in the option names map libraries use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    pub radius: u32,
    pub color: String,
    pub fill_color: String,
    pub fill_opacity: f64,
    pub weight: u32,
}

/// Popup body shown when a marker is clicked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PopupContent {
    Destination {
        title: String,
        subtitle: String,
    },
    Unreachable {
        title: String,
        notice: String,
        detail: String,
    },
    Reachable {
        title: String,
        travel_time: String,
        transfers: String,
        /// Set for the poor bracket so the travel time stands out
        highlight: bool,
    },
}

/// Everything needed to place one settlement on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerData {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub status: TransportStatus,
    pub is_destination: bool,
    pub style: MarkerStyle,
    pub popup: PopupContent,
}

/// One legend row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendItem {
    pub label: String,
    pub color: String,
    /// `None` for the destination row
    pub status: Option<TransportStatus>,
}

/// Route function name constants
pub const GET_MARKERS: &str = "get_markers";
pub const GET_LEGEND: &str = "get_legend";
pub const GET_GEOJSON: &str = "get_geojson";
