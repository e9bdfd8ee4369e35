//! Data Transfer Objects for the HTTP API.
//!
//! Visualization DTOs are re-exported from the API module; the request and
//! housekeeping types specific to HTTP live here.

use serde::{Deserialize, Serialize};

pub use crate::api::{
    Classification, DatasetMetadata, LegendItem, MarkerData, SettlementWithData, StatsResponse,
    TransportLookup,
};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Number of settlements in the served dataset
    pub settlements: usize,
}

/// Query parameters for the classify endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyQuery {
    /// Travel time in minutes
    pub minutes: u32,
    #[serde(default)]
    pub transfers: u32,
    /// Defaults to reachable
    #[serde(default = "default_true")]
    pub reachable: bool,
}

fn default_true() -> bool {
    true
}
