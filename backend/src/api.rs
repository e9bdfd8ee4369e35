//! Public API surface for the backend.
//!
//! Consolidates the DTO types served over HTTP. All types derive
//! Serialize/Deserialize for JSON serialization.

pub use crate::models::{Settlement, SettlementWithData, TransportRecord, TransportStatus};
pub use crate::routes::markers::{LegendItem, MarkerData, MarkerStyle, PopupContent};
pub use crate::routes::metadata::DatasetMetadata;
pub use crate::routes::settlements::{Classification, TransportLookup};
pub use crate::routes::stats::{StatsResponse, TransitStats};
