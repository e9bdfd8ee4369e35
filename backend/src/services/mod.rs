//! Service layer: classification, aggregation and map presentation.
//!
//! Everything here is synchronous and side-effect free apart from logging.
//! The HTTP layer only reads the precomputed [`dataset::TransitDataset`].

pub mod aggregator;
pub mod classifier;
pub mod dataset;
pub mod map_layer;

pub use aggregator::compute_transit_stats;
pub use classifier::{
    calculate_transport_data, classify, enrich_settlements, lookup_transport, status_color,
};
pub use dataset::TransitDataset;
