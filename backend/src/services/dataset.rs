//! Classified settlement dataset served to the map.
//!
//! Built once at startup from the catalogue and shared read-only afterwards.

use serde_json::Value;
use tracing::{info, warn};

use crate::api::{
    DatasetMetadata, LegendItem, MarkerData, Settlement, SettlementWithData, TransitStats,
    TransportStatus,
};
use crate::config::{ReachabilityWindow, TransitConfig};
use crate::data::{self, checksum::calculate_checksum, transport_table, DESTINATION};
use crate::error::TransitResult;

use super::{aggregator, classifier, map_layer};

#[derive(Debug, Clone)]
pub struct TransitDataset {
    destination: String,
    window: ReachabilityWindow,
    settlements: Vec<SettlementWithData>,
    stats: Option<TransitStats>,
    checksum: String,
}

impl TransitDataset {
    /// Classify `settlements` and precompute the stats.
    ///
    /// The destination is always the one the transport table is measured to.
    pub fn build(settlements: Vec<Settlement>, window: ReachabilityWindow) -> TransitResult<Self> {
        let destination = DESTINATION.to_string();
        if !settlements.iter().any(|s| s.name == destination) {
            warn!(destination = %destination, "destination is not in the settlement catalogue");
        }

        let settlements = classifier::enrich_settlements(settlements);
        let stats = aggregator::compute_transit_stats(&settlements, &destination);
        let checksum = calculate_checksum(&serde_json::to_vec(&settlements)?);

        let fallback_count = settlements
            .iter()
            .filter(|s| transport_table::lookup(&s.name).is_none())
            .count();
        info!(
            settlements = settlements.len(),
            reachable = stats.as_ref().map_or(0, |s| s.reachable_count),
            fallback = fallback_count,
            "transit dataset built"
        );

        Ok(Self {
            destination,
            window,
            settlements,
            stats,
            checksum,
        })
    }

    /// Build from configuration, loading a replacement catalogue if one is set.
    pub fn from_config(config: &TransitConfig) -> TransitResult<Self> {
        let settlements = match &config.dataset.settlements_file {
            Some(path) => data::load_settlements(path)?,
            None => data::bundled_settlements()?,
        };
        Self::build(settlements, config.dataset.window)
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn settlements(&self) -> &[SettlementWithData] {
        &self.settlements
    }

    pub fn find(&self, name: &str) -> Option<&SettlementWithData> {
        self.settlements.iter().find(|s| s.name == name)
    }

    pub fn with_status(&self, status: TransportStatus) -> Vec<&SettlementWithData> {
        self.settlements
            .iter()
            .filter(|s| s.status == status)
            .collect()
    }

    /// `None` when the catalogue is empty.
    pub fn stats(&self) -> Option<&TransitStats> {
        self.stats.as_ref()
    }

    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    pub fn markers(&self) -> Vec<MarkerData> {
        map_layer::markers(&self.settlements, &self.destination)
    }

    pub fn legend(&self) -> Vec<LegendItem> {
        map_layer::legend(&self.destination)
    }

    pub fn feature_collection(&self) -> Value {
        map_layer::to_feature_collection(&self.settlements, &self.destination)
    }

    pub fn metadata(&self) -> DatasetMetadata {
        DatasetMetadata {
            destination: self.destination.clone(),
            window_start: self.window.start,
            window_end: self.window.end,
            settlement_count: self.settlements.len(),
            transport_table_size: transport_table::len(),
            checksum: self.checksum.clone(),
        }
    }
}
