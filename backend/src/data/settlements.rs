//! Settlement catalogue loading.
//!
//! The catalogue is a JSON array of `{ "name", "lat", "lng" }` objects. A copy
//! covering the county towns and their surroundings is compiled into the
//! binary; a replacement can be loaded from disk at startup.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{TransitError, TransitResult};
use crate::models::Settlement;

const BUNDLED_CATALOGUE: &str = include_str!("../../data/settlements.json");

/// Parse and validate a catalogue from JSON text.
pub fn parse_settlements(json: &str) -> TransitResult<Vec<Settlement>> {
    let settlements: Vec<Settlement> = serde_json::from_str(json)?;
    validate_settlements(&settlements)?;
    Ok(settlements)
}

/// The catalogue compiled into the crate.
pub fn bundled_settlements() -> TransitResult<Vec<Settlement>> {
    parse_settlements(BUNDLED_CATALOGUE)
}

/// Load a catalogue from a JSON file.
pub fn load_settlements<P: AsRef<Path>>(path: P) -> TransitResult<Vec<Settlement>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| TransitError::io(path, e))?;
    let settlements = parse_settlements(&content)?;
    info!(
        path = %path.display(),
        count = settlements.len(),
        "loaded settlement catalogue"
    );
    Ok(settlements)
}

fn validate_settlements(settlements: &[Settlement]) -> TransitResult<()> {
    let mut seen = HashSet::with_capacity(settlements.len());
    for s in settlements {
        if s.name.trim().is_empty() {
            return Err(TransitError::validation("settlement name must not be empty"));
        }
        if !s.lat.is_finite() || !(-90.0..=90.0).contains(&s.lat) {
            return Err(TransitError::validation(format!(
                "latitude {} of '{}' is out of range",
                s.lat, s.name
            )));
        }
        if !s.lng.is_finite() || !(-180.0..=180.0).contains(&s.lng) {
            return Err(TransitError::validation(format!(
                "longitude {} of '{}' is out of range",
                s.lng, s.name
            )));
        }
        if !seen.insert(s.name.as_str()) {
            return Err(TransitError::validation(format!(
                "duplicate settlement '{}'",
                s.name
            )));
        }
    }
    Ok(())
}
