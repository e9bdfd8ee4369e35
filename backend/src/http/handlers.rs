//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and reads from the dataset
//! built at startup; nothing is recomputed per request except ad-hoc lookups.

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

use super::dto::{
    Classification, ClassifyQuery, DatasetMetadata, HealthResponse, LegendItem, MarkerData,
    SettlementWithData, StatsResponse, TransportLookup,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::TransportRecord;
use crate::data::transport_table;
use crate::services::classifier;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        settlements: state.dataset.settlements().len(),
    }))
}

// =============================================================================
// Settlements
// =============================================================================

/// GET /v1/settlements
///
/// The full classified list. Tagged with the dataset checksum as `ETag`;
/// a matching `If-None-Match` gets `304 Not Modified`.
pub async fn list_settlements(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let etag = format!("\"{}\"", state.dataset.checksum());
    let cached = headers
        .get(header::IF_NONE_MATCH)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == etag);

    if cached {
        return (StatusCode::NOT_MODIFIED, [(header::ETAG, etag)]).into_response();
    }
    ([(header::ETAG, etag)], Json(state.dataset.settlements())).into_response()
}

/// GET /v1/settlements/{name}
pub async fn get_settlement(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> HandlerResult<SettlementWithData> {
    state
        .dataset
        .find(&name)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Settlement '{}' is not on the map", name)))
}

/// GET /v1/transport/{name}
///
/// Transport record for any name. Never fails: names missing from the table
/// get the unreachable record with `known = false`.
pub async fn get_transport(Path(name): Path<String>) -> HandlerResult<TransportLookup> {
    let known = transport_table::lookup(&name).is_some();
    let record = classifier::transport_for_name(&name);
    let status = record.status();

    Ok(Json(TransportLookup {
        name,
        record,
        status,
        color: status.color().to_string(),
        known,
    }))
}

/// GET /v1/classify?minutes=&transfers=&reachable=
///
/// A missing or malformed `minutes` is answered with a `BAD_REQUEST` body.
pub async fn classify(
    query: Result<Query<ClassifyQuery>, QueryRejection>,
) -> HandlerResult<Classification> {
    let Query(query) = query?;
    let record = classifier::apply_cutoff(TransportRecord::new(
        query.minutes,
        query.transfers,
        query.reachable,
    ));
    Ok(Json(Classification::from(record.status())))
}

// =============================================================================
// Map Endpoints
// =============================================================================

/// GET /v1/markers
pub async fn get_markers(State(state): State<AppState>) -> HandlerResult<Vec<MarkerData>> {
    Ok(Json(state.dataset.markers()))
}

/// GET /v1/legend
pub async fn get_legend(State(state): State<AppState>) -> HandlerResult<Vec<LegendItem>> {
    Ok(Json(state.dataset.legend()))
}

/// GET /v1/geojson
pub async fn get_geojson(State(state): State<AppState>) -> HandlerResult<Value> {
    Ok(Json(state.dataset.feature_collection()))
}

/// GET /v1/stats
///
/// Summary panel figures, or `{"status": "no_data"}` for an empty catalogue.
pub async fn get_stats(State(state): State<AppState>) -> HandlerResult<StatsResponse> {
    Ok(Json(StatsResponse::from(state.dataset.stats().cloned())))
}

/// GET /v1/metadata
pub async fn get_metadata(State(state): State<AppState>) -> HandlerResult<DatasetMetadata> {
    Ok(Json(state.dataset.metadata()))
}
