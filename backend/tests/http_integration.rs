#![cfg(feature = "http-server")]

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use baranya_transit::api::Settlement;
use baranya_transit::config::{ReachabilityWindow, TransitConfig};
use baranya_transit::http::{create_router, AppState};
use baranya_transit::services::TransitDataset;

fn bundled_app() -> Router {
    let dataset = TransitDataset::from_config(&TransitConfig::default()).unwrap();
    create_router(AppState::new(dataset))
}

fn app_with(settlements: Vec<Settlement>) -> Router {
    let dataset = TransitDataset::build(settlements, ReachabilityWindow::default()).unwrap();
    create_router(AppState::new(dataset))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get(bundled_app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(body["settlements"].as_u64().unwrap() > 0);
}

#[tokio::test]
async fn test_list_settlements() {
    let (status, body) = get(bundled_app(), "/v1/settlements").await;
    assert_eq!(status, StatusCode::OK);
    let list = body.as_array().unwrap();
    let pecs = list.iter().find(|s| s["name"] == "Pécs").unwrap();
    assert_eq!(pecs["travel_time_minutes"], 0);
    assert_eq!(pecs["status"], "EXCELLENT");
}

#[tokio::test]
async fn test_list_settlements_etag() {
    let app = bundled_app();
    let response = app
        .clone()
        .oneshot(Request::builder().uri("/v1/settlements").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let etag = response
        .headers()
        .get(header::ETAG)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();

    let cached = app
        .oneshot(
            Request::builder()
                .uri("/v1/settlements")
                .header(header::IF_NONE_MATCH, etag)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(cached.status(), StatusCode::NOT_MODIFIED);
}

#[tokio::test]
async fn test_get_settlement_by_accented_name() {
    let (status, body) = get(bundled_app(), "/v1/settlements/Moh%C3%A1cs").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Mohács");
    assert_eq!(body["travel_time_minutes"], 60);
}

#[tokio::test]
async fn test_get_settlement_not_on_map() {
    let (status, body) = get(bundled_app(), "/v1/settlements/Budapest").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_transport_lookup_is_total() {
    let (status, body) = get(bundled_app(), "/v1/transport/Budapest").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["known"], false);
    assert_eq!(body["record"]["is_reachable"], false);
    assert_eq!(body["record"]["travel_time_minutes"], 999);
    assert_eq!(body["status"], "UNREACHABLE");

    let (_, body) = get(bundled_app(), "/v1/transport/Kom1%C3%B3").await;
    assert_eq!(body["known"], false);

    let (_, body) = get(bundled_app(), "/v1/transport/Koml%C3%B3").await;
    assert_eq!(body["known"], true);
    assert_eq!(body["status"], "EXCELLENT");
}

#[tokio::test]
async fn test_classify_endpoint() {
    let (status, body) = get(bundled_app(), "/v1/classify?minutes=45").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "EXCELLENT");

    let (_, body) = get(bundled_app(), "/v1/classify?minutes=46&transfers=1").await;
    assert_eq!(body["status"], "GOOD");

    let (_, body) = get(bundled_app(), "/v1/classify?minutes=20&reachable=false").await;
    assert_eq!(body["status"], "UNREACHABLE");
    assert_eq!(body["color"], "#dc2626");

    let (_, body) = get(bundled_app(), "/v1/classify?minutes=200").await;
    assert_eq!(body["status"], "UNREACHABLE");
}

#[tokio::test]
async fn test_classify_requires_minutes() {
    let (status, body) = get(bundled_app(), "/v1/classify").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
    assert!(body["details"].as_str().unwrap().contains("minutes"));
}

#[tokio::test]
async fn test_classify_rejects_unparsable_minutes() {
    let (status, body) = get(bundled_app(), "/v1/classify?minutes=abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
    assert_eq!(body["message"], "Invalid query parameters");
}

#[tokio::test]
async fn test_stats_endpoint() {
    let (status, body) = get(bundled_app(), "/v1/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["unreachable_count"], 1);
}

#[tokio::test]
async fn test_stats_endpoint_no_data() {
    let (status, body) = get(app_with(vec![]), "/v1/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({"status": "no_data"}));
}

#[tokio::test]
async fn test_markers_endpoint() {
    let app = app_with(vec![
        Settlement::new("Pécs", 46.0727, 18.2323),
        Settlement::new("Sellye", 45.8727, 17.8463),
    ]);
    let (status, body) = get(app, "/v1/markers").await;
    assert_eq!(status, StatusCode::OK);
    let markers = body.as_array().unwrap();
    assert_eq!(markers[0]["is_destination"], true);
    assert_eq!(markers[0]["style"]["radius"], 10);
    assert_eq!(markers[0]["style"]["color"], "#3b82f6");
    assert_eq!(markers[1]["style"]["radius"], 6);
    assert_eq!(markers[1]["popup"]["kind"], "reachable");
    assert_eq!(markers[1]["popup"]["travel_time"], "75 perc");
}

#[tokio::test]
async fn test_legend_endpoint() {
    let (status, body) = get(bundled_app(), "/v1/legend").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 6);
    assert_eq!(body[0]["status"], "EXCELLENT");
}

#[tokio::test]
async fn test_geojson_endpoint() {
    let (status, body) = get(bundled_app(), "/v1/geojson").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["type"], "FeatureCollection");
    assert!(!body["features"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_metadata_endpoint() {
    let (status, body) = get(bundled_app(), "/v1/metadata").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["destination"], "Pécs");
    assert_eq!(body["window_start"], "07:00:00");
    assert_eq!(body["window_end"], "10:00:00");
    assert_eq!(body["checksum"].as_str().unwrap().len(), 64);
}
