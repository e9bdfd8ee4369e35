mod support;

use std::path::PathBuf;

use baranya_transit::config::TransitConfig;
use baranya_transit::services::TransitDataset;
use baranya_transit::TransitError;
use support::{with_scoped_env, CLEAR_TRANSIT_ENV};

fn env_with<'a>(extra: &[(&'a str, Option<&'a str>)]) -> Vec<(&'a str, Option<&'a str>)> {
    let mut changes: Vec<_> = CLEAR_TRANSIT_ENV.to_vec();
    changes.extend_from_slice(extra);
    changes
}

#[test]
fn test_load_without_overrides() {
    let config = with_scoped_env(&env_with(&[]), TransitConfig::load).unwrap();
    assert_eq!(config.server.port, 8080);
    assert!(config.dataset.settlements_file.is_none());
}

#[test]
fn test_load_applies_env_overrides() {
    let config = with_scoped_env(
        &env_with(&[("HOST", Some("127.0.0.1")), ("PORT", Some("3001"))]),
        TransitConfig::load,
    )
    .unwrap();
    assert_eq!(config.bind_address(), "127.0.0.1:3001");
}

#[test]
fn test_load_rejects_invalid_port() {
    let result = with_scoped_env(&env_with(&[("PORT", Some("not-a-port"))]), TransitConfig::load);
    assert!(matches!(result, Err(TransitError::Validation(_))));
}

#[test]
fn test_settlements_file_override_replaces_catalogue() {
    let path: PathBuf = std::env::temp_dir().join("baranya_transit_config_test.json");
    std::fs::write(
        &path,
        r#"[
            {"name": "Pécs", "lat": 46.0727, "lng": 18.2323},
            {"name": "Harkány", "lat": 45.85, "lng": 18.2347}
        ]"#,
    )
    .unwrap();

    let path_str = path.to_string_lossy().into_owned();
    let config = with_scoped_env(
        &env_with(&[("SETTLEMENTS_FILE", Some(path_str.as_str()))]),
        TransitConfig::load,
    )
    .unwrap();
    let dataset = TransitDataset::from_config(&config).unwrap();

    assert_eq!(dataset.settlements().len(), 2);
    let stats = dataset.stats().unwrap();
    assert_eq!(stats.reachable_count, 2);
    // Harkány only; Pécs is the destination
    assert_eq!(stats.average_travel_minutes, 45);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_missing_settlements_file_fails() {
    let mut config = TransitConfig::default();
    config.dataset.settlements_file = Some(PathBuf::from("/nonexistent/catalogue.json"));
    assert!(matches!(
        TransitDataset::from_config(&config),
        Err(TransitError::Io { .. })
    ));
}

#[test]
fn test_destination_env_var_has_no_effect() {
    let config = with_scoped_env(
        &env_with(&[("TRANSIT_DESTINATION", Some("Komló"))]),
        TransitConfig::load,
    )
    .unwrap();
    let dataset = TransitDataset::from_config(&config).unwrap();

    assert_eq!(dataset.destination(), "Pécs");
    assert_eq!(dataset.metadata().destination, "Pécs");
    let komlo = dataset
        .markers()
        .into_iter()
        .find(|m| m.name == "Komló")
        .unwrap();
    assert!(!komlo.is_destination);
}
