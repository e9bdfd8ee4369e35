//! Transit HTTP Server Binary
//!
//! Builds the classified dataset and serves it to the map frontend.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin transit-server
//!
//! # With a full settlement catalogue
//! SETTLEMENTS_FILE=data/baranya_all.json cargo run --bin transit-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `SETTLEMENTS_FILE`: Settlement catalogue JSON (default: bundled)
//! - `RUST_LOG`: Log filter directives, e.g. `baranya_transit=debug` (default: info)

use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use baranya_transit::config::TransitConfig;
use baranya_transit::http::{create_router, AppState};
use baranya_transit::services::TransitDataset;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting transit HTTP server");

    let config = TransitConfig::load()?;
    let dataset = TransitDataset::from_config(&config)?;
    info!(
        destination = dataset.destination(),
        checksum = dataset.checksum(),
        "Dataset ready"
    );

    let app = create_router(AppState::new(dataset));

    let addr: SocketAddr = config.bind_address().parse()?;
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
