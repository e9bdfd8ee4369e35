//! Print the statistics panel and per-bracket settlement lists.
//!
//! ```bash
//! cargo run --example summary
//! SETTLEMENTS_FILE=my_catalogue.json cargo run --example summary
//! ```

use baranya_transit::api::TransportStatus;
use baranya_transit::config::TransitConfig;
use baranya_transit::services::TransitDataset;

fn main() -> anyhow::Result<()> {
    let config = TransitConfig::load()?;
    let dataset = TransitDataset::from_config(&config)?;

    println!("Destination: {}", dataset.destination());
    match dataset.stats() {
        None => println!("No data"),
        Some(stats) => {
            println!("Settlements:        {}", stats.total_count);
            println!("Average travel:     {} min", stats.average_travel_minutes);
            println!("Excellent (<=45):   {}", stats.excellent_count);
            println!("Reachable (7-10):   {}", stats.reachable_count);
            println!("Unreachable:        {}", stats.unreachable_count);
            println!("Difficult (>110):   {}", stats.difficult_count);
        }
    }

    for status in TransportStatus::ALL {
        let names: Vec<&str> = dataset
            .with_status(status)
            .into_iter()
            .map(|s| s.name.as_str())
            .collect();
        if !names.is_empty() {
            println!("\n{} ({})", status, names.len());
            println!("  {}", names.join(", "));
        }
    }

    Ok(())
}
