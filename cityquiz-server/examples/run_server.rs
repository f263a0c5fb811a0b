//! Example to run the CITYQUIZ server standalone against a JSON dataset
//!
//! Run with: cargo run -p cityquiz-server --example run_server -- cities.json

use cityquiz_dataset::CityTable;
use cityquiz_server::{run_server, ServerConfig, ServerState};
use std::path::PathBuf;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let dataset_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("cities.json"));

    let dataset = CityTable::from_json_file(&dataset_path)?;
    println!("Loaded {} cities from {}", dataset.len(), dataset_path.display());

    let config = ServerConfig::default();
    println!("Open http://localhost:{}/", config.port);

    run_server(config, Arc::new(ServerState::new(dataset))).await
}
