//! Serve command - start the quiz web server

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Args;

use cityquiz_dataset::CityTable;
use cityquiz_server::{run_server, ServerConfig, ServerState};

#[derive(Args)]
pub struct ServeArgs {
    /// Port number to listen on
    #[arg(long, default_value = "8003")]
    pub port: u16,

    /// Directory containing static files for the front end
    #[arg(long, default_value = "web")]
    pub static_dir: PathBuf,

    /// JSON dataset (array of city records)
    #[arg(long)]
    pub dataset: Option<PathBuf>,

    /// GeoNames countryInfo.txt (used together with --cities-file)
    #[arg(long, requires = "cities_file")]
    pub country_info: Option<PathBuf>,

    /// GeoNames cities dump, e.g. cities500.txt
    #[arg(long, requires = "country_info")]
    pub cities_file: Option<PathBuf>,
}

/// Run serve command
pub fn run(args: ServeArgs) -> Result<()> {
    let dataset = load_dataset(&args)?;
    let config = configure_server(&args)?;

    tracing::info!(
        "Starting CITYQUIZ server on port {} with {} cities",
        config.port,
        dataset.len()
    );

    start_server(config, dataset)
}

/// Load the city table from whichever source was given
fn load_dataset(args: &ServeArgs) -> Result<CityTable> {
    let table = match (&args.dataset, &args.country_info, &args.cities_file) {
        (Some(json), _, _) => CityTable::from_json_file(json)?,
        (None, Some(country_info), Some(cities_file)) => {
            CityTable::from_geonames(country_info, cities_file)?
        }
        _ => anyhow::bail!("provide --dataset, or --country-info together with --cities-file"),
    };

    if table.is_empty() {
        anyhow::bail!("dataset contains no cities");
    }
    Ok(table)
}

/// Configure server from command arguments
fn configure_server(args: &ServeArgs) -> Result<ServerConfig> {
    validate_static_dir(&args.static_dir)?;

    Ok(ServerConfig {
        port: args.port,
        static_dir: args.static_dir.to_string_lossy().to_string(),
    })
}

/// Start the server (blocking)
fn start_server(config: ServerConfig, dataset: CityTable) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    let state = Arc::new(ServerState::new(dataset));

    runtime.block_on(async { run_server(config, state).await })
}

/// Validate that static directory exists
fn validate_static_dir(path: &PathBuf) -> Result<()> {
    if !path.exists() {
        tracing::warn!(
            "Static directory does not exist: {}. Server will start but may not serve files.",
            path.display()
        );
    } else if !path.is_dir() {
        anyhow::bail!(
            "Static path exists but is not a directory: {}",
            path.display()
        );
    }

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
