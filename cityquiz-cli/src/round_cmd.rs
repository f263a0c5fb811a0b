//! Round command - play one headless round
//!
//! Samples a round from a dataset file, fills every category with a random
//! guess, scores it and prints the reveal. Handy for checking that a dataset
//! file actually supports the requested filter.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use cityquiz_core::{
    Category, CityFilter, GameSession, Region, DEFAULT_MIN_POPULATION, DEFAULT_ROUND_SIZE,
};
use cityquiz_dataset::CityTable;

#[derive(Args)]
pub struct RoundArgs {
    /// JSON dataset (array of city records)
    #[arg(long)]
    pub dataset: PathBuf,

    /// Minimum population for sampled cities
    #[arg(long, default_value_t = DEFAULT_MIN_POPULATION)]
    pub population: u64,

    /// Region restriction: "eu", "world", or anything else for Germany
    #[arg(long, default_value = "de")]
    pub region: String,

    /// Number of cities per round
    #[arg(long, default_value_t = DEFAULT_ROUND_SIZE)]
    pub size: usize,

    /// RNG seed for a reproducible round
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Run round command
pub fn run(args: RoundArgs) -> Result<()> {
    let table = CityTable::from_json_file(&args.dataset)?;
    let filter = CityFilter {
        min_population: args.population,
        region: Region::from_query(Some(args.region.as_str())),
    };

    let mut rng = match args.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let mut session = GameSession::new();
    session.new_round(&table, &filter, args.size, &mut rng)?;

    let names: Vec<String> = session
        .round()
        .city_names()
        .into_iter()
        .map(str::to_string)
        .collect();
    println!("Round: {}", names.join(", "));

    // Random self-play to exercise the whole lifecycle
    for category in Category::ALL {
        let city = names
            .choose(&mut rng)
            .context("round has no cities")?
            .clone();
        session.set_guess(category, &city);
        println!("  guess {:<8} -> {}", category.as_str(), city);
    }

    let report = session.check()?;
    println!("Correct: {}, Wrong: {}", report.correct, report.wrong);
    for category in Category::ALL {
        println!("  {:<8} = {}", category.as_str(), report.extrema.get(category));
    }

    println!("Reveal:");
    for record in session.reveal()? {
        println!(
            "  {} - {} ({})  lat {}  lon {}  pop {}",
            record.name, record.country, record.continent, record.lat, record.lon, record.population
        );
    }

    Ok(())
}
