//! CITYQUIZ CLI - Command-line interface
//!
//! Commands:
//! - serve: start the quiz web server
//! - round: play one headless round against a dataset file

mod round_cmd;
mod serve;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cityquiz")]
#[command(about = "City geography quiz")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the quiz web server
    Serve(serve::ServeArgs),
    /// Play one headless round (useful as a dataset smoke test)
    Round(round_cmd::RoundArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => serve::run(args),
        Commands::Round(args) => round_cmd::run(args),
    }
}
