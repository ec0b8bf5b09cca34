//! Command-line interface for campus-aware directions.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod directions;
mod error;

pub use error::CliError;

use directions::DirectionsArgs;

const ARG_SOURCE: &str = "source";
const ARG_DESTINATION: &str = "destination";
const ARG_API_KEY: &str = "api-key";
const ARG_MAPS_BASE_URL: &str = "maps-base-url";
const ARG_TIMEOUT_SECS: &str = "timeout-secs";
const ARG_CAMPUS_CONFIG: &str = "campus-config";
const ARG_TRANSIT_LIMIT: &str = "transit-limit";
const ENV_SOURCE: &str = "CAMPUS_CMDS_DIRECTIONS_SOURCE";
const ENV_DESTINATION: &str = "CAMPUS_CMDS_DIRECTIONS_DESTINATION";
const ENV_API_KEY: &str = "CAMPUS_CMDS_DIRECTIONS_API_KEY";

/// Run the CLI with the current process arguments and environment.
pub async fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Directions(args) => directions::run_directions(args).await,
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "campus",
    about = "Multi-mode directions with inter-campus shuttle suggestions",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fetch directions for every travel mode between two places.
    Directions(DirectionsArgs),
}

#[cfg(test)]
mod tests;
