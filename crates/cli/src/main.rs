//! Wayfinder CLI
//!
//! Command-line interface for geocoding place names and getting directions.

#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};
use integration_routing::{LocationResolver, OrsClient, RoutingConfig, TravelMode};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Wayfinder CLI
#[derive(Parser)]
#[command(name = "wayfinder-cli")]
#[command(author, version, about = "Geocode places and get directions", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// OpenRouteService API key
    #[arg(long, env = "ORS_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Base URL for the OpenRouteService API
    #[arg(long, default_value = "https://api.openrouteservice.org")]
    base_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a place name to coordinates
    ///
    /// Example: wayfinder-cli geocode "Toronto, ON"
    Geocode {
        /// Free-text place name or address
        query: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Get directions between two places
    ///
    /// Example: wayfinder-cli route "Toronto, ON" "Ottawa, ON" --mode bike
    Route {
        /// Origin place name
        origin: String,

        /// Destination place name
        destination: String,

        /// Travel mode: car, walk or bike
        #[arg(short, long, default_value = "car")]
        mode: TravelMode,

        /// Print the full path as JSON instead of the summary
        #[arg(long)]
        json: bool,
    },
}

const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = log_filter_from_verbosity(cli.verbose);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = RoutingConfig {
        api_key: cli.api_key,
        base_url: cli.base_url,
        ..RoutingConfig::default()
    };
    let client = OrsClient::new(&config)?;

    match cli.command {
        Commands::Geocode { query, json } => {
            let location = client.geocode(&query).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&location)?);
            } else {
                println!("Geocoded Coordinates: {location}");
            }
        },

        Commands::Route {
            origin,
            destination,
            mode,
            json,
        } => {
            let route = client.route(&origin, &destination, mode).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&route)?);
            } else {
                println!("{}", route.summary());
                println!("Path points: {}", route.points.len());
            }
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filter_levels() {
        assert_eq!(log_filter_from_verbosity(0), "warn");
        assert_eq!(log_filter_from_verbosity(1), "info");
        assert_eq!(log_filter_from_verbosity(2), "debug");
        assert_eq!(log_filter_from_verbosity(9), "trace");
    }

    #[test]
    fn test_cli_parses_route_command() {
        let cli = Cli::parse_from([
            "wayfinder-cli",
            "--api-key",
            "test-key",
            "route",
            "Toronto, ON",
            "Ottawa, ON",
            "--mode",
            "walk",
        ]);
        match cli.command {
            Commands::Route { mode, .. } => assert_eq!(mode, TravelMode::Walk),
            Commands::Geocode { .. } => panic!("expected route command"),
        }
    }
}
