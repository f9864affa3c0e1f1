//! Flight path engine on the command line.
//!
//! Usage:
//!   cargo run -p ecosky-cli --bin ecosky -- path --from 40.0,-73.0 --to 51.5,-0.1 --rerouted
//!   cargo run -p ecosky-cli --bin ecosky -- report --file routes.json --weather

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use ecosky_cli::{load_route_set, parse_point, Config};
use ecosky_core::{Classification, FlightDetails, GeoPoint, PathBuilder, Route};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about = "Great-circle flight paths, detours and flight times")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the sampled path between two points
    Path {
        #[command(flatten)]
        route: RouteArgs,

        /// Number of segments (overrides ECOSKY_SAMPLES)
        #[arg(long)]
        samples: Option<usize>,

        /// Emit JSON instead of one point per line
        #[arg(long)]
        json: bool,
    },
    /// Print distance and flight time between two points
    Metrics {
        #[command(flatten)]
        route: RouteArgs,

        /// Cruise speed in km/h (overrides ECOSKY_CRUISE_SPEED_KMH)
        #[arg(long)]
        speed: Option<f64>,
    },
    /// Print flight details for every route in a JSON route file
    Report {
        /// JSON array of {origin: {name, lat, lon}, destination: {...}}
        #[arg(long)]
        file: PathBuf,

        /// Add a rerouted twin for every route
        #[arg(long)]
        weather: bool,

        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
struct RouteArgs {
    /// Start point as LAT,LON
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    from: GeoPoint,

    /// End point as LAT,LON
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    to: GeoPoint,

    /// Treat the route as a weather detour
    #[arg(long)]
    rerouted: bool,
}

impl RouteArgs {
    fn route(&self) -> Route {
        let classification = if self.rerouted {
            Classification::Rerouted
        } else {
            Classification::Nominal
        };
        Route::new(self.from, self.to, classification)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("ecosky=info,ecosky_core=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();
    tracing::debug!(?config, "loaded configuration");

    match cli.command {
        Command::Path {
            route,
            samples,
            json,
        } => {
            let mut rules = config.rules();
            if let Some(samples) = samples {
                rules.samples = samples;
            }
            let builder = PathBuilder::new(rules)?;
            let path = builder.build_path(&route.route());

            if json {
                println!("{}", serde_json::to_string_pretty(&path)?);
            } else {
                for point in path.points() {
                    println!("{:.4}, {:.4}", point.lat(), point.lon());
                }
            }
        }
        Command::Metrics { route, speed } => {
            let mut rules = config.rules();
            if let Some(speed) = speed {
                rules.cruise_speed_kmh = speed;
            }
            let builder = PathBuilder::new(rules)?;
            let metrics = builder.route_metrics(&route.route());

            println!("Distance: {:.2} km", metrics.distance_km);
            println!("Duration: {:.2} h", metrics.duration_hours);
            println!("Flight Time: {}", metrics.flight_time());
        }
        Command::Report {
            file,
            weather,
            json,
        } => {
            let set = load_route_set(&file)?.with_weather_mode(weather);
            tracing::info!(
                routes = set.len(),
                weather,
                file = %file.display(),
                "building flight details"
            );

            let builder = PathBuilder::new(config.rules())?;
            let details = FlightDetails::build(&builder, &set.routes());
            if json {
                println!("{}", details.to_json()?);
            } else {
                println!("{details}");
            }
        }
    }

    Ok(())
}
