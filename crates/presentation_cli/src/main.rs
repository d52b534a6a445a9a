//! Placemark CLI
//!
//! Command-line front end for searching places and showing them on a
//! terminal-rendered map.

#![allow(clippy::print_stdout)]

mod terminal;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, bail};
use application::ports::ReverseGeocodePort;
use application::{
    LocationRequestOutcome, MapScreen, MapScreenEvent, ResultListController, SearchScreen,
};
use clap::{Parser, Subcommand};
use domain::entities::SearchResult;
use domain::value_objects::Coordinate;
use infrastructure::{AppConfig, StaticLocationProvider, TmapAdapter, init_tracing};
use parking_lot::Mutex;
use tracing::debug;

use crate::terminal::{TerminalListView, TerminalMapSurface};

/// Placemark CLI
#[derive(Parser)]
#[command(name = "placemark-cli")]
#[command(author, version, about = "Place search on the TMAP API", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (default: ./placemark.toml if present)
    #[arg(short, long, env = "PLACEMARK_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search places by keyword
    ///
    /// Example: placemark-cli search "Seoul Station" --select 0
    Search {
        /// Search keyword
        keyword: String,

        /// Show the result at this index on the map
        #[arg(short, long)]
        select: Option<usize>,

        /// After showing the selection, locate the user at LAT LON
        #[arg(
            long,
            num_args = 2,
            value_names = ["LAT", "LON"],
            allow_negative_numbers = true,
            requires = "select"
        )]
        locate: Option<Vec<f64>>,

        /// After showing the selection, locate the user at the configured [location]
        #[arg(long, requires = "select", conflicts_with = "locate")]
        here: bool,
    },

    /// Resolve a coordinate into an address
    ///
    /// Example: placemark-cli reverse 37.5563 126.9723
    Reverse {
        /// Latitude in degrees
        #[arg(allow_negative_numbers = true)]
        lat: f64,

        /// Longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
}

/// Log filter requested by `-v` flags; none keeps the configured level
const fn log_filter_from_verbosity(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

fn parse_coordinate(lat: f64, lon: f64) -> anyhow::Result<Coordinate> {
    Coordinate::validated(lat, lon).with_context(|| format!("Invalid position {lat}, {lon}"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config =
        AppConfig::load_from(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(level) = log_filter_from_verbosity(cli.verbose) {
        config.logging.level = level.to_string();
    }
    init_tracing(&config.logging)?;
    config.validate().map_err(anyhow::Error::msg)?;
    debug!(environment = %config.environment, "Configuration loaded");

    let adapter = TmapAdapter::with_config(&config.tmap)?;

    match cli.command {
        Commands::Search {
            keyword,
            select,
            locate,
            here,
        } => {
            let position = match (locate, here) {
                (Some(values), _) => Some(parse_coordinate(values[0], values[1])?),
                (None, true) => {
                    let location = config
                        .location
                        .context("--here needs a [location] section in the configuration")?;
                    Some(location.to_coordinate()?)
                },
                (None, false) => None,
            };
            run_search(adapter, &keyword, select, position).await?;
        },

        Commands::Reverse { lat, lon } => {
            let coordinate = parse_coordinate(lat, lon)?;
            let result = adapter.reverse_geocode(coordinate).await?;
            println!("📍 {}: {}", result.building_name(), result.full_address());
        },
    }

    Ok(())
}

async fn run_search(
    adapter: TmapAdapter,
    keyword: &str,
    select: Option<usize>,
    position: Option<Coordinate>,
) -> anyhow::Result<()> {
    let handoff: Arc<Mutex<Option<SearchResult>>> = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&handoff);
    let list = ResultListController::new(
        Box::new(TerminalListView),
        Box::new(move |result| *sink.lock() = Some(result)),
    );
    let mut screen = SearchScreen::new(Arc::new(adapter.clone()), list);

    println!("🔍 Searching for \"{keyword}\"...");
    screen.search(keyword);
    match screen.process_next().await {
        Some(Ok(0)) => println!("No places found"),
        Some(Ok(count)) => println!("{count} places found"),
        Some(Err(e)) => {
            println!("❌ Search failed: {e}");
            return Ok(());
        },
        None => {},
    }

    let Some(index) = select else {
        return Ok(());
    };
    if !screen.select(index) {
        bail!("No result at index {index}");
    }
    screen.dispose();

    let selected = handoff.lock().take();
    let provider = match position {
        Some(position) => StaticLocationProvider::new(position),
        None => StaticLocationProvider::new(Coordinate::new(0.0, 0.0)).disabled(),
    };
    show_on_map(adapter, selected, provider, position.is_some()).await
}

async fn show_on_map(
    adapter: TmapAdapter,
    selected: Option<SearchResult>,
    provider: StaticLocationProvider,
    locate: bool,
) -> anyhow::Result<()> {
    let mut map = MapScreen::new(selected, Arc::new(adapter), Arc::new(provider))?;
    println!("🗺️  Map ready");
    map.on_map_ready(TerminalMapSurface::default());

    if locate {
        match map.request_current_location().await {
            LocationRequestOutcome::ProviderDisabled => println!("Location provider is disabled"),
            LocationRequestOutcome::PermissionDenied => println!("Location permission denied"),
            LocationRequestOutcome::Watching(_) | LocationRequestOutcome::AlreadyWatching(_) => {
                println!("📡 Waiting for location...");
            },
        }

        while let Some(event) = map.process_next().await {
            match event {
                MapScreenEvent::CurrentLocationFocused(coordinate) => {
                    println!("📡 Location fix at {coordinate}");
                },
                MapScreenEvent::MarkerPlaced(result) => {
                    println!("✅ {}: {}", result.building_name(), result.full_address());
                },
                MapScreenEvent::GeocodeFailed(e) => println!("❌ Address lookup failed: {e}"),
                MapScreenEvent::LocationUnavailable => println!("Location unavailable"),
            }
        }
    }

    map.dispose();
    Ok(())
}
