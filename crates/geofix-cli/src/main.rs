use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use geofix_cli::{OutputFormat, commands};

#[derive(Parser)]
#[command(name = "geofix")]
#[command(author, version)]
#[command(
    about = "Capture the device's GPS position via Chrome and resolve it to an address",
    long_about = "Geofix drives a headless Chrome instance to read the device's position \
                  through the browser geolocation API, then resolves the captured coordinates \
                  to a human-readable address with the Nominatim reverse-geocoding service."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Pretty)]
    format: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Capture the current GPS position and resolve it to an address
    Capture {
        /// Path to the Chrome binary (auto-detected if omitted)
        #[arg(long, value_name = "PATH")]
        chrome_path: Option<PathBuf>,

        /// How long to wait for a position fix, in seconds
        #[arg(long, default_value_t = 10)]
        wait_secs: u64,

        /// Reverse-geocoding endpoint
        #[arg(long, value_name = "URL", default_value = geofix_geocode::DEFAULT_ENDPOINT)]
        endpoint: String,
    },

    /// Resolve coordinates to an address without launching a browser
    Geocode {
        /// Latitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lat: String,

        /// Longitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lon: String,

        /// Reverse-geocoding endpoint
        #[arg(long, value_name = "URL", default_value = geofix_geocode::DEFAULT_ENDPOINT)]
        endpoint: String,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(long, value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match cli.command {
        Commands::Capture {
            chrome_path,
            wait_secs,
            endpoint,
        } => commands::capture::execute(chrome_path, wait_secs, &endpoint, cli.format),
        Commands::Geocode { lat, lon, endpoint } => {
            commands::geocode::execute(&lat, &lon, &endpoint, cli.format)
        }
        Commands::Completion { shell } => commands::completion::execute(shell, &mut Cli::command()),
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new(
            "geofix=debug,geofix_cli=debug,geofix_core=debug,geofix_browser=debug,geofix_geocode=debug",
        )
    } else {
        EnvFilter::new("geofix=info,geofix_cli=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}
