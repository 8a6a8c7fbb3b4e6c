use std::fs::{self, File, OpenOptions};
use std::path::Path;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use rentride_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "rentride")]
#[command(author, version, about = "Browse, price and book rental vehicles from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI
    Run,
    /// List vehicles in the catalog
    Vehicles {
        /// Free-text filter on brand, model and city
        #[arg(short, long)]
        search: Option<String>,
        /// Only this category (hatchback, sedan, suv, scooter, motorcycle)
        #[arg(short, long)]
        category: Option<String>,
        /// Maximum daily rate
        #[arg(long)]
        max_rate: Option<u64>,
        /// Minimum number of seats
        #[arg(long)]
        min_seats: Option<u8>,
        /// Sort order (featured, price, price-desc, rating, name)
        #[arg(long, default_value = "featured")]
        sort: String,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Price a booking
    Quote {
        /// Vehicle id (see `rentride vehicles`)
        vehicle: String,
        /// Number of rental days
        #[arg(short, long, conflicts_with_all = ["pickup", "return_at"])]
        days: Option<u32>,
        /// Pickup time, e.g. "2024-03-15 10:00"
        #[arg(long, requires = "return_at")]
        pickup: Option<String>,
        /// Return time, e.g. "2024-03-17 09:00"
        #[arg(long = "return", requires = "pickup")]
        return_at: Option<String>,
        /// Add-on id, repeatable
        #[arg(short, long = "addon")]
        addons: Vec<String>,
        /// Coupon code
        #[arg(long)]
        coupon: Option<String>,
        /// Print the breakdown as JSON
        #[arg(long)]
        json: bool,
    },
    /// Search the help center
    Faq {
        /// Words to look for in questions and answers
        query: Option<String>,
        /// Only this topic
        #[arg(short, long)]
        topic: Option<String>,
    },
    /// Show inbox messages
    Inbox {
        /// Only unread messages
        #[arg(short, long)]
        unread: bool,
        /// Free-text filter on sender, subject and body
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Show the reward tier for a points balance
    Rewards {
        /// Points balance
        points: u32,
    },
    /// Write the default configuration file
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn env_filter(config: &AppConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.general.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Create the log directory and open the log file for appending
fn open_log_file(log_path: &Path) -> std::result::Result<File, String> {
    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            format!("Logging disabled: cannot create {}: {}", parent.display(), e)
        })?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .map_err(|e| format!("Logging disabled: cannot open {}: {}", log_path.display(), e))
}

/// Log to a file under the data directory so output does not corrupt the TUI
///
/// Returns a warning when the log file could not be set up; the caller shows
/// it once the terminal is usable.
fn init_file_logging(config: &AppConfig) -> Option<String> {
    let log_path = config.log_path();
    match open_log_file(&log_path) {
        Ok(file) => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .with(env_filter(config))
                .init();
            tracing::info!(path = %log_path.display(), "Logging initialized");
            None
        }
        // No log file: stay silent rather than draw over the terminal UI
        Err(warning) => {
            tracing_subscriber::registry().with(env_filter(config)).init();
            Some(warning)
        }
    }
}

fn init_stderr_logging(config: &AppConfig) {
    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Arc::new(AppConfig::load()?);

    let log_warning = match cli.command {
        Some(Commands::Run) | None => init_file_logging(&config),
        Some(_) => {
            init_stderr_logging(&config);
            None
        }
    };

    match cli.command {
        Some(Commands::Run) | None => commands::run::run(config, log_warning).await,
        Some(Commands::Vehicles {
            search,
            category,
            max_rate,
            min_seats,
            sort,
            json,
        }) => commands::vehicles::run(
            &config,
            commands::vehicles::Filters {
                search,
                category,
                max_rate,
                min_seats,
                sort,
            },
            json,
        ),
        Some(Commands::Quote {
            vehicle,
            days,
            pickup,
            return_at,
            addons,
            coupon,
            json,
        }) => {
            let duration = match (days, pickup, return_at) {
                (_, Some(pickup), Some(return_at)) => {
                    commands::quote::Duration::Window { pickup, return_at }
                }
                (days, _, _) => commands::quote::Duration::Days(days.unwrap_or(1)),
            };
            commands::quote::run(&config, &vehicle, duration, addons, coupon, json)
        }
        Some(Commands::Faq { query, topic }) => commands::faq::run(query, topic),
        Some(Commands::Inbox { unread, search }) => commands::inbox::run(unread, search),
        Some(Commands::Rewards { points }) => commands::rewards::run(points),
        Some(Commands::InitConfig { force }) => commands::init_config::run(&config, force),
    }
}
