mod commands;
mod config;
mod store;

use clap::{Parser, Subcommand};
use config::AppConfig;
use mzuka_engine::BetError;
use std::path::PathBuf;
use store::Store;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "tatumzuka")]
#[command(about = "TatuMzuka 3-digit lottery betting client")]
#[command(version)]
struct Cli {
    /// Data directory for accounts and tickets
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new account (phone number + PIN)
    Register,
    /// Pick numbers, set a stake and place a bet
    Play {
        /// Phone number of the registered account
        #[arg(long)]
        phone: String,
        /// Digits to play, e.g. 4,7,2
        #[arg(long)]
        numbers: Option<String>,
        /// Quick-pick three random numbers
        #[arg(long)]
        random: bool,
        /// Stake in BIF (defaults to the minimum stake)
        #[arg(long)]
        stake: Option<u64>,
    },
    /// Show the potential win for a selection without betting
    Quote {
        /// Digits to quote, e.g. 4,7,2
        #[arg(long)]
        numbers: String,
        /// Stake in BIF (defaults to the minimum stake)
        #[arg(long)]
        stake: Option<u64>,
    },
    /// List the tickets placed from an account
    Tickets {
        /// Phone number of the registered account
        #[arg(long)]
        phone: String,
    },
    /// Show the next draw countdown, or simulate a draw
    Draw {
        /// Run a simulated draw against all stored tickets
        #[arg(long)]
        run: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "tatumzuka={},mzuka_engine={}",
            log_level, log_level
        )))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Get data directory
    let data_dir = cli.data_dir.unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tatumzuka")
    });
    std::fs::create_dir_all(&data_dir)?;

    let config = AppConfig::load(&data_dir)?;
    let store = Store::open(&data_dir.join("tatumzuka.db"))?;

    let result = match cli.command {
        Commands::Register => commands::register(&store, &config.engine),
        Commands::Play {
            phone,
            numbers,
            random,
            stake,
        } => commands::play(&store, &config, &phone, numbers.as_deref(), random, stake),
        Commands::Quote { numbers, stake } => commands::quote(&config, &numbers, stake),
        Commands::Tickets { phone } => commands::list_tickets(&store, &phone),
        Commands::Draw { run } => {
            if run {
                commands::run_draw(&store)
            } else {
                commands::next_draw(&config)
            }
        }
    };

    if let Err(e) = result {
        match e.downcast_ref::<BetError>() {
            Some(BetError::InsufficientNumbers { min, .. }) => {
                eprintln!("Error: pick at least {} numbers to play", min);
            }
            Some(BetError::StakeOutOfRange { min, max, .. }) => match max {
                Some(max) => eprintln!("Error: stake must be between {} and {} BIF", min, max),
                None => eprintln!("Error: minimum stake is {} BIF", min),
            },
            Some(BetError::InvalidPinFormat { expected }) => {
                eprintln!("Error: PIN must be exactly {} digits", expected);
            }
            Some(BetError::PinMismatch) => {
                eprintln!("Error: incorrect PIN, your bet was not placed");
            }
            _ => {
                eprintln!("Error: {}", e);
            }
        }
        std::process::exit(1);
    }

    Ok(())
}
