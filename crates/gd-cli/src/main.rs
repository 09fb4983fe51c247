//! Line-oriented terminal front end for Guess Duel.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(
    name = "guess-duel",
    about = "Guess Duel - a two-player number guessing duel",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log filter for diagnostics on stderr (e.g. debug, gd_core=trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a run through one category
    Play {
        /// Category to play: easy, medium, or hard
        #[arg(short, long, default_value = "easy")]
        category: String,

        /// RNG seed for reproducible secrets
        #[arg(short, long)]
        seed: Option<u64>,

        /// A second player types the secret for every level
        #[arg(long, conflicts_with = "secrets")]
        hot_seat: bool,

        /// Fixed secrets for successive levels, comma separated
        #[arg(long, value_delimiter = ',')]
        secrets: Vec<u32>,

        /// Custom difficulty table (JSON)
        #[arg(short, long)]
        table: Option<PathBuf>,

        /// Ring the terminal bell on misses and defeat
        #[arg(long)]
        bell: bool,
    },

    /// Show ranges, hit points, and hints per level
    Table {
        /// Only show one category
        category: Option<String>,

        /// Custom difficulty table (JSON)
        #[arg(short, long)]
        table: Option<PathBuf>,

        /// Print the table as JSON, ready to edit and pass back with --table
        #[arg(long)]
        json: bool,
    },

    /// Explain how to play
    Rules,
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let result = match cli.command {
        Commands::Play {
            category,
            seed,
            hot_seat,
            secrets,
            table,
            bell,
        } => commands::play::run(&commands::play::PlayOptions {
            category,
            seed,
            hot_seat,
            secrets,
            table,
            bell,
        }),
        Commands::Table {
            category,
            table,
            json,
        } => commands::table::run(category.as_deref(), table.as_deref(), json),
        Commands::Rules => commands::rules::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
