//! Standalone TUI binary for Guess Duel.

use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use gd_core::{Category, DifficultyTable, GameConfig};

#[derive(Parser)]
#[command(
    name = "guess-duel-tui",
    about = "Terminal UI for the Guess Duel number game",
    version
)]
struct Args {
    /// Skip the menus and start a run in this category (easy, medium, hard)
    #[arg(short, long)]
    category: Option<String>,

    /// RNG seed for reproducible secrets
    #[arg(short, long)]
    seed: Option<u64>,

    /// A second player types the secret for every level
    #[arg(long)]
    hot_seat: bool,

    /// Custom difficulty table (JSON)
    #[arg(short, long)]
    table: Option<PathBuf>,

    /// Write diagnostics to this file (the terminal is taken by the UI)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log filter used with --log-file
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn init_logging(path: &Path, level: &str) -> Result<(), String> {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| format!("failed to open log file {}: {e}", path.display()))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(file)
                .with_ansi(false),
        )
        .init();
    Ok(())
}

fn setup(args: &Args) -> Result<gd_tui::app::App, String> {
    if let Some(path) = &args.log_file {
        init_logging(path, &args.log_level)?;
    }

    let table = match &args.table {
        Some(path) => DifficultyTable::from_path(path).map_err(|e| e.to_string())?,
        None => DifficultyTable::default(),
    };
    let mut config = GameConfig::default().with_table(table);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let mut app = gd_tui::app::App::new(config, args.hot_seat);
    if let Some(name) = &args.category {
        let category = Category::parse(name).map_err(|e| e.to_string())?;
        app.start_run(category);
    }
    Ok(app)
}

fn main() {
    let args = Args::parse();

    let app = match setup(&args) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };

    if let Err(e) = gd_tui::terminal::run(app) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_defaults_to_warn() {
        let args = Args::try_parse_from(["guess-duel-tui"]).unwrap();
        assert_eq!(args.log_level, "warn");
        assert!(args.log_file.is_none());
    }
}
