use std::path::PathBuf;

use app::App;
use clap::{ArgAction, Parser};
use log::LevelFilter;
use masterbrain::Config;

pub mod app;
pub mod board;
pub mod log_view;
pub mod palette;
pub mod popup;
pub mod presenter;
pub mod seed_input;

/// Guess the hidden four color code.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// RON file with game settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for the secret generator
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of rows on the board
    #[arg(short, long)]
    max_attempts: Option<u8>,

    /// Show positional pegs instead of sorting them
    #[arg(long)]
    positional: bool,

    /// More log output in the side panel (-vv also shows the secret)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn config(&self) -> Result<Config, masterbrain::ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(max_attempts) = self.max_attempts {
            config.max_attempts = max_attempts;
        }
        if self.positional {
            config.sorted_feedback = false;
        }
        config.validate()?;
        Ok(config)
    }

    fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn main() {
    let args = Args::parse();
    let logs = match log_view::install(args.log_level()) {
        Ok(logs) => logs,
        Err(e) => {
            eprintln!("Logger init failed: {e}");
            return;
        }
    };
    let config = match args.config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {e}");
            return;
        }
    };

    let app = match App::new(&config, logs) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Invalid configuration: {e}");
            return;
        }
    };

    let terminal = ratatui::init();
    let result = app.run(terminal);
    ratatui::restore();

    if let Err(e) = result {
        eprintln!("Terminal error: {e}");
    }
}
