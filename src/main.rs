use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use simplelog::{Config as LogConfig, WriteLogger};
use wrapsnake::app::App;
use wrapsnake::game::GameConfig;

#[derive(Parser)]
#[command(name = "wrapsnake")]
#[command(version, about = "Terminal snake on a grid that wraps around")]
struct Cli {
    /// Path to a JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width, overrides the config file
    #[arg(long)]
    width: Option<usize>,

    /// Grid height, overrides the config file
    #[arg(long)]
    height: Option<usize>,

    /// Where the run is saved on exit, overrides the config file
    #[arg(long)]
    save_file: Option<PathBuf>,

    /// Where the session log is written, overrides the config file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log verbosity (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };
    if let Some(width) = cli.width {
        config.grid_width = width;
    }
    if let Some(height) = cli.height {
        config.grid_height = height;
    }
    if let Some(save_file) = cli.save_file {
        config.save_path = save_file;
    }
    if let Some(log_file) = cli.log_file {
        config.log_file = log_file;
    }

    // The TUI owns stderr for the whole session, so logs go to a file
    let level: LevelFilter = cli
        .log_level
        .parse()
        .with_context(|| format!("unknown log level '{}'", cli.log_level))?;
    if level != LevelFilter::Off {
        let log_file = File::create(&config.log_file).with_context(|| {
            format!("failed to create log file {}", config.log_file.display())
        })?;
        WriteLogger::init(level, LogConfig::default(), log_file)
            .context("failed to initialize logger")?;
    }

    let mut app = App::new(config)?;
    app.run().await
}
