use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use super::heading::Heading;

/// Configuration for a game session.
///
/// Horizontal motion ticks faster than vertical motion on purpose: terminal
/// cells are taller than they are wide, so equal periods would make the
/// snake feel twice as fast going up or down.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the game grid in cells
    pub grid_width: usize,
    /// Height of the game grid in cells
    pub grid_height: usize,
    /// Tick period while heading left or right, in milliseconds
    pub horizontal_tick_ms: u64,
    /// Tick period while heading up or down, in milliseconds
    pub vertical_tick_ms: u64,
    /// Where the snapshot of an in-progress run is kept
    pub save_path: PathBuf,
    /// Where the session log is written
    pub log_file: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 20,
            grid_height: 20,
            horizontal_tick_ms: 50,
            vertical_tick_ms: 100,
            save_path: PathBuf::from("snake_save.txt"),
            log_file: PathBuf::from("wrapsnake.log"),
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Loads a configuration from a JSON file. Missing fields take their
    /// defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config from {}", path.display()))?;
        let config =
            serde_json::from_str(&text).with_context(|| format!("invalid config in {}", path.display()))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.grid_width < 2 || self.grid_height < 2 {
            bail!(
                "grid must be at least 2x2, got {}x{}",
                self.grid_width,
                self.grid_height
            );
        }
        Ok(())
    }

    /// The tick period the engine sleeps for after applying `heading`.
    pub fn tick_period(&self, heading: Heading) -> Duration {
        if heading.is_horizontal() {
            Duration::from_millis(self.horizontal_tick_ms)
        } else {
            Duration::from_millis(self.vertical_tick_ms)
        }
    }
}
