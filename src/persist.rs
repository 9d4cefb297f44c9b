//! Saving and restoring runs across process restarts.
//!
//! A snapshot is a small plain-text file:
//!
//! ```text
//! Direction: Right
//! Snake:
//! 0 1
//! 0 0
//! Apple: 5 5
//! ```
//!
//! The body is listed head first, one `row col` pair per line. A missing or
//! unreadable snapshot is not an error: the game simply starts fresh, so a
//! corrupt file can never lock a player out of playing.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{info, warn};

use crate::game::{Cell, GameState, Heading};

/// A parsed save file, before it has been fitted onto a grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub heading: Heading,
    /// Body cells, head first. Cells may lie outside the current grid and
    /// are wrapped when the snapshot is applied.
    pub body: Vec<Cell>,
    pub food: Cell,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            heading: Heading::Right,
            body: vec![Cell::new(0, 0)],
            food: Cell::new(5, 5),
        }
    }
}

/// Reads and writes snapshots at a fixed path.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the state of an in-progress run to the save file.
    pub fn save(&self, state: &GameState) -> Result<()> {
        let mut text = format!("Direction: {}\n", state.heading.token());
        text.push_str("Snake:\n");
        for cell in state.snake.cells() {
            text.push_str(&format!("{} {}\n", cell.row, cell.col));
        }
        text.push_str(&format!("Apple: {} {}\n", state.food.row, state.food.col));
        fs::write(&self.path, text)
            .with_context(|| format!("failed to write save file {}", self.path.display()))?;
        info!(
            "saved run to {} (length {})",
            self.path.display(),
            state.snake.len()
        );
        Ok(())
    }

    /// Loads the last saved run, falling back to a default snapshot when the
    /// file is missing or does not parse. Only a real I/O failure is an
    /// error.
    pub fn load(&self) -> Result<Snapshot> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!("no save file at {}, starting fresh", self.path.display());
                return Ok(Snapshot::default());
            }
            Err(err) => {
                return Err(err).with_context(|| {
                    format!("failed to read save file {}", self.path.display())
                });
            }
        };
        match parse_snapshot(&text) {
            Some(snapshot) => {
                info!(
                    "restored run from {} (length {})",
                    self.path.display(),
                    snapshot.body.len()
                );
                Ok(snapshot)
            }
            None => {
                warn!(
                    "malformed save file {}, starting fresh",
                    self.path.display()
                );
                Ok(Snapshot::default())
            }
        }
    }

    /// Removes the save file. Used when a run ends, so a stale snapshot
    /// never resurrects a finished run. Missing file is fine.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err).with_context(|| {
                format!("failed to remove save file {}", self.path.display())
            }),
        }
    }
}

fn parse_snapshot(text: &str) -> Option<Snapshot> {
    let mut lines = text.lines();
    let heading = Heading::from_token(lines.next()?.strip_prefix("Direction: ")?)?;
    if lines.next()? != "Snake:" {
        return None;
    }
    let mut body = Vec::new();
    let food = loop {
        let line = lines.next()?;
        if let Some(rest) = line.strip_prefix("Apple: ") {
            break parse_cell(rest)?;
        }
        body.push(parse_cell(line)?);
    };
    if body.is_empty() {
        return None;
    }
    Some(Snapshot { heading, body, food })
}

fn parse_cell(text: &str) -> Option<Cell> {
    let mut parts = text.split_whitespace();
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Cell::new(row, col))
}
