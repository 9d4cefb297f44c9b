use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use log::{debug, info, warn};
use rand::rngs::ThreadRng;

use crate::persist::{Snapshot, SnapshotStore};

use super::arbiter::DirectionArbiter;
use super::config::GameConfig;
use super::food;
use super::grid::{Cell, Grid};
use super::heading::Heading;
use super::state::{GameState, Snake};

/// Where the engine is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// A run is in progress
    Running,
    /// The snake just crashed. This state lasts only within the tick that
    /// detects the crash, the engine restarts a fresh run before returning.
    GameOver,
    /// The session is over, further ticks do nothing
    Exiting,
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The snake moved one cell
    Advanced { ate: bool },
    /// The snake ran into itself. Carries the length the run ended with.
    /// The engine has already restarted a fresh run when this is returned.
    Collision { length: usize },
    /// The snake filled the whole grid, the session is over
    Won,
    /// The engine is exiting, nothing happened
    Halted,
}

/// The game engine that owns all game logic.
///
/// The engine runs on the simulation loop and never sees key events. The
/// listener task publishes headings through the shared [`DirectionArbiter`]
/// and the engine picks up the latest one at each tick boundary.
pub struct GameEngine {
    config: GameConfig,
    state: GameState,
    arbiter: Arc<DirectionArbiter>,
    store: SnapshotStore,
    rng: ThreadRng,
    lifecycle: Lifecycle,
}

impl GameEngine {
    /// Builds an engine from the last saved run, or a fresh one when no
    /// usable save exists.
    pub fn restore(
        config: GameConfig,
        arbiter: Arc<DirectionArbiter>,
        store: SnapshotStore,
    ) -> Result<Self> {
        let grid = Grid::new(config.grid_height, config.grid_width);
        let mut rng = rand::thread_rng();
        let snapshot = store.load()?;
        let state = Self::state_from_snapshot(snapshot, grid, &mut rng);
        arbiter.reset(state.heading);
        info!(
            "session started on a {}x{} grid, snake length {}",
            grid.width(),
            grid.height(),
            state.snake.len()
        );
        Ok(Self {
            config,
            state,
            arbiter,
            store,
            rng,
            lifecycle: Lifecycle::Running,
        })
    }

    /// Advances the game by one tick.
    pub fn tick(&mut self) -> Result<TickOutcome> {
        if self.lifecycle == Lifecycle::Exiting {
            return Ok(TickOutcome::Halted);
        }

        // Latest key wins, but a reversal would land the head on the neck.
        // An opposite heading is ignored and the snake keeps going.
        let proposed = self.arbiter.current();
        if !proposed.is_opposite(self.state.heading) {
            self.state.heading = proposed;
        }

        let new_head = self
            .state
            .grid
            .step(self.state.snake.head(), self.state.heading);

        if self.state.snake.contains(new_head) {
            return self.crash(new_head);
        }

        let ate = new_head == self.state.food;
        self.state.snake.advance(new_head, ate);

        if ate {
            match food::spawn(&mut self.rng, self.state.grid, &self.state.snake) {
                Some(cell) => {
                    debug!("ate at {}, new food at {}", new_head, cell);
                    self.state.food = cell;
                }
                None => {
                    info!("grid full at length {}, you win", self.state.snake.len());
                    self.lifecycle = Lifecycle::Exiting;
                    self.store.clear()?;
                    return Ok(TickOutcome::Won);
                }
            }
        }

        Ok(TickOutcome::Advanced { ate })
    }

    /// Stops the session and saves the run in progress. Safe to call more
    /// than once, only the first call persists.
    pub fn begin_exit(&mut self) -> Result<()> {
        if self.lifecycle == Lifecycle::Exiting {
            return Ok(());
        }
        self.lifecycle = Lifecycle::Exiting;
        self.store.save(&self.state)?;
        info!(
            "session ended heading {} at length {}",
            self.state.heading,
            self.state.snake.len()
        );
        Ok(())
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// How long the caller should wait before the next tick.
    pub fn tick_period(&self) -> Duration {
        self.config.tick_period(self.state.heading)
    }

    fn crash(&mut self, hit: Cell) -> Result<TickOutcome> {
        let length = self.state.snake.len();
        info!("snake hit itself at {} with length {}", hit, length);
        self.lifecycle = Lifecycle::GameOver;
        // The crashed run must not come back on a restart, so its snapshot
        // goes before the fresh run starts.
        self.store.clear()?;
        self.state = Self::fresh_state(self.state.grid, &mut self.rng);
        self.arbiter.reset(self.state.heading);
        self.lifecycle = Lifecycle::Running;
        debug!("fresh run started at {}", self.state.snake.head());
        Ok(TickOutcome::Collision { length })
    }

    fn fresh_state(grid: Grid, rng: &mut ThreadRng) -> GameState {
        let head = grid.wrap(Cell::new(0, 0));
        let snake = Snake::single(head);
        let food =
            food::spawn(rng, grid, &snake).unwrap_or_else(|| grid.step(head, Heading::Right));
        GameState {
            grid,
            snake,
            food,
            heading: Heading::Right,
        }
    }

    fn state_from_snapshot(snapshot: Snapshot, grid: Grid, rng: &mut ThreadRng) -> GameState {
        let snake = Snake::from_cells(snapshot.body.iter().map(|&cell| grid.wrap(cell)).collect());
        if snake.len() >= grid.cell_count() {
            warn!("saved snake does not fit the grid, starting fresh");
            return Self::fresh_state(grid, rng);
        }
        // The saved food cell may have wrapped onto the body, in which case
        // it is respawned somewhere free.
        let preferred = grid.wrap(snapshot.food);
        let food = if snake.contains(preferred) {
            match food::spawn(rng, grid, &snake) {
                Some(cell) => cell,
                None => return Self::fresh_state(grid, rng),
            }
        } else {
            preferred
        };
        GameState {
            grid,
            snake,
            food,
            heading: snapshot.heading,
        }
    }
}
