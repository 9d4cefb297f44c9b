//! Session orchestration
//!
//! Wires the engine, the input listener task, and the renderer together,
//! owns the terminal for the lifetime of the session, and makes sure the
//! run in progress is saved exactly once on the way out.

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tokio::time::sleep;

use crate::game::{DirectionArbiter, GameConfig, GameEngine, Heading, TickOutcome};
use crate::input::{ControlEvent, InputListener};
use crate::metrics::SessionStats;
use crate::persist::SnapshotStore;
use crate::render::Renderer;

pub struct App {
    engine: GameEngine,
    renderer: Renderer,
    stats: SessionStats,
    arbiter: Arc<DirectionArbiter>,
    control_tx: mpsc::Sender<ControlEvent>,
    control_rx: mpsc::Receiver<ControlEvent>,
    shutdown_tx: watch::Sender<bool>,
    won: bool,
}

impl App {
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;

        let arbiter = Arc::new(DirectionArbiter::new(Heading::Right));
        let store = SnapshotStore::new(config.save_path.clone());
        let engine = GameEngine::restore(config, Arc::clone(&arbiter), store)?;

        let (control_tx, control_rx) = mpsc::channel(16);
        let (shutdown_tx, _) = watch::channel(false);

        Ok(Self {
            engine,
            renderer: Renderer::new(),
            stats: SessionStats::new(),
            arbiter,
            control_tx,
            control_rx,
            shutdown_tx,
            won: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // The listener task is the only writer of the arbiter
        let listener = InputListener::new(
            Arc::clone(&self.arbiter),
            self.control_tx.clone(),
            self.shutdown_tx.subscribe(),
        );
        let input_task = tokio::spawn(listener.run());

        let loop_result = self.run_game_loop(&mut terminal).await;

        // Stop the listener first, then save the run in progress no matter
        // what ended the loop
        let _ = self.shutdown_tx.send(true);
        let exit_result = self.engine.begin_exit();
        let _ = input_task.await;

        let cleanup_result = self.cleanup_terminal(&mut terminal);

        self.print_farewell();

        loop_result.and(exit_result).and(cleanup_result)
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        loop {
            match self.engine.tick()? {
                TickOutcome::Advanced { .. } => {}
                TickOutcome::Collision { length } => {
                    self.stats.on_reset(length);
                }
                TickOutcome::Won => {
                    self.won = true;
                    break;
                }
                TickOutcome::Halted => break,
            }

            self.stats.on_tick(self.engine.state().snake.len());

            terminal
                .draw(|frame| {
                    self.renderer.render(frame, self.engine.state(), &self.stats);
                })
                .context("Failed to draw frame")?;

            // The wait between ticks follows the applied heading, vertical
            // motion gets the longer period
            tokio::select! {
                _ = sleep(self.engine.tick_period()) => {}

                event = self.control_rx.recv() => {
                    match event {
                        Some(ControlEvent::Quit) | None => break,
                    }
                }

                // Handle Ctrl+C delivered as a signal
                _ = tokio::signal::ctrl_c() => break,
            }
        }

        Ok(())
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }

    /// Printed on stdout once the alternate screen is gone.
    fn print_farewell(&self) {
        let state = self.engine.state();
        if self.won {
            println!(
                "You filled the whole grid at length {}. See you next time!",
                state.snake.len()
            );
        } else {
            println!(
                "Run saved: heading {} at length {}. See you next time!",
                state.heading,
                state.snake.len()
            );
        }
    }
}
