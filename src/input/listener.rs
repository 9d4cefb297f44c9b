use std::sync::Arc;

use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use log::{debug, warn};
use tokio::sync::{mpsc, watch};

use crate::game::DirectionArbiter;

use super::handler::{InputHandler, KeyAction};

/// Out-of-band requests the listener sends to the main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    Quit,
}

/// The task that owns the terminal event stream.
///
/// Turn keys go straight into the shared arbiter, so the newest press is
/// always the one the next tick sees even if several arrive within a single
/// tick. Everything else travels over the control channel.
pub struct InputListener {
    handler: InputHandler,
    arbiter: Arc<DirectionArbiter>,
    control: mpsc::Sender<ControlEvent>,
    shutdown: watch::Receiver<bool>,
}

impl InputListener {
    pub fn new(
        arbiter: Arc<DirectionArbiter>,
        control: mpsc::Sender<ControlEvent>,
        shutdown: watch::Receiver<bool>,
    ) -> Self {
        Self {
            handler: InputHandler::new(),
            arbiter,
            control,
            shutdown,
        }
    }

    /// Consumes terminal events until quit, shutdown, or the stream ends.
    pub async fn run(mut self) {
        let mut event_stream = EventStream::new();

        loop {
            tokio::select! {
                _ = self.shutdown.changed() => break,

                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                            match self.handler.handle_key_event(key) {
                                KeyAction::Turn(heading) => {
                                    debug!("turn requested: {}", heading);
                                    self.arbiter.propose(heading);
                                }
                                KeyAction::Quit => {
                                    let _ = self.control.send(ControlEvent::Quit).await;
                                    break;
                                }
                                KeyAction::None => {}
                            }
                        }
                        // Resize, mouse, and key-release events carry
                        // nothing the game cares about
                        Some(Ok(_)) => {}
                        Some(Err(err)) => {
                            warn!("terminal event error: {}", err);
                        }
                        None => break,
                    }
                }
            }
        }
    }
}
