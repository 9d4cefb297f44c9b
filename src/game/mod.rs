//! Core game logic module
//!
//! Everything here is free of terminal and rendering dependencies. The
//! engine sees key input only through the [`DirectionArbiter`] it is given,
//! and touches the filesystem only through its snapshot store.

pub mod arbiter;
pub mod config;
pub mod engine;
pub mod food;
pub mod grid;
pub mod heading;
pub mod state;

// Re-export commonly used types
pub use arbiter::DirectionArbiter;
pub use config::GameConfig;
pub use engine::{GameEngine, Lifecycle, TickOutcome};
pub use grid::{Cell, Grid};
pub use heading::Heading;
pub use state::{GameState, Snake};
