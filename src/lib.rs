//! Wrapsnake - a terminal Snake game on a grid that wraps around
//!
//! This library provides:
//! - Core game logic (game module)
//! - Saving and restoring runs across sessions (persist module)
//! - Keyboard input handling (input module)
//! - TUI rendering (render module)
//! - Session statistics (metrics module)
//! - The session orchestrator tying it all together (app module)

pub mod app;
pub mod game;
pub mod input;
pub mod metrics;
pub mod persist;
pub mod render;
