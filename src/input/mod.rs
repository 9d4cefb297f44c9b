//! Keyboard input handling

pub mod handler;
pub mod listener;

pub use handler::{InputHandler, KeyAction};
pub use listener::{ControlEvent, InputListener};
