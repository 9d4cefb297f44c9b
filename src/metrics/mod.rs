//! Session statistics

pub mod session;

pub use session::SessionStats;
