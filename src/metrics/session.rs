use std::time::{Duration, Instant};

/// How long the crash banner stays up after a run ends
const CRASH_BANNER: Duration = Duration::from_millis(1500);

/// Counters shown in the status bar, accumulated over all the runs of one
/// session.
pub struct SessionStats {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub best_length: usize,
    pub runs_completed: u32,
    last_reset: Option<Instant>,
}

impl SessionStats {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            best_length: 0,
            runs_completed: 0,
            last_reset: None,
        }
    }

    /// Called every tick with the live run's length.
    pub fn on_tick(&mut self, length: usize) {
        self.elapsed_time = self.start_time.elapsed();
        if length > self.best_length {
            self.best_length = length;
        }
    }

    /// Called when a run crashes and a fresh one starts.
    pub fn on_reset(&mut self, final_length: usize) {
        self.runs_completed += 1;
        if final_length > self.best_length {
            self.best_length = final_length;
        }
        self.last_reset = Some(Instant::now());
    }

    /// True while the crash banner should still be visible.
    pub fn recently_reset(&self) -> bool {
        match self.last_reset {
            Some(at) => at.elapsed() < CRASH_BANNER,
            None => false,
        }
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for SessionStats {
    fn default() -> Self {
        Self::new()
    }
}
