use std::sync::atomic::{AtomicU8, Ordering};

use super::heading::Heading;

/// The single piece of state shared between the input task and the engine
/// loop: the most recently accepted heading.
///
/// The input task is the only writer (through [`propose`]); the engine reads
/// once per tick through [`current`] and may see a value up to one tick
/// stale. Relaxed ordering is enough for a single-writer single-reader cell
/// carrying no other data.
///
/// [`propose`]: DirectionArbiter::propose
/// [`current`]: DirectionArbiter::current
#[derive(Debug)]
pub struct DirectionArbiter {
    heading: AtomicU8,
}

impl DirectionArbiter {
    pub fn new(initial: Heading) -> Self {
        Self {
            heading: AtomicU8::new(initial as u8),
        }
    }

    /// Replaces the current heading, unless the proposal is the exact
    /// opposite of it. Reversing into the neck would be an instant
    /// self-collision, so such proposals are silently discarded.
    pub fn propose(&self, new_heading: Heading) {
        if !new_heading.is_opposite(self.current()) {
            self.heading.store(new_heading as u8, Ordering::Relaxed);
        }
    }

    /// The latest accepted heading. Safe to call while a `propose` is in
    /// flight on another task.
    pub fn current(&self) -> Heading {
        Heading::from_repr(self.heading.load(Ordering::Relaxed))
    }

    /// Force-sets the heading, bypassing the reversal check. Used when a run
    /// is reset or restored, where the new heading is not a player proposal.
    pub fn reset(&self, heading: Heading) {
        self.heading.store(heading as u8, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_propose_accepts_turns() {
        let arbiter = DirectionArbiter::new(Heading::Right);
        arbiter.propose(Heading::Up);
        assert_eq!(arbiter.current(), Heading::Up);
        arbiter.propose(Heading::Left);
        assert_eq!(arbiter.current(), Heading::Left);
    }

    #[test]
    fn test_propose_rejects_reversals() {
        for (heading, opposite) in [
            (Heading::Up, Heading::Down),
            (Heading::Down, Heading::Up),
            (Heading::Left, Heading::Right),
            (Heading::Right, Heading::Left),
        ] {
            let arbiter = DirectionArbiter::new(heading);
            arbiter.propose(opposite);
            assert_eq!(arbiter.current(), heading);
        }
    }

    #[test]
    fn test_reproposing_current_heading_is_a_no_op() {
        let arbiter = DirectionArbiter::new(Heading::Right);
        arbiter.propose(Heading::Right);
        assert_eq!(arbiter.current(), Heading::Right);
    }

    #[test]
    fn test_reset_bypasses_reversal_check() {
        let arbiter = DirectionArbiter::new(Heading::Left);
        arbiter.reset(Heading::Right);
        assert_eq!(arbiter.current(), Heading::Right);
    }

    #[test]
    fn test_concurrent_reader_sees_accepted_headings() {
        let arbiter = Arc::new(DirectionArbiter::new(Heading::Right));

        let writer = {
            let arbiter = Arc::clone(&arbiter);
            std::thread::spawn(move || {
                for i in 0..1000 {
                    arbiter.propose(match i % 3 {
                        0 => Heading::Up,
                        1 => Heading::Left,
                        _ => Heading::Down,
                    });
                }
            })
        };

        // Every read must decode to a real heading while writes race.
        for _ in 0..1000 {
            let heading = arbiter.current();
            assert!(matches!(
                heading,
                Heading::Up | Heading::Down | Heading::Left | Heading::Right
            ));
        }

        writer.join().unwrap();
    }
}
