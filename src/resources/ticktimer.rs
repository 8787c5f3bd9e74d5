//! Fixed-interval tick timer resource.
//!
//! The automaton advances exactly once per due tick. The host loop calls
//! [`crate::scene::drive_scene`] as often as it likes; this timer gates the
//! calls, and the driver re-arms it after performing an action. That keeps
//! the "never block, re-check next tick" contract without any recursive
//! callback chaining.

use bevy_ecs::prelude::Resource;

/// Deadline-based repeating tick, nominally every 100 ms.
#[derive(Resource, Clone, Copy, Debug)]
pub struct TickTimer {
    interval: f64,
    deadline: f64,
}

impl TickTimer {
    /// Create a timer firing every `interval_ms` milliseconds. The first
    /// tick is due immediately.
    pub fn new(interval_ms: u64) -> Self {
        TickTimer {
            interval: interval_ms as f64 / 1000.0,
            deadline: 0.0,
        }
    }

    /// Tick interval in seconds.
    pub fn interval(&self) -> f64 {
        self.interval
    }

    /// True when the next tick deadline has been reached at time `now`
    /// (seconds on the host clock).
    pub fn due(&self, now: f64) -> bool {
        now >= self.deadline
    }

    /// Schedule the next tick relative to `now`.
    pub fn rearm(&mut self, now: f64) {
        self.deadline = now + self.interval;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_is_due_immediately() {
        let timer = TickTimer::new(100);
        assert!(timer.due(0.0));
        assert!(timer.due(123.0));
    }

    #[test]
    fn rearm_pushes_deadline_by_interval() {
        let mut timer = TickTimer::new(100);
        timer.rearm(1.0);
        assert!(!timer.due(1.05));
        assert!(timer.due(1.1));
    }

    #[test]
    fn interval_converts_to_seconds() {
        assert_eq!(TickTimer::new(250).interval(), 0.25);
    }
}
