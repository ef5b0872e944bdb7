use std::time::{Duration, Instant};

use tracing::{debug, warn};

/// Fixed-period tick source.
///
/// The clock never looks at the wall clock itself: callers pass `now` in, so
/// tests can drive it with synthetic instants. A stopped clock owes no ticks.
#[derive(Debug, Clone)]
pub struct Clock {
    period: Duration,
    max_catch_up: u32,
    next_due: Option<Instant>,
}

impl Clock {
    pub fn new(period: Duration, max_catch_up: u32) -> Self {
        Self {
            period,
            max_catch_up: max_catch_up.max(1),
            next_due: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Starts (or restarts) the clock. The first tick is due one period later.
    pub fn start(&mut self, now: Instant) {
        debug!(period_ms = self.period.as_millis() as u64, "clock started");
        self.next_due = Some(now + self.period);
    }

    pub fn stop(&mut self) {
        if self.next_due.take().is_some() {
            debug!("clock stopped");
        }
    }

    /// Number of ticks that fell due up to `now`.
    ///
    /// At most `max_catch_up` ticks are handed out per call; if the caller fell
    /// further behind than that, the backlog is dropped rather than replayed.
    pub fn take_due(&mut self, now: Instant) -> u32 {
        let Some(mut due) = self.next_due else {
            return 0;
        };

        let mut ticks = 0;
        while due <= now && ticks < self.max_catch_up {
            ticks += 1;
            due += self.period;
        }

        if due <= now {
            warn!(
                behind_ms = (now - due).as_millis() as u64,
                "tick backlog dropped"
            );
            due = now + self.period;
        }

        self.next_due = Some(due);
        ticks
    }

    /// Time left until the next tick, or `None` when stopped.
    pub fn until_next(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }
}
