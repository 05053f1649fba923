use std::time::{Duration, Instant};

/// Time allowed to reach each berry.
pub const BERRY_TIME_LIMIT: Duration = Duration::from_secs(10);

/// Countdown for the current berry: an absolute deadline of spawn time plus
/// the limit. The clock keeps running while the game is paused.
#[derive(Clone, Debug)]
pub struct BerryTimer {
    limit: Duration,
    started: Instant,
}

impl BerryTimer {
    pub fn new(limit: Duration, now: Instant) -> Self {
        BerryTimer { limit, started: now }
    }

    pub fn reset(&mut self, now: Instant) {
        self.started = now;
    }

    pub fn deadline(&self) -> Instant {
        self.started + self.limit
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started)
    }

    pub fn expired(&self, now: Instant) -> bool {
        now >= self.deadline()
    }

    pub fn remaining(&self, now: Instant) -> Duration {
        self.limit.saturating_sub(self.elapsed(now))
    }

    /// Whole seconds left, rounded up, as shown on screen.
    pub fn remaining_secs(&self, now: Instant) -> u64 {
        let millis = self.remaining(now).as_millis() as u64;
        (millis + 999) / 1000
    }
}
