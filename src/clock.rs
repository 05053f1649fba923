use std::thread::sleep;
use std::time::{Duration, Instant};

/// Fixed-timestep pacing: each frame starts one interval after the previous
/// one, whatever the update and render steps cost.
#[derive(Debug, Clone)]
pub struct FrameClock {
    frame_start: Instant,
}

impl FrameClock {
    pub fn new(now: Instant) -> Self {
        FrameClock { frame_start: now }
    }

    /// Budget left in the current frame.
    pub fn remaining(&self, interval: Duration, now: Instant) -> Duration {
        (self.frame_start + interval).saturating_duration_since(now)
    }

    /// Move to the next frame. A clock that fell more than a frame behind
    /// resynchronises to `now` instead of trying to catch up.
    pub fn advance(&mut self, interval: Duration, now: Instant) {
        let next = self.frame_start + interval;
        self.frame_start = if now > next + interval { now } else { next };
    }

    /// Sleep out the rest of the frame, then start the next one.
    pub fn wait(&mut self, interval: Duration) -> Instant {
        let remaining = self.remaining(interval, Instant::now());
        if remaining > Duration::ZERO {
            sleep(remaining);
        }
        let now = Instant::now();
        self.advance(interval, now);
        now
    }
}
