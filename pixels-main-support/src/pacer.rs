use std::time::{Duration, Instant};

/// Frame boundaries at a fixed period. Frames that were missed entirely are
/// skipped rather than run back to back.
#[derive(Clone, Copy, Debug)]
pub struct FramePacer {
    period: Duration,
    next_frame: Instant,
}

impl FramePacer {
    pub fn new(period: Duration, now: Instant) -> Self {
        assert!(!period.is_zero());
        Self {
            period,
            next_frame: now,
        }
    }

    pub fn deadline(&self) -> Instant {
        self.next_frame
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_frame
    }

    pub fn advance(&mut self, now: Instant) {
        while self.next_frame <= now {
            self.next_frame += self.period;
        }
    }
}
