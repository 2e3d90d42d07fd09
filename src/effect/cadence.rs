use embassy_time::{Duration, Instant};

/// Minimum spacing between visible updates of one effect.
///
/// The first poll is always due. After that a poll is due once `interval`
/// has elapsed since the last due poll.
#[derive(Debug, Clone)]
pub struct Cadence {
    interval: Duration,
    last_update: Option<Instant>,
}

impl Cadence {
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_update: None,
        }
    }

    pub const fn interval(&self) -> Duration {
        self.interval
    }

    pub const fn last_update(&self) -> Option<Instant> {
        self.last_update
    }

    /// Returns `true` and records `now` if the interval has elapsed
    pub fn ready(&mut self, now: Instant) -> bool {
        if let Some(last) = self.last_update {
            // A clock that went backwards counts as elapsed.
            if now
                .checked_duration_since(last)
                .is_some_and(|elapsed| elapsed < self.interval)
            {
                return false;
            }
        }
        self.last_update = Some(now);
        true
    }
}
