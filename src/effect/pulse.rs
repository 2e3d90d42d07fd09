//! Pulse: the logo toggles between base and boosted brightness.

use embassy_time::{Duration, Instant};

use super::{Cadence, Effect, Frame};

#[derive(Debug, Clone)]
pub struct PulseEffect {
    cadence: Cadence,
    boosted: bool,
}

impl PulseEffect {
    pub const fn new(interval: Duration) -> Self {
        Self {
            cadence: Cadence::new(interval),
            boosted: false,
        }
    }

    /// Whether the last painted step was the boosted one
    pub const fn is_boosted(&self) -> bool {
        self.boosted
    }
}

impl Effect for PulseEffect {
    fn render<const N: usize>(&mut self, now: Instant, frame: &mut Frame<'_, N>) -> bool {
        if !self.cadence.ready(now) {
            return false;
        }
        let brightness = if self.boosted {
            frame.brightness
        } else {
            frame.boosted_brightness()
        };
        frame.paint_logo(brightness);
        self.boosted = !self.boosted;
        true
    }
}
