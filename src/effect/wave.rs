//! Wave
//!
//! A single bright pixel runs through letter A, then letter B, then jumps
//! back to the start of letter A.

use embassy_time::{Duration, Instant};
use smart_leds::colors::WHITE;

use super::{Cadence, Effect, Frame};

#[derive(Debug, Clone)]
pub struct WaveEffect {
    cadence: Cadence,
    /// Offset into the concatenation of both letters
    position: u8,
}

impl WaveEffect {
    pub const fn new(interval: Duration) -> Self {
        Self {
            cadence: Cadence::new(interval),
            position: 0,
        }
    }

    pub const fn position(&self) -> u8 {
        self.position
    }
}

impl Effect for WaveEffect {
    fn render<const N: usize>(&mut self, now: Instant, frame: &mut Frame<'_, N>) -> bool {
        if !self.cadence.ready(now) {
            return false;
        }

        frame.paint_logo(frame.brightness);

        let total = frame.layout.letter_count();
        if total == 0 {
            return true;
        }

        self.position %= total;
        if let Some(index) = frame.layout.letter_at(self.position) {
            frame.set(index, WHITE, frame.boosted_brightness());
        }

        self.position = (self.position + 1) % total;
        true
    }
}
