//! Strobe
//!
//! Lights one letter at boosted brightness with everything else off, and
//! hands over to the other letter every few steps.

use embassy_time::{Duration, Instant};

use super::{Cadence, Effect, Frame};

/// Steps before the lit letter switches
pub const STROBE_SWITCH_TICKS: u8 = 4;

#[derive(Debug, Clone)]
pub struct StrobeEffect {
    cadence: Cadence,
    /// Steps taken; wraps at 256, a multiple of the full A/B cycle
    ticks: u8,
}

impl StrobeEffect {
    pub const fn new(interval: Duration) -> Self {
        Self {
            cadence: Cadence::new(interval),
            ticks: 0,
        }
    }

    /// Whether the next step lights letter A
    pub const fn letter_a_next(&self) -> bool {
        (self.ticks / STROBE_SWITCH_TICKS) % 2 == 0
    }
}

impl Effect for StrobeEffect {
    fn render<const N: usize>(&mut self, now: Instant, frame: &mut Frame<'_, N>) -> bool {
        if !self.cadence.ready(now) {
            return false;
        }

        let layout = frame.layout;
        let palette = frame.palette;
        let boosted = frame.boosted_brightness();

        frame.clear(layout.background);
        if self.letter_a_next() {
            frame.fill(layout.letter_a, palette.letter_a, boosted);
            frame.clear(layout.letter_b);
        } else {
            frame.clear(layout.letter_a);
            frame.fill(layout.letter_b, palette.letter_b, boosted);
        }

        self.ticks = self.ticks.wrapping_add(1);
        true
    }
}
