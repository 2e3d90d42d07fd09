//! Sparkle
//!
//! Alternates between the logo with one random highlighted letter pixel and
//! the plain logo, toggling on every step.

use embassy_time::{Duration, Instant};
use smart_leds::colors::WHITE;

use super::{Cadence, Effect, Frame};
use crate::random::Lcg;

#[derive(Debug, Clone)]
pub struct SparkleEffect {
    cadence: Cadence,
    rng: Lcg,
    /// Whether the next step shows a sparkle
    sparkle_next: bool,
    last_pixel: Option<usize>,
}

impl SparkleEffect {
    pub const fn new(interval: Duration) -> Self {
        Self {
            cadence: Cadence::new(interval),
            rng: Lcg::new(0),
            sparkle_next: true,
            last_pixel: None,
        }
    }

    /// Pixel highlighted by the last step, if it was a sparkle step
    pub const fn last_pixel(&self) -> Option<usize> {
        self.last_pixel
    }
}

impl Effect for SparkleEffect {
    fn render<const N: usize>(&mut self, now: Instant, frame: &mut Frame<'_, N>) -> bool {
        if !self.cadence.ready(now) {
            return false;
        }

        frame.paint_logo(frame.brightness);

        self.last_pixel = if self.sparkle_next {
            let layout = frame.layout;
            let offset = self.rng.next_below(layout.letter_count());
            layout.letter_at(offset)
        } else {
            None
        };
        if let Some(index) = self.last_pixel {
            frame.set(index, WHITE, frame.boosted_brightness());
        }

        self.sparkle_next = !self.sparkle_next;
        true
    }
}
