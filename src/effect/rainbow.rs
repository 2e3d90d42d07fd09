//! Rainbow cycling effect
//!
//! Sweeps the color wheel across the whole strip. LED `i` at step `t` shows
//! `wheel((i + HUE_STEP * t) mod 256)`.

use embassy_time::{Duration, Instant};

use super::{Cadence, Effect, Frame};
use crate::color::wheel;

/// Hue advance per step
pub const RAINBOW_HUE_STEP: u8 = 3;

#[derive(Debug, Clone)]
pub struct RainbowEffect {
    cadence: Cadence,
    /// Hue offset of LED 0 for the next step
    hue: u8,
    hue_step: u8,
}

impl RainbowEffect {
    pub const fn new(interval: Duration) -> Self {
        Self {
            cadence: Cadence::new(interval),
            hue: 0,
            hue_step: RAINBOW_HUE_STEP,
        }
    }

    /// Set the hue advance per step
    #[must_use]
    pub const fn with_hue_step(mut self, step: u8) -> Self {
        self.hue_step = step;
        self
    }

    /// Hue offset the next step will paint with
    pub const fn hue(&self) -> u8 {
        self.hue
    }
}

impl Effect for RainbowEffect {
    #[allow(clippy::cast_possible_truncation)]
    fn render<const N: usize>(&mut self, now: Instant, frame: &mut Frame<'_, N>) -> bool {
        if !self.cadence.ready(now) {
            return false;
        }

        for index in 0..N {
            // Only the low byte matters: hue lives on a 256-step circle.
            let hue = (index as u8).wrapping_add(self.hue);
            frame.set(index, wheel(hue), frame.brightness);
        }

        self.hue = self.hue.wrapping_add(self.hue_step);
        true
    }
}
