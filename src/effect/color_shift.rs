//! Color shift
//!
//! Paints letter A, letter B and the background with wheel colors a third of
//! the circle apart, rotating all three together.

use embassy_time::{Duration, Instant};

use super::{Cadence, Effect, Frame};
use crate::color::wheel;

const REGION_HUE_OFFSET: u8 = 85;

#[derive(Debug, Clone)]
pub struct ColorShiftEffect {
    cadence: Cadence,
    hue: u8,
}

impl ColorShiftEffect {
    pub const fn new(interval: Duration) -> Self {
        Self {
            cadence: Cadence::new(interval),
            hue: 0,
        }
    }

    pub const fn hue(&self) -> u8 {
        self.hue
    }
}

impl Effect for ColorShiftEffect {
    fn render<const N: usize>(&mut self, now: Instant, frame: &mut Frame<'_, N>) -> bool {
        if !self.cadence.ready(now) {
            return false;
        }

        let layout = frame.layout;
        let brightness = frame.brightness;
        frame.fill(layout.letter_a, wheel(self.hue), brightness);
        frame.fill(
            layout.letter_b,
            wheel(self.hue.wrapping_add(REGION_HUE_OFFSET)),
            brightness,
        );
        frame.fill(
            layout.background,
            wheel(self.hue.wrapping_add(REGION_HUE_OFFSET * 2)),
            brightness,
        );

        self.hue = self.hue.wrapping_add(1);
        true
    }
}
