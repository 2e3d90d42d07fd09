//! Fill
//!
//! Fills letter A pixel by pixel, then letter B, then clears both letters
//! pixel by pixel and starts over.

use embassy_time::{Duration, Instant};

use super::{Cadence, Effect, Frame};
use crate::color::PackedColor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillPhase {
    FillA,
    FillB,
    Clear,
}

#[derive(Debug, Clone)]
pub struct FillEffect {
    cadence: Cadence,
    phase: FillPhase,
    /// Next pixel offset within the current phase's range
    index: u8,
}

impl FillEffect {
    pub const fn new(interval: Duration) -> Self {
        Self {
            cadence: Cadence::new(interval),
            phase: FillPhase::FillA,
            index: 0,
        }
    }

    pub const fn phase(&self) -> FillPhase {
        self.phase
    }

    pub const fn index(&self) -> u8 {
        self.index
    }
}

impl Effect for FillEffect {
    fn render<const N: usize>(&mut self, now: Instant, frame: &mut Frame<'_, N>) -> bool {
        if !self.cadence.ready(now) {
            return false;
        }

        frame.paint_background(frame.brightness);

        let layout = frame.layout;
        let palette = frame.palette;
        let (count, led, next_phase) = match self.phase {
            FillPhase::FillA => (
                layout.letter_a.count(),
                layout.letter_a.nth(self.index),
                FillPhase::FillB,
            ),
            FillPhase::FillB => (
                layout.letter_b.count(),
                layout.letter_b.nth(self.index),
                FillPhase::Clear,
            ),
            FillPhase::Clear => (
                layout.letter_count(),
                layout.letter_at(self.index),
                FillPhase::FillA,
            ),
        };

        if let Some(led) = led {
            match self.phase {
                FillPhase::FillA => frame.set(led, palette.letter_a, frame.brightness),
                FillPhase::FillB => frame.set(led, palette.letter_b, frame.brightness),
                FillPhase::Clear => frame.leds.set(led, PackedColor::OFF),
            }
        }

        self.index = self.index.saturating_add(1);
        if self.index >= count {
            self.phase = next_phase;
            self.index = 0;
        }
        true
    }
}
