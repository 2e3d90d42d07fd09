//! Bouncing window effects
//!
//! A fixed-width window travels back and forth across the letters.
//! - `Comet`: the trail fades by 15% per step instead of being cleared.
//! - `Scanner`: the letters are cleared every step, leaving a hard-edged bar.

use embassy_time::{Duration, Instant};
use smart_leds::colors::{RED, WHITE};

use super::{Cadence, Effect, Frame};
use crate::color::{Rgb, decay};

const DEFAULT_WIDTH: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepVariant {
    Comet,
    Scanner,
}

impl SweepVariant {
    const fn head_color(self) -> Rgb {
        match self {
            Self::Comet => WHITE,
            Self::Scanner => RED,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SweepEffect {
    cadence: Cadence,
    variant: SweepVariant,
    width: u8,
    /// Offset of the window's first pixel inside the letters
    position: u8,
    forward: bool,
}

impl SweepEffect {
    pub const fn new(variant: SweepVariant, interval: Duration) -> Self {
        Self {
            cadence: Cadence::new(interval),
            variant,
            width: DEFAULT_WIDTH,
            position: 0,
            forward: true,
        }
    }

    /// Set the window width
    #[must_use]
    pub const fn with_width(mut self, width: u8) -> Self {
        self.width = width;
        self
    }

    pub const fn position(&self) -> u8 {
        self.position
    }

    pub const fn is_forward(&self) -> bool {
        self.forward
    }

    /// Move one pixel, reversing at either end
    fn advance(&mut self, last: u8) {
        self.position = self.position.min(last);
        if self.forward {
            if self.position < last {
                self.position += 1;
            }
            if self.position >= last {
                self.forward = false;
            }
        } else {
            self.position = self.position.saturating_sub(1);
            if self.position == 0 {
                self.forward = true;
            }
        }
    }
}

impl Effect for SweepEffect {
    fn render<const N: usize>(&mut self, now: Instant, frame: &mut Frame<'_, N>) -> bool {
        if !self.cadence.ready(now) {
            return false;
        }

        let layout = frame.layout;
        for letter in [layout.letter_a, layout.letter_b] {
            match self.variant {
                SweepVariant::Comet => frame.leds.map_range(letter, decay),
                SweepVariant::Scanner => frame.clear(letter),
            }
        }
        frame.paint_background(frame.brightness);

        let last = layout.letter_count().saturating_sub(self.width);
        self.position = self.position.min(last);
        let head = self.variant.head_color();
        for offset in 0..self.width {
            if let Some(index) = layout.letter_at(self.position.saturating_add(offset)) {
                frame.set(index, head, frame.brightness);
            }
        }

        self.advance(last);
        true
    }
}
