//! Breathing logo
//!
//! The logo brightness walks a triangle wave between 50% and 200% of the base
//! brightness, one unit per step. Values above full intensity are clamped
//! when painting but still count as steps of the wave.

use embassy_time::{Duration, Instant};

use super::{Cadence, Effect, Frame};

#[derive(Debug, Clone)]
pub struct BreatheEffect {
    cadence: Cadence,
    /// Current unclamped brightness; `None` until the first step
    level: Option<u16>,
    rising: bool,
}

impl BreatheEffect {
    pub const fn new(interval: Duration) -> Self {
        Self {
            cadence: Cadence::new(interval),
            level: None,
            rising: true,
        }
    }

    /// Unclamped brightness of the last painted step
    pub const fn level(&self) -> Option<u16> {
        self.level
    }

    pub const fn is_rising(&self) -> bool {
        self.rising
    }

    fn advance(&mut self, base: u8) -> u16 {
        let low = u16::from(base) / 2;
        let high = u16::from(base) * 2;
        let mut level = self.level.unwrap_or(u16::from(base)).clamp(low, high);

        if self.rising {
            level = level.saturating_add(1);
            if level >= high {
                level = high;
                self.rising = false;
            }
        } else {
            level = level.saturating_sub(1);
            if level <= low {
                level = low;
                self.rising = true;
            }
        }

        self.level = Some(level);
        level
    }
}

impl Effect for BreatheEffect {
    fn render<const N: usize>(&mut self, now: Instant, frame: &mut Frame<'_, N>) -> bool {
        if !self.cadence.ready(now) {
            return false;
        }
        let level = self.advance(frame.brightness);
        let brightness = u8::try_from(level).unwrap_or(u8::MAX);
        frame.paint_logo(brightness);
        true
    }
}
