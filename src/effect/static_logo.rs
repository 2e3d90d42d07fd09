//! Static logo
//!
//! Paints the letters and background once. It repaints only when invalidated:
//! on re-entry into the mode or after a brightness change.

use embassy_time::Instant;

use super::{Effect, Frame};

#[derive(Debug, Clone)]
pub struct StaticLogoEffect {
    dirty: bool,
}

impl StaticLogoEffect {
    pub const fn new() -> Self {
        Self { dirty: true }
    }

    /// Request a repaint on the next render
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }
}

impl Default for StaticLogoEffect {
    fn default() -> Self {
        Self::new()
    }
}

impl Effect for StaticLogoEffect {
    fn render<const N: usize>(&mut self, _now: Instant, frame: &mut Frame<'_, N>) -> bool {
        if !self.dirty {
            return false;
        }
        frame.paint_logo(frame.brightness);
        self.dirty = false;
        true
    }

    fn activate(&mut self) {
        self.invalidate();
    }
}
