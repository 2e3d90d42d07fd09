use crate::bounds::{LedRange, LogoLayout};
use crate::buffer::ColorBuffer;
use crate::color::{LogoPalette, PackedColor, Rgb, color};

/// Everything an effect may touch during one step
pub struct Frame<'a, const N: usize> {
    /// Shared color buffer
    pub leds: &'a mut ColorBuffer<N>,
    /// Base brightness selected by the brightness level
    pub brightness: u8,
    pub layout: LogoLayout,
    pub palette: LogoPalette,
}

impl<const N: usize> Frame<'_, N> {
    /// Twice the base brightness, clamped to full intensity
    pub const fn boosted_brightness(&self) -> u8 {
        self.brightness.saturating_mul(2)
    }

    /// Set one LED; indices off the strip are ignored
    pub fn set(&mut self, index: usize, rgb: Rgb, brightness: u8) {
        self.leds.set(index, color(rgb, brightness));
    }

    pub fn fill(&mut self, range: LedRange, rgb: Rgb, brightness: u8) {
        self.leds.fill_range(range, color(rgb, brightness));
    }

    /// Turn every LED of `range` off
    pub fn clear(&mut self, range: LedRange) {
        self.leds.fill_range(range, PackedColor::OFF);
    }

    /// Paint the background ring with its logo color
    pub fn paint_background(&mut self, brightness: u8) {
        self.fill(self.layout.background, self.palette.background, brightness);
    }

    /// Paint both letters and the background in their logo colors
    pub fn paint_logo(&mut self, brightness: u8) {
        self.fill(self.layout.letter_a, self.palette.letter_a, brightness);
        self.fill(self.layout.letter_b, self.palette.letter_b, brightness);
        self.paint_background(brightness);
    }
}
