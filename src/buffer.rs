//! Shared color buffer
//!
//! One packed color per LED. Writes outside the strip are ignored, never
//! reported: a stray index must not take the light down.

use crate::bounds::LedRange;
use crate::color::PackedColor;

/// Fixed-size array of the current color of every LED
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorBuffer<const N: usize> {
    leds: [PackedColor; N],
}

impl<const N: usize> ColorBuffer<N> {
    /// Create a buffer with every LED off
    pub const fn new() -> Self {
        Self {
            leds: [PackedColor::OFF; N],
        }
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Color at `index`, if the index is on the strip
    pub fn get(&self, index: usize) -> Option<PackedColor> {
        self.leds.get(index).copied()
    }

    /// Set a single LED; out-of-range indices are ignored
    pub fn set(&mut self, index: usize, color: PackedColor) {
        if let Some(led) = self.leds.get_mut(index) {
            *led = color;
        }
    }

    /// Set every LED of `range` that lies on the strip
    pub fn fill_range(&mut self, range: LedRange, color: PackedColor) {
        for led in &mut self.leds[range.indices(N)] {
            *led = color;
        }
    }

    /// Set every LED
    pub fn fill(&mut self, color: PackedColor) {
        self.leds.fill(color);
    }

    /// Apply `f` to every LED of `range` that lies on the strip
    pub fn map_range(&mut self, range: LedRange, f: impl Fn(PackedColor) -> PackedColor) {
        for led in &mut self.leds[range.indices(N)] {
            *led = f(*led);
        }
    }

    pub fn as_slice(&self) -> &[PackedColor] {
        &self.leds
    }
}

impl<const N: usize> Default for ColorBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}
