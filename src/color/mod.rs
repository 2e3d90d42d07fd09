//! Color model
//!
//! Logical colors are plain `smart_leds` RGB triples. Everything stored in the
//! color buffer is a [`PackedColor`]: a brightness-scaled `0xRRGGBB` word.

mod packed;
mod wheel;

use smart_leds::RGB8;

pub use packed::{PackedColor, color, decay, scale_channel};
pub use wheel::wheel;

pub type Rgb = RGB8;

/// Colors of the three logo regions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoPalette {
    /// Color of the first letter
    pub letter_a: Rgb,
    /// Color of the second letter
    pub letter_b: Rgb,
    /// Color of the background ring
    pub background: Rgb,
}

/// Dark blue used behind the letters
pub const DARK_BLUE: Rgb = Rgb {
    r: 30,
    g: 30,
    b: 150,
};

impl Default for LogoPalette {
    fn default() -> Self {
        Self {
            letter_a: smart_leds::colors::MAGENTA,
            letter_b: smart_leds::colors::WHITE,
            background: DARK_BLUE,
        }
    }
}
