use crate::color::Rgb;

/// Brightness-scaled color in `0xRRGGBB` layout.
///
/// This is what the color buffer stores and what the encoder serializes.
/// Reading it back yields the already-scaled channels, never the logical ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PackedColor(u32);

impl PackedColor {
    /// All channels off
    pub const OFF: Self = Self(0);

    /// Pack channels that are already scaled
    pub const fn from_channels(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Wrap a raw `0xRRGGBB` word; the top byte is discarded
    pub const fn from_u32(raw: u32) -> Self {
        Self(raw & 0x00FF_FFFF)
    }

    pub const fn to_u32(self) -> u32 {
        self.0
    }

    #[allow(clippy::cast_possible_truncation)]
    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[allow(clippy::cast_possible_truncation)]
    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[allow(clippy::cast_possible_truncation)]
    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    /// Channels as an RGB triple
    pub const fn to_rgb(self) -> Rgb {
        Rgb {
            r: self.r(),
            g: self.g(),
            b: self.b(),
        }
    }
}

/// Scale one channel: `channel * brightness / 255`, truncating.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn scale_channel(channel: u8, brightness: u8) -> u8 {
    ((channel as u16 * brightness as u16) / 255) as u8
}

/// Build a packed color from a logical color and a brightness scalar
#[inline]
pub const fn color(rgb: Rgb, brightness: u8) -> PackedColor {
    PackedColor::from_channels(
        scale_channel(rgb.r, brightness),
        scale_channel(rgb.g, brightness),
        scale_channel(rgb.b, brightness),
    )
}

/// Fade a stored color to 85% of its current channels (truncating)
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn decay(packed: PackedColor) -> PackedColor {
    const fn fade(channel: u8) -> u8 {
        ((channel as u16 * 85) / 100) as u8
    }
    PackedColor::from_channels(fade(packed.r()), fade(packed.g()), fade(packed.b()))
}
