/// Number of selectable brightness levels
pub const BRIGHTNESS_LEVELS: usize = 5;

/// Absolute base brightness of each level
pub const BRIGHTNESS_TABLE: [u8; BRIGHTNESS_LEVELS] = [50, 100, 150, 200, 255];

const DEFAULT_LEVEL: u8 = 2;

/// Index into [`BRIGHTNESS_TABLE`].
///
/// The level is the source of truth; the absolute brightness is always
/// looked up from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrightnessLevel(u8);

impl BrightnessLevel {
    /// Validate a raw level index
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_raw(raw: u8) -> Option<Self> {
        if (raw as usize) < BRIGHTNESS_LEVELS {
            Some(Self(raw))
        } else {
            None
        }
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    /// Absolute brightness for this level
    pub const fn value(self) -> u8 {
        BRIGHTNESS_TABLE[self.0 as usize]
    }

    /// Next level, wrapping back to the dimmest
    #[allow(clippy::cast_possible_truncation)]
    #[must_use]
    pub const fn next(self) -> Self {
        Self((self.0 + 1) % BRIGHTNESS_LEVELS as u8)
    }
}

impl Default for BrightnessLevel {
    fn default() -> Self {
        Self(DEFAULT_LEVEL)
    }
}
