/// Number of LEDs on the logo board
pub const LOGO_LED_COUNT: usize = 76;

/// Half-open range of LED indices `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedRange {
    pub start: u8,
    pub end: u8,
}

impl LedRange {
    pub const fn new(start: u8, end: u8) -> Self {
        Self { start, end }
    }

    /// Get the number of LEDs in the range
    pub const fn count(self) -> u8 {
        self.end.saturating_sub(self.start)
    }

    pub const fn is_empty(self) -> bool {
        self.count() == 0
    }

    /// LED index at `offset` from the start of the range
    pub const fn nth(self, offset: u8) -> Option<usize> {
        if offset < self.count() {
            Some(self.start as usize + offset as usize)
        } else {
            None
        }
    }

    /// Indices of the range, clipped to a strip of `len` LEDs
    pub fn indices(self, len: usize) -> core::ops::Range<usize> {
        let end = (self.end as usize).min(len);
        let start = (self.start as usize).min(end);
        start..end
    }
}

/// Placement of the logo regions on the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoLayout {
    /// First letter
    pub letter_a: LedRange,
    /// Second letter
    pub letter_b: LedRange,
    /// Everything around the letters
    pub background: LedRange,
}

impl LogoLayout {
    /// Number of LEDs in both letters together
    pub const fn letter_count(self) -> u8 {
        self.letter_a.count().saturating_add(self.letter_b.count())
    }

    /// LED at `offset` when walking letter A and then letter B.
    ///
    /// LEDs between the two letters are skipped, so the letters need not be
    /// adjacent on the strip.
    pub const fn letter_at(self, offset: u8) -> Option<usize> {
        let first = self.letter_a.count();
        if offset < first {
            self.letter_a.nth(offset)
        } else {
            self.letter_b.nth(offset - first)
        }
    }
}

impl Default for LogoLayout {
    #[allow(clippy::cast_possible_truncation)]
    fn default() -> Self {
        Self {
            letter_a: LedRange::new(0, 20),
            letter_b: LedRange::new(20, 29),
            background: LedRange::new(29, LOGO_LED_COUNT as u8),
        }
    }
}
