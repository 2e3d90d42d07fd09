//! Pulse widths for the WS2812B bit period.
//!
//! The timer runs one period per data bit; each entry of the pulse buffer is
//! the compare value (high time) for that bit. Widths are derived from the
//! timer clock so they stay inside the datasheet windows on any MCU.

/// Bit period in nanoseconds (800 kHz data rate)
pub const BIT_PERIOD_NS: u32 = 1_250;
/// High time of a logical 0
pub const ZERO_HIGH_NS: u32 = 400;
/// High time of a logical 1
pub const ONE_HIGH_NS: u32 = 800;

/// Timer clock of the reference board (STM32F0 at 48 MHz, no prescaler)
pub const DEFAULT_TIMER_CLOCK_HZ: u32 = 48_000_000;

/// Convert nanoseconds to timer ticks, rounding to nearest.
#[allow(clippy::cast_possible_truncation)]
const fn to_ticks(ns: u32, clock_hz: u32) -> u32 {
    ((ns as u64 * clock_hz as u64 + 500_000_000) / 1_000_000_000) as u32
}

/// Matched set of timer period and pulse widths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PulseTiming {
    /// Timer ticks per bit (auto-reload value is `period - 1`)
    pub period: u16,
    /// Compare value for a 0 bit
    pub zero: u16,
    /// Compare value for a 1 bit
    pub one: u16,
}

impl PulseTiming {
    /// Compute the timing for a timer counting at `clock_hz`
    #[allow(clippy::cast_possible_truncation)]
    pub const fn for_timer_clock(clock_hz: u32) -> Self {
        Self {
            period: to_ticks(BIT_PERIOD_NS, clock_hz) as u16,
            zero: to_ticks(ZERO_HIGH_NS, clock_hz) as u16,
            one: to_ticks(ONE_HIGH_NS, clock_hz) as u16,
        }
    }

    /// Compare value for a single bit
    #[inline]
    pub const fn pulse(self, bit: bool) -> u16 {
        if bit { self.one } else { self.zero }
    }

    /// Auto-reload register value for the timer
    pub const fn auto_reload(self) -> u16 {
        self.period.saturating_sub(1)
    }
}

impl Default for PulseTiming {
    fn default() -> Self {
        Self::for_timer_clock(DEFAULT_TIMER_CLOCK_HZ)
    }
}
