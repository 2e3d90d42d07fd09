//! Bitstream encoder
//!
//! Serializes packed colors into one timer compare value per bit:
//! green, red, blue, MSB first, followed by the reset gap.

use heapless::Vec;

use crate::color::PackedColor;
use crate::ws2812::timing::PulseTiming;

/// Bits sent per LED
pub const BITS_PER_LED: usize = 24;

/// Zero-width entries appended after the last LED to latch the chain
pub const RESET_LEN: usize = 50;

/// Compare value used for the reset gap (line held low)
pub const RESET_PULSE: u16 = 0;

/// Pulse buffer capacity needed for `leds` LEDs
pub const fn pulse_buffer_len(leds: usize) -> usize {
    leds * BITS_PER_LED + RESET_LEN
}

/// Capacity-checked pulse sequence handed to the DMA stream
#[derive(Debug, Clone, Default)]
pub struct PulseBuffer<const P: usize> {
    pulses: Vec<u16, P>,
}

impl<const P: usize> PulseBuffer<P> {
    pub const fn new() -> Self {
        Self { pulses: Vec::new() }
    }

    pub fn as_slice(&self) -> &[u16] {
        &self.pulses
    }

    pub fn len(&self) -> usize {
        self.pulses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pulses.is_empty()
    }

    pub const fn capacity(&self) -> usize {
        P
    }

    /// Append a pulse; returns `false` once the buffer is full
    fn push(&mut self, pulse: u16) -> bool {
        self.pulses.push(pulse).is_ok()
    }
}

/// Rebuild `out` from `colors`.
///
/// The whole buffer is recomputed on every call. When `P` is too small for
/// the colors plus reset gap, encoding stops at capacity instead of writing
/// past it.
pub fn encode<const P: usize>(
    colors: &[PackedColor],
    timing: PulseTiming,
    out: &mut PulseBuffer<P>,
) {
    out.pulses.clear();

    for color in colors {
        for byte in [color.g(), color.r(), color.b()] {
            for bit in (0..8).rev() {
                if !out.push(timing.pulse(byte & (1 << bit) != 0)) {
                    return;
                }
            }
        }
    }

    for _ in 0..RESET_LEN {
        if !out.push(RESET_PULSE) {
            return;
        }
    }
}

/// Recover packed colors from a pulse sequence.
///
/// A pulse equal to `timing.one` reads as a 1 bit, anything else as 0.
/// Returns the number of complete LEDs written to `out`.
pub fn decode(pulses: &[u16], timing: PulseTiming, out: &mut [PackedColor]) -> usize {
    let mut decoded = 0;
    for (chunk, slot) in pulses.chunks_exact(BITS_PER_LED).zip(out.iter_mut()) {
        let grb = chunk
            .iter()
            .fold(0u32, |acc, &pulse| (acc << 1) | u32::from(pulse == timing.one));
        let g = (grb >> 16) & 0xFF;
        let r = (grb >> 8) & 0xFF;
        let b = grb & 0xFF;
        *slot = PackedColor::from_u32((r << 16) | (g << 8) | b);
        decoded += 1;
    }
    decoded
}
