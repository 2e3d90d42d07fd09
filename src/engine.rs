use embassy_time::Instant;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::OutputDriver;
use crate::bounds::{LOGO_LED_COUNT, LogoLayout};
use crate::brightness::BrightnessLevel;
use crate::buffer::ColorBuffer;
use crate::color::{LogoPalette, PackedColor};
use crate::effect::{EffectSet, EffectTimings, Frame, Mode};
use crate::ws2812::{PulseBuffer, PulseTiming, encode, pulse_buffer_len};

/// Configuration for the logo engine
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    pub layout: LogoLayout,
    pub palette: LogoPalette,
    pub timings: EffectTimings,
    pub pulse_timing: PulseTiming,
    pub brightness_level: BrightnessLevel,
}

/// Logo Engine - owns the color buffer, pulse buffer and every effect state
///
/// `N` is the strip length, `P` the pulse buffer capacity
/// (see [`pulse_buffer_len`]). Buffers are only touched from `run_effect`
/// and `clear`, and a new frame is encoded only after the previous
/// transmission has returned.
pub struct LogoEngine<O: OutputDriver, const N: usize, const P: usize> {
    // External dependencies and configuration
    output: O,
    layout: LogoLayout,
    palette: LogoPalette,
    pulse_timing: PulseTiming,

    // Internal state
    level: BrightnessLevel,
    active: Option<Mode>,
    effects: EffectSet,
    colors: ColorBuffer<N>,
    pulses: PulseBuffer<P>,
}

/// Engine sized for the logo board
pub type LogoBoardEngine<O> =
    LogoEngine<O, LOGO_LED_COUNT, { pulse_buffer_len(LOGO_LED_COUNT) }>;

impl<O: OutputDriver, const N: usize, const P: usize> LogoEngine<O, N, P> {
    pub fn new(output: O, config: &EngineConfig) -> Self {
        Self {
            output,
            layout: config.layout,
            palette: config.palette,
            pulse_timing: config.pulse_timing,
            level: config.brightness_level,
            active: None,
            effects: EffectSet::new(&config.timings),
            colors: ColorBuffer::new(),
            pulses: PulseBuffer::new(),
        }
    }

    /// Run one scheduler step for `mode`.
    ///
    /// Call once per main-loop pass. Returns `true` if a frame was handed to
    /// the output, even one the output then failed to send; `false` means the
    /// active effect was not due and neither buffer changed. A static logo
    /// frame that fails to send is painted again on the next step.
    pub fn run_effect(&mut self, mode: Mode, now: Instant) -> bool {
        if self.active != Some(mode) {
            #[cfg(feature = "esp32-log")]
            println!("[LogoEngine.run_effect] switching to {}", mode.as_str());
            self.effects.activate(mode);
            self.active = Some(mode);
        }

        let mut frame = Frame {
            leds: &mut self.colors,
            brightness: self.level.value(),
            layout: self.layout,
            palette: self.palette,
        };
        if !self.effects.render(mode, now, &mut frame) {
            return false;
        }

        if !self.flush() {
            // One-shot paints never become due again on their own.
            self.effects.static_logo.invalidate();
        }
        true
    }

    /// Like [`Self::run_effect`] for a raw mode byte; unknown values run the
    /// static logo.
    pub fn run_raw(&mut self, mode: u8, now: Instant) -> bool {
        self.run_effect(Mode::from_raw_or_default(mode), now)
    }

    /// Turn every LED off immediately
    pub fn clear(&mut self) {
        self.colors.fill(PackedColor::OFF);
        let _ = self.flush();
    }

    /// Select a brightness level; all effects pick it up on their next step
    pub fn set_brightness_level(&mut self, level: BrightnessLevel) {
        self.level = level;
        self.effects.static_logo.invalidate();
    }

    pub const fn brightness_level(&self) -> BrightnessLevel {
        self.level
    }

    /// Base brightness derived from the current level
    pub const fn brightness(&self) -> u8 {
        self.level.value()
    }

    /// Mode of the last `run_effect` call
    pub const fn active_mode(&self) -> Option<Mode> {
        self.active
    }

    pub const fn colors(&self) -> &ColorBuffer<N> {
        &self.colors
    }

    pub fn pulses(&self) -> &[u16] {
        self.pulses.as_slice()
    }

    pub const fn effects(&self) -> &EffectSet {
        &self.effects
    }

    pub const fn output(&self) -> &O {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    /// Encode the color buffer and hand it to the output.
    ///
    /// Returns `false` when the frame did not reach the strip.
    fn flush(&mut self) -> bool {
        encode(self.colors.as_slice(), self.pulse_timing, &mut self.pulses);
        match self.output.write(self.pulses.as_slice()) {
            Ok(()) => true,
            #[allow(unused_variables)]
            Err(error) => {
                #[cfg(feature = "esp32-log")]
                println!("[LogoEngine.flush] transmission failed: {:?}", error);
                false
            }
        }
    }
}
