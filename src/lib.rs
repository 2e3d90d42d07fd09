#![no_std]

pub mod bounds;
pub mod brightness;
pub mod buffer;
pub mod color;
pub mod effect;
pub mod engine;
pub mod poll_loop;
pub mod random;
pub mod settings;
pub mod ws2812;

pub use bounds::{LOGO_LED_COUNT, LedRange, LogoLayout};
pub use brightness::{BRIGHTNESS_LEVELS, BRIGHTNESS_TABLE, BrightnessLevel};
pub use buffer::ColorBuffer;
pub use effect::{EffectSet, EffectTimings, MODE_COUNT, Mode};
pub use engine::{EngineConfig, LogoBoardEngine, LogoEngine};
pub use poll_loop::{POLL_INTERVAL, PollLoop};
pub use settings::{Press, PressDetector, SettingsController, SettingsStore, StorageError};
pub use ws2812::{PulseTiming, PwmDma, TransferFlag, TransmitError, Ws2812Driver};

pub use color::{LogoPalette, PackedColor, Rgb, color};
pub use embassy_time::{Duration, Instant};

/// Sink for encoded pulse frames
///
/// Implement this trait to support different hardware platforms.
/// The engine is generic over this trait.
pub trait OutputDriver {
    type Error: core::fmt::Debug;

    /// Send one complete pulse frame, returning once it is out or abandoned
    fn write(&mut self, pulses: &[u16]) -> Result<(), Self::Error>;
}
