//! Effect system with a closed, compile-time known set of effects
//!
//! Every effect is a self-throttling state machine: it is polled on every
//! main-loop pass and only advances once its own interval has elapsed.
//! All effect states live side by side in [`EffectSet`], so switching modes
//! never loses the state of the effect being left.

mod breathe;
mod cadence;
mod color_shift;
mod fill;
mod frame;
mod pulse;
mod rainbow;
mod sparkle;
mod static_logo;
mod strobe;
mod sweep;
mod wave;

use embassy_time::{Duration, Instant};

pub use breathe::BreatheEffect;
pub use cadence::Cadence;
pub use color_shift::ColorShiftEffect;
pub use fill::{FillEffect, FillPhase};
pub use frame::Frame;
pub use pulse::PulseEffect;
pub use rainbow::{RAINBOW_HUE_STEP, RainbowEffect};
pub use sparkle::SparkleEffect;
pub use static_logo::StaticLogoEffect;
pub use strobe::{STROBE_SWITCH_TICKS, StrobeEffect};
pub use sweep::{SweepEffect, SweepVariant};
pub use wave::WaveEffect;

const MODE_NAME_STATIC_LOGO: &str = "static_logo";
const MODE_NAME_BREATHE: &str = "breathe";
const MODE_NAME_SPARKLE: &str = "sparkle";
const MODE_NAME_WAVE: &str = "wave";
const MODE_NAME_PULSE: &str = "pulse";
const MODE_NAME_RAINBOW: &str = "rainbow";
const MODE_NAME_COMET: &str = "comet";
const MODE_NAME_FILL: &str = "fill";
const MODE_NAME_SCANNER: &str = "scanner";
const MODE_NAME_COLOR_SHIFT: &str = "color_shift";
const MODE_NAME_STROBE: &str = "strobe";

const MODE_ID_STATIC_LOGO: u8 = 0;
const MODE_ID_BREATHE: u8 = 1;
const MODE_ID_SPARKLE: u8 = 2;
const MODE_ID_WAVE: u8 = 3;
const MODE_ID_PULSE: u8 = 4;
const MODE_ID_RAINBOW: u8 = 5;
const MODE_ID_COMET: u8 = 6;
const MODE_ID_FILL: u8 = 7;
const MODE_ID_SCANNER: u8 = 8;
const MODE_ID_COLOR_SHIFT: u8 = 9;
const MODE_ID_STROBE: u8 = 10;

/// Number of modes
pub const MODE_COUNT: u8 = 11;

pub trait Effect {
    /// Advance one step if the effect's interval has elapsed.
    ///
    /// Returns `true` when the buffer was repainted and must be transmitted.
    /// Returning `false` means nothing was touched.
    fn render<const N: usize>(&mut self, now: Instant, frame: &mut Frame<'_, N>) -> bool;

    /// Called when the effect becomes the active mode
    fn activate(&mut self) {}
}

/// Selectable effect
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum Mode {
    #[default]
    StaticLogo = MODE_ID_STATIC_LOGO,
    Breathe = MODE_ID_BREATHE,
    Sparkle = MODE_ID_SPARKLE,
    Wave = MODE_ID_WAVE,
    Pulse = MODE_ID_PULSE,
    Rainbow = MODE_ID_RAINBOW,
    Comet = MODE_ID_COMET,
    Fill = MODE_ID_FILL,
    Scanner = MODE_ID_SCANNER,
    ColorShift = MODE_ID_COLOR_SHIFT,
    Strobe = MODE_ID_STROBE,
}

impl Mode {
    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            MODE_ID_STATIC_LOGO => Self::StaticLogo,
            MODE_ID_BREATHE => Self::Breathe,
            MODE_ID_SPARKLE => Self::Sparkle,
            MODE_ID_WAVE => Self::Wave,
            MODE_ID_PULSE => Self::Pulse,
            MODE_ID_RAINBOW => Self::Rainbow,
            MODE_ID_COMET => Self::Comet,
            MODE_ID_FILL => Self::Fill,
            MODE_ID_SCANNER => Self::Scanner,
            MODE_ID_COLOR_SHIFT => Self::ColorShift,
            MODE_ID_STROBE => Self::Strobe,
            _ => return None,
        })
    }

    /// Raw value, falling back to the static logo when unknown
    pub fn from_raw_or_default(value: u8) -> Self {
        Self::from_raw(value).unwrap_or_default()
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    /// Next mode, wrapping back to the static logo
    #[must_use]
    pub fn next(self) -> Self {
        Self::from_raw_or_default((self.as_raw() + 1) % MODE_COUNT)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StaticLogo => MODE_NAME_STATIC_LOGO,
            Self::Breathe => MODE_NAME_BREATHE,
            Self::Sparkle => MODE_NAME_SPARKLE,
            Self::Wave => MODE_NAME_WAVE,
            Self::Pulse => MODE_NAME_PULSE,
            Self::Rainbow => MODE_NAME_RAINBOW,
            Self::Comet => MODE_NAME_COMET,
            Self::Fill => MODE_NAME_FILL,
            Self::Scanner => MODE_NAME_SCANNER,
            Self::ColorShift => MODE_NAME_COLOR_SHIFT,
            Self::Strobe => MODE_NAME_STROBE,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            MODE_NAME_STATIC_LOGO => Some(Self::StaticLogo),
            MODE_NAME_BREATHE => Some(Self::Breathe),
            MODE_NAME_SPARKLE => Some(Self::Sparkle),
            MODE_NAME_WAVE => Some(Self::Wave),
            MODE_NAME_PULSE => Some(Self::Pulse),
            MODE_NAME_RAINBOW => Some(Self::Rainbow),
            MODE_NAME_COMET => Some(Self::Comet),
            MODE_NAME_FILL => Some(Self::Fill),
            MODE_NAME_SCANNER => Some(Self::Scanner),
            MODE_NAME_COLOR_SHIFT => Some(Self::ColorShift),
            MODE_NAME_STROBE => Some(Self::Strobe),
            _ => None,
        }
    }
}

/// Update interval of every cadence-driven effect
#[derive(Debug, Clone, Copy)]
pub struct EffectTimings {
    pub breathe: Duration,
    pub sparkle: Duration,
    pub wave: Duration,
    pub pulse: Duration,
    pub rainbow: Duration,
    pub comet: Duration,
    pub fill: Duration,
    pub scanner: Duration,
    pub color_shift: Duration,
    pub strobe: Duration,
}

impl Default for EffectTimings {
    fn default() -> Self {
        Self {
            breathe: Duration::from_millis(10),
            sparkle: Duration::from_millis(100),
            wave: Duration::from_millis(50),
            pulse: Duration::from_millis(500),
            rainbow: Duration::from_millis(20),
            comet: Duration::from_millis(30),
            fill: Duration::from_millis(50),
            scanner: Duration::from_millis(40),
            color_shift: Duration::from_millis(50),
            strobe: Duration::from_millis(100),
        }
    }
}

/// Private state of every effect
#[derive(Debug, Clone)]
pub struct EffectSet {
    pub static_logo: StaticLogoEffect,
    pub breathe: BreatheEffect,
    pub sparkle: SparkleEffect,
    pub wave: WaveEffect,
    pub pulse: PulseEffect,
    pub rainbow: RainbowEffect,
    pub comet: SweepEffect,
    pub fill: FillEffect,
    pub scanner: SweepEffect,
    pub color_shift: ColorShiftEffect,
    pub strobe: StrobeEffect,
}

impl EffectSet {
    pub fn new(timings: &EffectTimings) -> Self {
        Self {
            static_logo: StaticLogoEffect::new(),
            breathe: BreatheEffect::new(timings.breathe),
            sparkle: SparkleEffect::new(timings.sparkle),
            wave: WaveEffect::new(timings.wave),
            pulse: PulseEffect::new(timings.pulse),
            rainbow: RainbowEffect::new(timings.rainbow),
            comet: SweepEffect::new(SweepVariant::Comet, timings.comet),
            fill: FillEffect::new(timings.fill),
            scanner: SweepEffect::new(SweepVariant::Scanner, timings.scanner),
            color_shift: ColorShiftEffect::new(timings.color_shift),
            strobe: StrobeEffect::new(timings.strobe),
        }
    }

    /// Run the effect selected by `mode`
    pub fn render<const N: usize>(
        &mut self,
        mode: Mode,
        now: Instant,
        frame: &mut Frame<'_, N>,
    ) -> bool {
        match mode {
            Mode::StaticLogo => self.static_logo.render(now, frame),
            Mode::Breathe => self.breathe.render(now, frame),
            Mode::Sparkle => self.sparkle.render(now, frame),
            Mode::Wave => self.wave.render(now, frame),
            Mode::Pulse => self.pulse.render(now, frame),
            Mode::Rainbow => self.rainbow.render(now, frame),
            Mode::Comet => self.comet.render(now, frame),
            Mode::Fill => self.fill.render(now, frame),
            Mode::Scanner => self.scanner.render(now, frame),
            Mode::ColorShift => self.color_shift.render(now, frame),
            Mode::Strobe => self.strobe.render(now, frame),
        }
    }

    /// Notify the effect selected by `mode` that it became active
    pub fn activate(&mut self, mode: Mode) {
        match mode {
            Mode::StaticLogo => Effect::activate(&mut self.static_logo),
            Mode::Breathe => Effect::activate(&mut self.breathe),
            Mode::Sparkle => Effect::activate(&mut self.sparkle),
            Mode::Wave => Effect::activate(&mut self.wave),
            Mode::Pulse => Effect::activate(&mut self.pulse),
            Mode::Rainbow => Effect::activate(&mut self.rainbow),
            Mode::Comet => Effect::activate(&mut self.comet),
            Mode::Fill => Effect::activate(&mut self.fill),
            Mode::Scanner => Effect::activate(&mut self.scanner),
            Mode::ColorShift => Effect::activate(&mut self.color_shift),
            Mode::Strobe => Effect::activate(&mut self.strobe),
        }
    }
}

impl Default for EffectSet {
    fn default() -> Self {
        Self::new(&EffectTimings::default())
    }
}
