//! Main-loop driver.
//!
//! Ties the button, the settings and the engine together without any
//! platform timer. The caller samples the button, supplies the current time
//! and sleeps for the returned duration.

use embassy_time::{Duration, Instant};
use embedded_storage::nor_flash::NorFlash;

use crate::OutputDriver;
use crate::engine::LogoEngine;
use crate::settings::{Press, PressDetector, SettingsController, SettingsStore};

/// Pause between two loop passes
pub const POLL_INTERVAL: Duration = Duration::from_millis(1);

/// Portable main loop for the logo board.
///
/// # Usage
///
/// ```ignore
/// let mut main_loop = PollLoop::new(engine, store);
///
/// loop {
///     let pause = main_loop.tick(Instant::now(), button.is_high());
///     delay.delay_ms(pause.as_millis() as u32);
/// }
/// ```
pub struct PollLoop<O: OutputDriver, F: NorFlash, const N: usize, const P: usize> {
    engine: LogoEngine<O, N, P>,
    store: SettingsStore<F>,
    settings: SettingsController,
    button: PressDetector,
}

impl<O: OutputDriver, F: NorFlash, const N: usize, const P: usize> PollLoop<O, F, N, P> {
    /// Restore persisted settings and blank the strip.
    pub fn new(mut engine: LogoEngine<O, N, P>, mut store: SettingsStore<F>) -> Self {
        let settings = SettingsController::restore(&mut store);
        engine.set_brightness_level(settings.level());
        engine.clear();

        Self {
            engine,
            store,
            settings,
            button: PressDetector::new(),
        }
    }

    /// Run one loop pass and return how long to sleep before the next.
    ///
    /// Order: button, delayed save, effect step.
    pub fn tick(&mut self, now: Instant, button_pressed: bool) -> Duration {
        if let Some(press) = self.button.poll(button_pressed, now) {
            self.settings.on_press(press, now);
            if press == Press::Long {
                self.engine.set_brightness_level(self.settings.level());
            }
        }

        // Failures are retried by the controller after the next settle window.
        let _ = self.settings.poll_save(now, &mut self.store);

        self.engine.run_effect(self.settings.mode(), now);
        POLL_INTERVAL
    }

    pub const fn engine(&self) -> &LogoEngine<O, N, P> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut LogoEngine<O, N, P> {
        &mut self.engine
    }

    pub const fn settings(&self) -> &SettingsController {
        &self.settings
    }

    pub const fn store(&self) -> &SettingsStore<F> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut SettingsStore<F> {
        &mut self.store
    }
}
