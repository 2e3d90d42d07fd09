use embassy_time::{Duration, Instant};
use embedded_storage::nor_flash::NorFlash;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use super::button::Press;
use super::record::StorageError;
use super::store::SettingsStore;
use crate::brightness::BrightnessLevel;
use crate::effect::Mode;

/// Quiet period after the last change before settings hit the flash
pub const SAVE_DELAY: Duration = Duration::from_millis(2000);

/// User-selected mode and brightness, with a delayed flash write.
///
/// Rapid presses only produce one write: every change pushes the save back
/// until nothing has changed for [`SAVE_DELAY`].
#[derive(Debug, Clone)]
pub struct SettingsController {
    mode: Mode,
    level: BrightnessLevel,
    /// Time of the last unsaved change
    pending: Option<Instant>,
}

impl SettingsController {
    pub const fn new(mode: Mode, level: BrightnessLevel) -> Self {
        Self {
            mode,
            level,
            pending: None,
        }
    }

    /// Restore from flash, falling back to defaults per field
    pub fn restore<F: NorFlash>(store: &mut SettingsStore<F>) -> Self {
        Self::new(store.read_mode(), store.read_brightness_level())
    }

    pub const fn mode(&self) -> Mode {
        self.mode
    }

    pub const fn level(&self) -> BrightnessLevel {
        self.level
    }

    /// Whether a change is waiting to be saved
    pub const fn is_dirty(&self) -> bool {
        self.pending.is_some()
    }

    pub fn on_press(&mut self, press: Press, now: Instant) {
        match press {
            Press::Short => self.on_short_press(now),
            Press::Long => self.on_long_press(now),
        }
    }

    /// Advance to the next mode
    pub fn on_short_press(&mut self, now: Instant) {
        self.mode = self.mode.next();
        self.pending = Some(now);
        #[cfg(feature = "esp32-log")]
        println!("[SettingsController.on_short_press] mode={}", self.mode.as_str());
    }

    /// Advance to the next brightness level
    pub fn on_long_press(&mut self, now: Instant) {
        self.level = self.level.next();
        self.pending = Some(now);
        #[cfg(feature = "esp32-log")]
        println!("[SettingsController.on_long_press] level={}", self.level.index());
    }

    /// Save once the settle window has passed.
    ///
    /// Returns `Ok(true)` when a save happened. A failed save keeps the
    /// settings dirty and waits another full window before retrying.
    pub fn poll_save<F: NorFlash>(
        &mut self,
        now: Instant,
        store: &mut SettingsStore<F>,
    ) -> Result<bool, StorageError> {
        let Some(changed_at) = self.pending else {
            return Ok(false);
        };
        let settled = now
            .checked_duration_since(changed_at)
            .is_some_and(|quiet| quiet > SAVE_DELAY);
        if !settled {
            return Ok(false);
        }

        match store.save(self.mode, self.level) {
            Ok(()) => {
                self.pending = None;
                Ok(true)
            }
            Err(error) => {
                #[cfg(feature = "esp32-log")]
                println!("[SettingsController.poll_save] save failed: {}", error);
                self.pending = Some(now);
                Err(error)
            }
        }
    }
}
