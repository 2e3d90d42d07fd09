use embedded_storage::nor_flash::NorFlash;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use super::record::{RECORD_SIZE, SettingsRecord, StorageError};
use crate::brightness::BrightnessLevel;
use crate::effect::Mode;

/// Settings persisted in one erase page of a NOR flash
pub struct SettingsStore<F: NorFlash> {
    flash: F,
    offset: u32,
}

impl<F: NorFlash> SettingsStore<F> {
    /// `offset` must be aligned to the flash erase size
    pub fn new(flash: F, offset: u32) -> Self {
        Self { flash, offset }
    }

    /// Read and validate the stored record
    pub fn load(&mut self) -> Result<SettingsRecord, StorageError> {
        let mut bytes = [0u8; RECORD_SIZE];
        self.flash
            .read(self.offset, &mut bytes)
            .map_err(|_| StorageError::Driver)?;
        SettingsRecord::decode(&bytes)
    }

    /// Stored mode, or the static logo when nothing valid is stored
    pub fn read_mode(&mut self) -> Mode {
        self.load()
            .ok()
            .and_then(|record| record.mode())
            .unwrap_or_default()
    }

    /// Stored brightness level, or the default level when nothing valid is
    /// stored
    pub fn read_brightness_level(&mut self) -> BrightnessLevel {
        self.load()
            .ok()
            .and_then(|record| record.level())
            .unwrap_or_default()
    }

    /// Erase the page and write a fresh record
    pub fn save(&mut self, mode: Mode, level: BrightnessLevel) -> Result<(), StorageError> {
        let bytes = SettingsRecord::new(mode, level).encode();

        #[allow(clippy::cast_possible_truncation)]
        let page_end = self.offset + F::ERASE_SIZE as u32;
        self.flash
            .erase(self.offset, page_end)
            .map_err(|_| StorageError::Driver)?;
        self.flash
            .write(self.offset, &bytes)
            .map_err(|_| StorageError::Driver)?;

        #[cfg(feature = "esp32-log")]
        println!(
            "[SettingsStore.save] saved mode={} level={}",
            mode.as_str(),
            level.index()
        );
        Ok(())
    }

    pub fn flash(&self) -> &F {
        &self.flash
    }

    pub fn flash_mut(&mut self) -> &mut F {
        &mut self.flash
    }
}
