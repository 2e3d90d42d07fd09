//! Persisted user settings: mode and brightness level, selected with a
//! single push-button.

mod button;
mod controller;
mod record;
mod store;

pub use button::{DEBOUNCE, LONG_PRESS, Press, PressDetector, SHORT_PRESS};
pub use controller::{SAVE_DELAY, SettingsController};
pub use record::{MAGIC, RECORD_SIZE, SettingsRecord, StorageError};
pub use store::SettingsStore;
