//! On-flash settings record
//!
//! Layout (little-endian, 20 bytes):
//!
//! | offset | size | field                         |
//! |--------|------|-------------------------------|
//! | 0      | 4    | magic `0xDEADBEEF`            |
//! | 4      | 4    | mode                          |
//! | 8      | 1    | brightness level              |
//! | 9      | 6    | reserved, zero                |
//! | 15     | 1    | padding, zero                 |
//! | 16     | 4    | XOR of the four words above   |

use crate::brightness::BrightnessLevel;
use crate::effect::Mode;

pub const RECORD_SIZE: usize = 20;
pub const MAGIC: u32 = 0xDEAD_BEEF;

const CHECKED_WORDS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageError {
    /// The flash driver reported a failure
    Driver,
    /// No record has been written here
    InvalidMagic,
    /// The record is torn or corrupted
    InvalidChecksum,
}

impl core::fmt::Display for StorageError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Driver => write!(f, "flash driver error"),
            Self::InvalidMagic => write!(f, "no settings record"),
            Self::InvalidChecksum => write!(f, "settings checksum mismatch"),
        }
    }
}

impl core::error::Error for StorageError {}

/// Raw persisted settings.
///
/// Fields are kept raw so that mode and level can be validated separately:
/// a good level is still used when the stored mode is out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsRecord {
    pub mode: u32,
    pub level: u8,
}

impl SettingsRecord {
    pub fn new(mode: Mode, level: BrightnessLevel) -> Self {
        Self {
            mode: u32::from(mode.as_raw()),
            level: level.index(),
        }
    }

    /// Stored mode, if it names a known effect
    pub fn mode(&self) -> Option<Mode> {
        u8::try_from(self.mode).ok().and_then(Mode::from_raw)
    }

    /// Stored brightness level, if it is in range
    pub const fn level(&self) -> Option<BrightnessLevel> {
        BrightnessLevel::from_raw(self.level)
    }

    pub fn encode(&self) -> [u8; RECORD_SIZE] {
        let mut bytes = [0u8; RECORD_SIZE];
        bytes[0..4].copy_from_slice(&MAGIC.to_le_bytes());
        bytes[4..8].copy_from_slice(&self.mode.to_le_bytes());
        bytes[8] = self.level;

        let checksum = checksum(&bytes);
        bytes[16..20].copy_from_slice(&checksum.to_le_bytes());
        bytes
    }

    pub fn decode(bytes: &[u8; RECORD_SIZE]) -> Result<Self, StorageError> {
        if word(bytes, 0) != MAGIC {
            return Err(StorageError::InvalidMagic);
        }
        if word(bytes, 4) != checksum(bytes) {
            return Err(StorageError::InvalidChecksum);
        }

        Ok(Self {
            mode: word(bytes, 1),
            level: bytes[8],
        })
    }
}

fn word(bytes: &[u8; RECORD_SIZE], index: usize) -> u32 {
    let start = index * 4;
    u32::from_le_bytes([
        bytes[start],
        bytes[start + 1],
        bytes[start + 2],
        bytes[start + 3],
    ])
}

fn checksum(bytes: &[u8; RECORD_SIZE]) -> u32 {
    (0..CHECKED_WORDS).fold(0, |acc, index| acc ^ word(bytes, index))
}
