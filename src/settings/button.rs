//! Push-button press classification
//!
//! The button is sampled once per main-loop pass. A press is classified when
//! it is released, by how long it was held.

use embassy_time::{Duration, Instant};

/// Minimum time between two accepted press starts
pub const DEBOUNCE: Duration = Duration::from_millis(50);
/// Presses shorter than this are ignored
pub const SHORT_PRESS: Duration = Duration::from_millis(200);
pub const LONG_PRESS: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Press {
    /// Held between 200 ms and 1 s
    Short,
    /// Held at least 1 s
    Long,
}

#[derive(Debug, Clone, Default)]
pub struct PressDetector {
    /// Start of the press being held, if any
    pressed_at: Option<Instant>,
    last_accepted: Option<Instant>,
}

impl PressDetector {
    pub const fn new() -> Self {
        Self {
            pressed_at: None,
            last_accepted: None,
        }
    }

    pub const fn is_held(&self) -> bool {
        self.pressed_at.is_some()
    }

    /// Feed one sample of the button level.
    ///
    /// Returns the press classification on the release edge.
    pub fn poll(&mut self, pressed: bool, now: Instant) -> Option<Press> {
        match (pressed, self.pressed_at) {
            (true, None) => {
                let bouncing = self
                    .last_accepted
                    .and_then(|last| now.checked_duration_since(last))
                    .is_some_and(|since| since <= DEBOUNCE);
                if !bouncing {
                    self.pressed_at = Some(now);
                    self.last_accepted = Some(now);
                }
                None
            }
            (false, Some(start)) => {
                self.pressed_at = None;
                let held = now
                    .checked_duration_since(start)
                    .unwrap_or(Duration::from_ticks(0));
                if held >= LONG_PRESS {
                    Some(Press::Long)
                } else if held >= SHORT_PRESS {
                    Some(Press::Short)
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}
