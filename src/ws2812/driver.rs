//! PWM + DMA transmission driver
//!
//! One timer channel runs freely at the bit period while a DMA stream feeds
//! it a new compare value per bit. The CPU only starts the stream and then
//! waits for the pulse-finished interrupt to raise [`TransferFlag`].

use core::cell::Cell;

use critical_section::Mutex;
use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::OutputDriver;

/// Deadlock guard for a missed completion interrupt
pub const DEFAULT_TRANSFER_TIMEOUT: Duration = Duration::from_millis(100);

/// Transfer-complete flag shared with the DMA interrupt.
///
/// This is the only state that crosses from interrupt context into the main
/// loop. The interrupt only ever calls [`TransferFlag::signal`]; the driver
/// clears it after halting the previous transfer, starts the next one and
/// then polls it.
pub struct TransferFlag {
    complete: Mutex<Cell<bool>>,
}

impl TransferFlag {
    pub const fn new() -> Self {
        Self {
            complete: Mutex::new(Cell::new(false)),
        }
    }

    /// Mark the transfer finished. Call from the pulse-finished callback.
    pub fn signal(&self) {
        critical_section::with(|cs| self.complete.borrow(cs).set(true));
    }

    pub fn clear(&self) {
        critical_section::with(|cs| self.complete.borrow(cs).set(false));
    }

    pub fn is_complete(&self) -> bool {
        critical_section::with(|cs| self.complete.borrow(cs).get())
    }
}

impl Default for TransferFlag {
    fn default() -> Self {
        Self::new()
    }
}

/// Timer channel with a DMA stream feeding its compare register
pub trait PwmDma {
    type Error: core::fmt::Debug;

    /// Halt the timer output and the DMA stream. Must be safe to call when
    /// nothing is running.
    fn stop(&mut self);

    /// Start streaming `pulses` into the compare register, one per period
    fn start(&mut self, pulses: &[u16]) -> Result<(), Self::Error>;
}

/// Failure of a single transmission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransmitError<E> {
    /// The hardware refused to start; LEDs keep their previous frame
    Start(E),
    /// No completion signal within the timeout; the transfer was halted
    Timeout,
}

impl<E: core::fmt::Debug> core::fmt::Display for TransmitError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Start(e) => write!(f, "transfer start failed: {e:?}"),
            Self::Timeout => write!(f, "transfer completion timed out"),
        }
    }
}

impl<E: core::fmt::Debug> core::error::Error for TransmitError<E> {}

/// WS2812B driver over a [`PwmDma`] channel
pub struct Ws2812Driver<'a, H: PwmDma> {
    hardware: H,
    flag: &'a TransferFlag,
    timeout: Duration,
}

impl<'a, H: PwmDma> Ws2812Driver<'a, H> {
    /// Create a driver with the default 100 ms timeout
    pub fn new(hardware: H, flag: &'a TransferFlag) -> Self {
        Self {
            hardware,
            flag,
            timeout: DEFAULT_TRANSFER_TIMEOUT,
        }
    }

    /// Set the completion timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Send `pulses` and block until the transfer completes or times out.
    ///
    /// Any previous transfer is halted first so two streams never overlap.
    pub fn transmit(&mut self, pulses: &[u16]) -> Result<(), TransmitError<H::Error>> {
        // Halting may itself fire the completion callback, so clear after.
        self.hardware.stop();
        self.flag.clear();

        self.hardware.start(pulses).map_err(TransmitError::Start)?;

        let deadline = Instant::now() + self.timeout;
        while !self.flag.is_complete() {
            if Instant::now() >= deadline {
                // Leave the line idle rather than let a stray stream run on.
                self.hardware.stop();
                #[cfg(feature = "esp32-log")]
                println!("[Ws2812Driver.transmit] completion timed out");
                return Err(TransmitError::Timeout);
            }
            core::hint::spin_loop();
        }

        Ok(())
    }

    pub fn hardware(&self) -> &H {
        &self.hardware
    }

    pub fn hardware_mut(&mut self) -> &mut H {
        &mut self.hardware
    }
}

impl<H: PwmDma> OutputDriver for Ws2812Driver<'_, H> {
    type Error = TransmitError<H::Error>;

    fn write(&mut self, pulses: &[u16]) -> Result<(), Self::Error> {
        self.transmit(pulses)
    }
}
