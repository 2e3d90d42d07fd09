//! WS2812B wire protocol: pulse timing, bitstream encoding and transmission.

mod driver;
mod encoder;
mod timing;

pub use driver::{DEFAULT_TRANSFER_TIMEOUT, PwmDma, TransferFlag, TransmitError, Ws2812Driver};
pub use encoder::{
    BITS_PER_LED, PulseBuffer, RESET_LEN, RESET_PULSE, decode, encode, pulse_buffer_len,
};
pub use timing::{
    BIT_PERIOD_NS, DEFAULT_TIMER_CLOCK_HZ, ONE_HIGH_NS, PulseTiming, ZERO_HIGH_NS,
};
