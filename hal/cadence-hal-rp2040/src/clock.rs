//! Microsecond clock on the embassy time driver
//!
//! The RP2040 timer counts microseconds in 64 bits. The sampler works in
//! wrapping 32-bit ticks, so the value is truncated and rolls over about
//! every 71.6 minutes.

use cadence_hal::{MicrosClock, Tick};
use embassy_time::Instant;

/// Clock backed by `embassy_time::Instant`
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl EmbassyClock {
    pub const fn new() -> Self {
        Self
    }
}

impl MicrosClock for EmbassyClock {
    fn now_micros(&mut self) -> Tick {
        Instant::now().as_micros() as Tick
    }
}
