//! Microsecond clock abstraction

/// Microseconds since boot, wrapping at `u32::MAX`
///
/// A tick carries no "wrapped" flag. Compare ticks with wrapping
/// subtraction, never with `<` or `>=` on the raw values.
pub type Tick = u32;

/// Free-running monotonic microsecond counter
///
/// Reading the clock has no side effects and cannot fail.
pub trait MicrosClock {
    /// Current tick
    ///
    /// Takes `&mut self` so implementations backed by a peripheral
    /// register (or a test script) don't need interior mutability.
    fn now_micros(&mut self) -> Tick;
}

impl<C: MicrosClock + ?Sized> MicrosClock for &mut C {
    fn now_micros(&mut self) -> Tick {
        (**self).now_micros()
    }
}
