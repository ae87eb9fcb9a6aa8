//! Tick arithmetic
//!
//! Ticks wrap at `u32::MAX` (about 71.6 minutes of microseconds). Two
//! ticks are compared by subtracting them in `u32` and reading the result
//! as `i32`, which stays correct across the wrap as long as the ticks are
//! less than 2^31 µs (about 35.8 minutes) apart.

use cadence_hal::Tick;

/// Microseconds in one second
pub const MICROS_PER_SECOND: u32 = 1_000_000;

/// Signed distance from `earlier` to `later` in microseconds
///
/// Positive when `later` is after `earlier`, even if the counter wrapped
/// in between.
#[inline]
pub const fn tick_delta(later: Tick, earlier: Tick) -> i32 {
    later.wrapping_sub(earlier) as i32
}

/// Has `now` reached or passed `target`?
#[inline]
pub const fn has_reached(now: Tick, target: Tick) -> bool {
    tick_delta(now, target) >= 0
}
