//! Inter-task communication
//!
//! The sampler task never waits on anything but its own deadline, so the
//! only shared state is a latest-value signal it publishes into.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use cadence_core::sampler::SamplerStats;

/// Sampler statistics snapshot (published about once per second)
pub static SAMPLER_STATS: Signal<CriticalSectionRawMutex, SamplerStats> = Signal::new();
