//! Board-agnostic core logic for the sampler firmware
//!
//! This crate contains everything that does not depend on a specific
//! chip:
//!
//! - Wraparound-safe tick arithmetic
//! - Additive deadline scheduler
//! - Channel reader and offset corrector
//! - Line writer and the sampler that composes them
//! - Configuration types and validation

#![no_std]
#![deny(unsafe_code)]

pub mod acquisition;
pub mod config;
pub mod sampler;
pub mod scheduler;
pub mod time;

pub use cadence_hal::Tick;
