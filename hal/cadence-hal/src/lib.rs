//! Cadence Hardware Abstraction Layer
//!
//! This crate defines the hardware traits the sampler is written against.
//! Chip-specific HALs implement them, so the sampling logic in
//! `cadence-core` builds and tests on the host.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (cadence-firmware)         │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  cadence-core (sampler, scheduler)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  cadence-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ cadence-hal-  │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`clock::MicrosClock`] - Free-running microsecond counter
//! - [`adc::AdcReader`] - Blocking single conversions on numbered inputs
//! - [`uart::UartTx`] - Serial transmit

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod clock;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use adc::{AdcReader, AdcResolution};
pub use clock::{MicrosClock, Tick};
pub use uart::{UartConfig, UartTx};
