//! RP2040-specific HAL for the sampler firmware
//!
//! This crate provides RP2040 implementations of the shared
//! `cadence-hal` traits:
//!
//! - ADC channel mapping and a blocking multi-input reader
//!   (implements `cadence_hal::AdcReader`)
//! - Microsecond clock on the embassy time driver
//!   (implements `cadence_hal::MicrosClock`)
//! - UART pin mapping and a blocking transmitter
//!   (implements `cadence_hal::UartTx`)

#![no_std]

pub mod adc;
pub mod clock;
pub mod uart;

// Re-export shared traits from cadence-hal for convenience
pub use cadence_hal::{AdcReader, AdcResolution, MicrosClock, UartConfig, UartTx};
