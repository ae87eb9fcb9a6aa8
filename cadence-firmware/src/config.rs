//! Compile-time configuration
//!
//! `sampler.toml` is validated by build.rs and turned into the constants
//! below. Changing a setting means editing the file and reflashing.

use cadence_core::config::SamplerConfig;
use cadence_hal_rp2040::{AdcResolution, UartConfig};
use cadence_protocol::LineEnding;

include!(concat!(env!("OUT_DIR"), "/sampler_config.rs"));
