//! Configuration types
//!
//! Everything here is fixed at build time. The firmware generates a
//! `const` [`SamplerConfig`] from its TOML file and checks it again with
//! [`SamplerConfig::validate`] at startup.

pub mod types;

pub use types::*;
