//! Signal acquisition
//!
//! Reads the two analog channels and re-centers them around zero.

pub mod channel;
pub mod offset;

pub use channel::{Channel, ChannelReader, RawPair, CHANNEL_COUNT};
pub use offset::{correct, CorrectedSample, RawSample, SupplyVoltage, BIAS_3V3, BIAS_5V};
