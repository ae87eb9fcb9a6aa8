//! Configuration type definitions

use cadence_hal::AdcResolution;
use cadence_protocol::LineEnding;

use crate::acquisition::{SupplyVoltage, CHANNEL_COUNT};
use crate::time::MICROS_PER_SECOND;

/// Default sample rate per channel
pub const DEFAULT_SAMPLE_RATE_HZ: u32 = 1000;

/// Default settle time between interface setup and the first sample
pub const DEFAULT_STARTUP_DELAY_MS: u32 = 2000;

/// Default ADC inputs for channel 1 and channel 2
pub const DEFAULT_INPUTS: [u8; CHANNEL_COUNT] = [0, 1];

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Sample rate is zero
    ZeroSampleRate,
    /// Sample rate above one sample per microsecond
    SampleRateTooHigh,
    /// 1 000 000 is not a multiple of the sample rate, so the integer
    /// period would not produce the configured rate
    InexactPeriod,
    /// Bias is larger than the ADC can report
    BiasOutOfRange,
    /// Both channels bound to the same ADC input
    DuplicateInput,
    /// ADC reader resolution differs from the configured one
    ResolutionMismatch,
}

/// Sampler configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SamplerConfig {
    /// Samples per second, per channel
    pub sample_rate_hz: u32,
    /// Counts subtracted from every raw reading
    pub bias: u16,
    /// Resolution the raw readings are delivered in
    pub resolution: AdcResolution,
    /// ADC input for each channel, channel 1 first
    pub inputs: [u8; CHANNEL_COUNT],
    /// Terminator appended to every record
    pub line_ending: LineEnding,
    /// Delay between interface setup and the first sample (ms)
    pub startup_delay_ms: u32,
}

impl SamplerConfig {
    /// 1000 Hz, 5 V front end bias, 10-bit readings, inputs 0 and 1
    pub const DEFAULT: Self = Self {
        sample_rate_hz: DEFAULT_SAMPLE_RATE_HZ,
        bias: SupplyVoltage::FiveVolt.bias(),
        resolution: AdcResolution::BITS_10,
        inputs: DEFAULT_INPUTS,
        line_ending: LineEnding::Lf,
        startup_delay_ms: DEFAULT_STARTUP_DELAY_MS,
    };

    /// Check the configuration for values the sampler cannot honor
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_rate_hz == 0 {
            return Err(ConfigError::ZeroSampleRate);
        }

        if self.sample_rate_hz > MICROS_PER_SECOND {
            return Err(ConfigError::SampleRateTooHigh);
        }

        if MICROS_PER_SECOND % self.sample_rate_hz != 0 {
            return Err(ConfigError::InexactPeriod);
        }

        if self.bias > self.resolution.max() {
            return Err(ConfigError::BiasOutOfRange);
        }

        if self.inputs[0] == self.inputs[1] {
            return Err(ConfigError::DuplicateInput);
        }

        Ok(())
    }

    /// Sampling period in microseconds
    ///
    /// Only meaningful for a configuration that passed [`validate`](Self::validate).
    pub const fn period_us(&self) -> u32 {
        MICROS_PER_SECOND / self.sample_rate_hz
    }

    /// Longest line this configuration can produce, terminator included
    pub fn max_record_len(&self) -> usize {
        let lowest = -i32::from(self.bias);
        let highest = i32::from(self.resolution.max()) - i32::from(self.bias);
        let value_width = decimal_width(lowest).max(decimal_width(highest));

        2 * value_width + 1 + self.line_ending.width()
    }

    /// Worst-case serial throughput needed to keep up (bytes/s)
    pub fn max_bytes_per_second(&self) -> u32 {
        self.sample_rate_hz.saturating_mul(self.max_record_len() as u32)
    }
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Characters needed to print `value` in decimal, sign included
fn decimal_width(value: i32) -> usize {
    let sign = usize::from(value < 0);
    let mut magnitude = value.unsigned_abs();
    let mut digits = 1;
    while magnitude >= 10 {
        magnitude /= 10;
        digits += 1;
    }
    sign + digits
}
