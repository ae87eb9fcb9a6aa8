//! ADC channel management
//!
//! RP2040 has a single 12-bit ADC with four external inputs:
//! - ADC0: GPIO26
//! - ADC1: GPIO27
//! - ADC2: GPIO28
//! - ADC3: GPIO29

use cadence_hal::{AdcReader, AdcResolution};
use embassy_rp::adc::{Adc, Blocking, Channel};

/// Number of external ADC inputs
pub const ADC_INPUT_COUNT: usize = 4;

/// Native conversion resolution
pub const NATIVE_RESOLUTION: AdcResolution = AdcResolution::BITS_12;

/// External ADC channel identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcChannel {
    /// ADC0 on GPIO26
    Adc0,
    /// ADC1 on GPIO27
    Adc1,
    /// ADC2 on GPIO28
    Adc2,
    /// ADC3 on GPIO29
    Adc3,
}

impl AdcChannel {
    /// Get the GPIO pin for this ADC channel
    pub fn gpio(&self) -> u8 {
        26 + self.index()
    }

    /// ADC input number (0-3)
    pub fn index(&self) -> u8 {
        match self {
            AdcChannel::Adc0 => 0,
            AdcChannel::Adc1 => 1,
            AdcChannel::Adc2 => 2,
            AdcChannel::Adc3 => 3,
        }
    }

    /// Get ADC channel from GPIO pin
    pub fn from_gpio(gpio: u8) -> Option<Self> {
        match gpio {
            26 => Some(AdcChannel::Adc0),
            27 => Some(AdcChannel::Adc1),
            28 => Some(AdcChannel::Adc2),
            29 => Some(AdcChannel::Adc3),
            _ => None,
        }
    }

    /// Get ADC channel from input number
    pub fn from_index(index: u8) -> Option<Self> {
        Self::from_gpio(index.checked_add(26)?)
    }
}

/// Blocking reader over all four external inputs
///
/// Conversions are rescaled from the native 12 bits to `resolution`. A
/// failed conversion reads as full scale, the same as a saturated input.
pub struct RpAdc<'d> {
    adc: Adc<'d, Blocking>,
    channels: [Channel<'d>; ADC_INPUT_COUNT],
    resolution: AdcResolution,
}

impl<'d> RpAdc<'d> {
    /// Create a reader; `channels[i]` must be the channel for ADC input `i`
    pub fn new(
        adc: Adc<'d, Blocking>,
        channels: [Channel<'d>; ADC_INPUT_COUNT],
        resolution: AdcResolution,
    ) -> Self {
        Self {
            adc,
            channels,
            resolution,
        }
    }
}

impl AdcReader for RpAdc<'_> {
    fn read(&mut self, input: u8) -> u16 {
        let Some(channel) = self.channels.get_mut(input as usize) else {
            #[cfg(feature = "defmt")]
            defmt::warn!("ADC input {} does not exist", input);
            return self.resolution.max();
        };

        match self.adc.blocking_read(channel) {
            Ok(raw) => self.resolution.rescale(raw, NATIVE_RESOLUTION),
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("ADC conversion failed on input {}: {:?}", input, _e);
                self.resolution.max()
            }
        }
    }

    fn resolution(&self) -> AdcResolution {
        self.resolution
    }
}
