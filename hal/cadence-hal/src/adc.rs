//! Analog-to-digital converter abstraction
//!
//! The sampler only needs "give me a number in `[0, ADC_MAX]` for this
//! input". There is no error path: a failed or saturated conversion
//! shows up as a pinned value.

/// ADC output resolution in bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AdcResolution {
    bits: u8,
}

impl AdcResolution {
    /// 10-bit converter (0-1023), the resolution the bias constants assume
    pub const BITS_10: Self = Self { bits: 10 };

    /// 12-bit converter (0-4095), native RP2040 resolution
    pub const BITS_12: Self = Self { bits: 12 };

    /// Smallest resolution the sampler accepts
    pub const MIN_BITS: u8 = 8;

    /// Largest resolution the sampler accepts
    ///
    /// Corrected samples are `i16`, so anything wider could overflow.
    pub const MAX_BITS: u8 = 12;

    /// Create a resolution from a bit count
    ///
    /// Returns `None` outside `MIN_BITS..=MAX_BITS`.
    pub const fn from_bits(bits: u8) -> Option<Self> {
        if bits >= Self::MIN_BITS && bits <= Self::MAX_BITS {
            Some(Self { bits })
        } else {
            None
        }
    }

    /// Number of bits
    pub const fn bits(&self) -> u8 {
        self.bits
    }

    /// Largest value a conversion can return (`ADC_MAX`)
    pub const fn max(&self) -> u16 {
        (1u16 << self.bits) - 1
    }

    /// Convert a reading taken at resolution `from` to this resolution
    ///
    /// Narrowing drops the low bits. Widening shifts left, so full scale
    /// maps to slightly below full scale. The result never exceeds
    /// [`max`](Self::max).
    pub const fn rescale(&self, value: u16, from: AdcResolution) -> u16 {
        let scaled = if from.bits > self.bits {
            value >> (from.bits - self.bits)
        } else {
            value << (self.bits - from.bits)
        };
        if scaled > self.max() {
            self.max()
        } else {
            scaled
        }
    }
}

impl Default for AdcResolution {
    fn default() -> Self {
        Self::BITS_10
    }
}

/// Blocking ADC reader over numbered analog inputs
///
/// One converter is usually multiplexed across several pins, so the
/// reader takes the input number per call instead of owning one pin.
pub trait AdcReader {
    /// Run one conversion on `input` and return the result
    ///
    /// Blocks for the conversion time. The value is in
    /// `[0, self.resolution().max()]`.
    fn read(&mut self, input: u8) -> u16;

    /// Resolution of the values returned by [`read`](Self::read)
    fn resolution(&self) -> AdcResolution;
}

impl<A: AdcReader + ?Sized> AdcReader for &mut A {
    fn read(&mut self, input: u8) -> u16 {
        (**self).read(input)
    }

    fn resolution(&self) -> AdcResolution {
        (**self).resolution()
    }
}
