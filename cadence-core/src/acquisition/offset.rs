//! Offset correction
//!
//! The EMG front ends output a unipolar signal sitting on a ~1.5 V
//! reference. Subtracting that reference, expressed in ADC counts, turns
//! the reading into a signed value centered on zero. The bias is a fixed
//! per-supply constant; it is not measured at runtime.

/// Raw ADC reading in `[0, ADC_MAX]`
pub type RawSample = u16;

/// Raw reading minus bias
pub type CorrectedSample = i16;

/// 1.5 V in 10-bit counts with a 5 V reference (1.5 / 5.0 × 1023)
pub const BIAS_5V: u16 = 307;

/// 1.5 V in 10-bit counts with a 3.3 V reference (1.5 / 3.3 × 1023)
pub const BIAS_3V3: u16 = 465;

/// Supply voltage of the analog front end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SupplyVoltage {
    /// 5 V supply
    #[default]
    FiveVolt,
    /// 3.3 V supply
    ThreeVoltThree,
}

impl SupplyVoltage {
    /// Bias constant for this supply, in 10-bit counts
    pub const fn bias(&self) -> u16 {
        match self {
            SupplyVoltage::FiveVolt => BIAS_5V,
            SupplyVoltage::ThreeVoltThree => BIAS_3V3,
        }
    }
}

/// Subtract `bias` from a raw reading
///
/// Pure and total. Readings inside the ADC range never come near the
/// `i16` limits; anything outside saturates instead of wrapping.
#[inline]
pub fn correct(raw: RawSample, bias: u16) -> CorrectedSample {
    let centered = i32::from(raw) - i32::from(bias);
    centered.clamp(i32::from(i16::MIN), i32::from(i16::MAX)) as i16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_midpoint_at_supply_reference() {
        // 1.5 V in 10-bit counts, ADC referenced to the supply itself
        let counts = |reference_mv: u32| ((1500 * 1023 + reference_mv / 2) / reference_mv) as u16;
        assert_eq!(BIAS_5V, counts(5000));
        assert_eq!(BIAS_3V3, counts(3300));
        assert_eq!(SupplyVoltage::default().bias(), counts(5000));
    }

    #[test]
    fn test_correct_centers_reading() {
        assert_eq!(correct(500, BIAS_5V), 193);
        assert_eq!(correct(600, BIAS_5V), 293);
        assert_eq!(correct(307, BIAS_5V), 0);
    }

    #[test]
    fn test_correct_at_rails() {
        assert_eq!(correct(0, BIAS_5V), -307);
        assert_eq!(correct(1023, BIAS_5V), 716);
        assert_eq!(correct(0, BIAS_3V3), -465);
        assert_eq!(correct(1023, BIAS_3V3), 558);
    }

    #[test]
    fn test_correct_saturates() {
        assert_eq!(correct(u16::MAX, 0), i16::MAX);
    }

    #[test]
    fn test_supply_bias() {
        assert_eq!(SupplyVoltage::FiveVolt.bias(), 307);
        assert_eq!(SupplyVoltage::ThreeVoltThree.bias(), 465);
        assert_eq!(SupplyVoltage::default(), SupplyVoltage::FiveVolt);
    }
}
