//! Channel reader
//!
//! Binds the two logical channels to ADC inputs and reads them in order.

use cadence_hal::AdcReader;

use super::offset::RawSample;

/// Number of logical channels
pub const CHANNEL_COUNT: usize = 2;

/// Logical channel identity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    One,
    Two,
}

impl Channel {
    /// All channels in acquisition (and wire) order
    pub const ALL: [Channel; CHANNEL_COUNT] = [Channel::One, Channel::Two];

    /// Zero-based index
    pub const fn index(self) -> usize {
        match self {
            Channel::One => 0,
            Channel::Two => 1,
        }
    }
}

/// Raw readings taken at one sampling instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawPair {
    pub ch1: RawSample,
    pub ch2: RawSample,
}

/// Reads both channels from a shared ADC
pub struct ChannelReader<A> {
    adc: A,
    inputs: [u8; CHANNEL_COUNT],
}

impl<A: AdcReader> ChannelReader<A> {
    /// Create a reader with `inputs[i]` bound to channel `i`
    pub fn new(adc: A, inputs: [u8; CHANNEL_COUNT]) -> Self {
        Self { adc, inputs }
    }

    /// ADC input bound to `channel`
    pub fn input(&self, channel: Channel) -> u8 {
        self.inputs[channel.index()]
    }

    /// Run one conversion for `channel`
    pub fn read_raw(&mut self, channel: Channel) -> RawSample {
        self.adc.read(self.input(channel))
    }

    /// Read channel 1, then channel 2
    pub fn read_pair(&mut self) -> RawPair {
        let [ch1, ch2] = Channel::ALL.map(|channel| self.read_raw(channel));
        RawPair { ch1, ch2 }
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use cadence_hal::{AdcReader, AdcResolution};

    /// ADC returning a fixed value per input and logging the read order
    pub struct ScriptedAdc {
        pub values: [u16; 4],
        pub resolution: AdcResolution,
        pub reads: heapless::Vec<u8, 64>,
    }

    impl ScriptedAdc {
        pub fn new(values: [u16; 4]) -> Self {
            Self {
                values,
                resolution: AdcResolution::BITS_10,
                reads: heapless::Vec::new(),
            }
        }
    }

    impl AdcReader for ScriptedAdc {
        fn read(&mut self, input: u8) -> u16 {
            let _ = self.reads.push(input);
            self.values[input as usize]
        }

        fn resolution(&self) -> AdcResolution {
            self.resolution
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::ScriptedAdc;
    use super::*;

    #[test]
    fn test_channel_order() {
        assert_eq!(Channel::ALL[0], Channel::One);
        assert_eq!(Channel::ALL[1], Channel::Two);
        assert_eq!(Channel::Two.index(), 1);
    }

    #[test]
    fn test_reads_bound_inputs() {
        let mut adc = ScriptedAdc::new([11, 22, 33, 44]);
        let mut reader = ChannelReader::new(&mut adc, [2, 0]);

        assert_eq!(reader.read_raw(Channel::One), 33);
        assert_eq!(reader.read_raw(Channel::Two), 11);
        assert_eq!(reader.input(Channel::One), 2);
    }

    #[test]
    fn test_pair_reads_channel_one_first() {
        let mut adc = ScriptedAdc::new([500, 600, 0, 0]);
        let pair = ChannelReader::new(&mut adc, [0, 1]).read_pair();

        assert_eq!(pair, RawPair { ch1: 500, ch2: 600 });
        assert_eq!(adc.reads.as_slice(), &[0, 1]);
    }
}
