//! UART serial communication abstractions
//!
//! The sampler only transmits, so there is no receive side here.

/// UART transmitter
pub trait UartTx {
    /// Error type for transmit operations
    type Error;

    /// Write data to the UART
    ///
    /// Blocks until all data has been accepted by the transmitter or an
    /// error occurs.
    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error>;
}

impl<T: UartTx + ?Sized> UartTx for &mut T {
    type Error = T::Error;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        (**self).write_blocking(data)
    }
}

/// UART configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UartConfig {
    /// Baud rate in bits per second
    pub baudrate: u32,
    /// Number of data bits (typically 8)
    pub data_bits: DataBits,
    /// Parity mode
    pub parity: Parity,
    /// Number of stop bits
    pub stop_bits: StopBits,
}

impl UartConfig {
    /// 115200 baud, 8-N-1
    pub const DEFAULT: Self = Self {
        baudrate: 115_200,
        data_bits: DataBits::Eight,
        parity: Parity::None,
        stop_bits: StopBits::One,
    };

    /// Bits on the wire per transmitted byte (start + data + parity + stop)
    pub const fn bits_per_frame(&self) -> u32 {
        let data = match self.data_bits {
            DataBits::Seven => 7,
            DataBits::Eight => 8,
        };
        let parity = match self.parity {
            Parity::None => 0,
            Parity::Even | Parity::Odd => 1,
        };
        let stop = match self.stop_bits {
            StopBits::One => 1,
            StopBits::Two => 2,
        };
        1 + data + parity + stop
    }

    /// Bytes per second the line can carry
    pub const fn bytes_per_second(&self) -> u32 {
        self.baudrate / self.bits_per_frame()
    }
}

impl Default for UartConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Number of data bits per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataBits {
    Seven,
    Eight,
}

/// Parity mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Parity {
    None,
    Even,
    Odd,
}

/// Number of stop bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StopBits {
    One,
    Two,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_115200_8n1() {
        let config = UartConfig::default();
        assert_eq!(config.baudrate, 115_200);
        assert_eq!(config.data_bits, DataBits::Eight);
        assert_eq!(config.parity, Parity::None);
        assert_eq!(config.stop_bits, StopBits::One);
    }

    #[test]
    fn test_line_throughput() {
        // 8-N-1 is 10 bits per byte on the wire
        let config = UartConfig::DEFAULT;
        assert_eq!(config.bits_per_frame(), 10);
        assert_eq!(config.bytes_per_second(), 11_520);

        let config = UartConfig {
            parity: Parity::Even,
            stop_bits: StopBits::Two,
            ..UartConfig::DEFAULT
        };
        assert_eq!(config.bits_per_frame(), 12);
    }
}
