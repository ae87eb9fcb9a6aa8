//! UART transmit support
//!
//! The sampler only transmits, on a blocking embassy-rp `UartTx`.

use cadence_hal::uart::{DataBits, Parity, StopBits};
use cadence_hal::{UartConfig, UartTx};
use embassy_rp::uart::{self, Blocking};

/// Error from UART operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UartError {
    /// Framing error
    Framing,
    /// Parity error
    Parity,
    /// Overrun error
    Overrun,
    /// Break condition
    Break,
    /// Other error
    Other,
}

impl From<uart::Error> for UartError {
    fn from(e: uart::Error) -> Self {
        match e {
            uart::Error::Framing => UartError::Framing,
            uart::Error::Parity => UartError::Parity,
            uart::Error::Overrun => UartError::Overrun,
            uart::Error::Break => UartError::Break,
            #[allow(unreachable_patterns)]
            _ => UartError::Other,
        }
    }
}

/// Convert the board-agnostic UART settings into embassy-rp's
pub fn embassy_config(config: &UartConfig) -> uart::Config {
    let mut cfg = uart::Config::default();
    cfg.baudrate = config.baudrate;
    cfg.data_bits = match config.data_bits {
        DataBits::Seven => uart::DataBits::DataBits7,
        DataBits::Eight => uart::DataBits::DataBits8,
    };
    cfg.parity = match config.parity {
        Parity::None => uart::Parity::ParityNone,
        Parity::Even => uart::Parity::ParityEven,
        Parity::Odd => uart::Parity::ParityOdd,
    };
    cfg.stop_bits = match config.stop_bits {
        StopBits::One => uart::StopBits::STOP1,
        StopBits::Two => uart::StopBits::STOP2,
    };
    cfg
}

/// Blocking serial transmitter
pub struct RpSerial<'d> {
    tx: uart::UartTx<'d, Blocking>,
}

impl<'d> RpSerial<'d> {
    pub fn new(tx: uart::UartTx<'d, Blocking>) -> Self {
        Self { tx }
    }
}

impl UartTx for RpSerial<'_> {
    type Error = UartError;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.tx.blocking_write(data).map_err(UartError::from)
    }
}
