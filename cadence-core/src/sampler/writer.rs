//! Line encoder/writer

use cadence_hal::UartTx;
use cadence_protocol::{LineEnding, Record};

/// Writes one text line per record to a UART
pub struct LineWriter<T> {
    tx: T,
    ending: LineEnding,
}

impl<T: UartTx> LineWriter<T> {
    /// Create a writer terminating every line with `ending`
    pub fn new(tx: T, ending: LineEnding) -> Self {
        Self { tx, ending }
    }

    /// Format `<ch1>,<ch2>` plus terminator and send it
    ///
    /// Blocks until the transmitter has taken the whole line.
    pub fn emit(&mut self, record: &Record) -> Result<(), T::Error> {
        let line = record.to_line(self.ending);
        self.tx.write_blocking(line.as_bytes())
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use cadence_hal::UartTx;

    /// UART capturing everything written, optionally failing every write
    pub struct CaptureTx {
        pub bytes: heapless::Vec<u8, 4096>,
        pub fail: bool,
    }

    impl CaptureTx {
        pub fn new() -> Self {
            Self {
                bytes: heapless::Vec::new(),
                fail: false,
            }
        }

        pub fn text(&self) -> &str {
            core::str::from_utf8(&self.bytes).unwrap()
        }
    }

    impl UartTx for CaptureTx {
        type Error = ();

        fn write_blocking(&mut self, data: &[u8]) -> Result<(), ()> {
            if self.fail {
                return Err(());
            }
            self.bytes.extend_from_slice(data)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::CaptureTx;
    use super::*;

    #[test]
    fn test_emit_writes_one_line() {
        let mut tx = CaptureTx::new();
        let mut writer = LineWriter::new(&mut tx, LineEnding::Lf);

        writer.emit(&Record::new(193, 293)).unwrap();
        writer.emit(&Record::new(-307, 716)).unwrap();

        assert_eq!(tx.text(), "193,293\n-307,716\n");
    }

    #[test]
    fn test_emit_crlf() {
        let mut tx = CaptureTx::new();
        LineWriter::new(&mut tx, LineEnding::CrLf)
            .emit(&Record::new(1, -1))
            .unwrap();

        assert_eq!(tx.text(), "1,-1\r\n");
    }

    #[test]
    fn test_emit_reports_transport_error() {
        let mut tx = CaptureTx::new();
        tx.fail = true;

        let result = LineWriter::new(&mut tx, LineEnding::Lf).emit(&Record::new(0, 0));
        assert_eq!(result, Err(()));
        assert!(tx.bytes.is_empty());
    }
}
