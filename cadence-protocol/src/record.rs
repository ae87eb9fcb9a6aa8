//! Sample record encoding and parsing

use core::fmt::Write;

use heapless::String;

/// Longest possible encoded record: `-32768,-32768\r\n`
pub const MAX_RECORD_LEN: usize = 15;

/// Line terminator appended to every record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineEnding {
    /// Single line feed (`\n`)
    #[default]
    Lf,
    /// Carriage return + line feed (`\r\n`), as sent by Arduino `println`
    CrLf,
}

impl LineEnding {
    /// Terminator text
    pub const fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }

    /// Terminator length in bytes
    pub const fn width(&self) -> usize {
        match self {
            LineEnding::Lf => 1,
            LineEnding::CrLf => 2,
        }
    }
}

/// Errors from encoding a record into a caller buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EncodeError {
    /// Output buffer cannot hold the encoded line
    BufferTooSmall,
}

/// Errors from parsing a received line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Nothing to parse
    Empty,
    /// Line does not end with `\n` or `\r\n`
    MissingLineEnd,
    /// No `,` between the two values
    MissingSeparator,
    /// Value is not an optionally negative run of decimal digits
    InvalidInteger,
    /// Value does not fit a corrected sample
    OutOfRange,
}

/// One sampling instant: corrected channel 1 and channel 2 values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Record {
    /// Channel 1, raw reading minus bias
    pub ch1: i16,
    /// Channel 2, raw reading minus bias
    pub ch2: i16,
}

impl Record {
    /// Create a record from two corrected samples
    pub const fn new(ch1: i16, ch2: i16) -> Self {
        Self { ch1, ch2 }
    }

    /// Format the record as a complete line, terminator included
    pub fn to_line(&self, ending: LineEnding) -> String<MAX_RECORD_LEN> {
        let mut line = String::new();
        // MAX_RECORD_LEN covers the widest pair, so this cannot overflow
        let _ = write!(line, "{},{}{}", self.ch1, self.ch2, ending.as_str());
        line
    }

    /// Encode the record into `buf`
    ///
    /// Returns the number of bytes written.
    pub fn encode(&self, ending: LineEnding, buf: &mut [u8]) -> Result<usize, EncodeError> {
        let line = self.to_line(ending);
        let bytes = line.as_bytes();

        if buf.len() < bytes.len() {
            return Err(EncodeError::BufferTooSmall);
        }

        buf[..bytes.len()].copy_from_slice(bytes);
        Ok(bytes.len())
    }

    /// Parse one complete line, terminator included
    ///
    /// Accepts exactly the record grammar: no whitespace, no `+` sign,
    /// nothing after the terminator.
    pub fn parse(line: &str) -> Result<(Record, LineEnding), ParseError> {
        if line.is_empty() {
            return Err(ParseError::Empty);
        }

        let (body, ending) = if let Some(body) = line.strip_suffix("\r\n") {
            (body, LineEnding::CrLf)
        } else if let Some(body) = line.strip_suffix('\n') {
            (body, LineEnding::Lf)
        } else {
            return Err(ParseError::MissingLineEnd);
        };

        let (first, second) = body.split_once(',').ok_or(ParseError::MissingSeparator)?;

        Ok((Record::new(parse_value(first)?, parse_value(second)?), ending))
    }
}

/// Parse `["-"] DIGIT+` into a corrected sample
fn parse_value(text: &str) -> Result<i16, ParseError> {
    let digits = text.strip_prefix('-').unwrap_or(text);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidInteger);
    }

    text.parse::<i16>().map_err(|_| ParseError::OutOfRange)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_positive_pair() {
        let line = Record::new(193, 293).to_line(LineEnding::Lf);
        assert_eq!(line.as_str(), "193,293\n");
    }

    #[test]
    fn test_encode_negative_value() {
        let line = Record::new(-307, 716).to_line(LineEnding::Lf);
        assert_eq!(line.as_str(), "-307,716\n");
    }

    #[test]
    fn test_encode_crlf() {
        let line = Record::new(193, 293).to_line(LineEnding::CrLf);
        assert_eq!(line.as_str(), "193,293\r\n");
    }

    #[test]
    fn test_encode_into_buffer() {
        let mut buf = [0u8; 16];
        let len = Record::new(0, -1).encode(LineEnding::Lf, &mut buf).unwrap();

        assert_eq!(len, 5);
        assert_eq!(&buf[..len], b"0,-1\n");
    }

    #[test]
    fn test_widest_record_fits() {
        let mut buf = [0u8; MAX_RECORD_LEN];
        let len = Record::new(i16::MIN, i16::MIN)
            .encode(LineEnding::CrLf, &mut buf)
            .unwrap();

        assert_eq!(len, MAX_RECORD_LEN);
        assert_eq!(&buf[..], b"-32768,-32768\r\n");
    }

    #[test]
    fn test_buffer_too_small() {
        let mut buf = [0u8; 4];
        let result = Record::new(193, 293).encode(LineEnding::Lf, &mut buf);
        assert_eq!(result, Err(EncodeError::BufferTooSmall));
    }

    #[test]
    fn test_parse_valid_lines() {
        assert_eq!(
            Record::parse("193,293\n"),
            Ok((Record::new(193, 293), LineEnding::Lf))
        );
        assert_eq!(
            Record::parse("-307,716\r\n"),
            Ok((Record::new(-307, 716), LineEnding::CrLf))
        );
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(Record::parse(""), Err(ParseError::Empty));
        assert_eq!(Record::parse("1,2"), Err(ParseError::MissingLineEnd));
        assert_eq!(Record::parse("1,2\r"), Err(ParseError::MissingLineEnd));
        assert_eq!(Record::parse("\n"), Err(ParseError::MissingSeparator));
        assert_eq!(Record::parse("1;2\n"), Err(ParseError::MissingSeparator));
        assert_eq!(Record::parse("+1,2\n"), Err(ParseError::InvalidInteger));
        assert_eq!(Record::parse("1,,2\n"), Err(ParseError::InvalidInteger));
        assert_eq!(Record::parse("-,2\n"), Err(ParseError::InvalidInteger));
        assert_eq!(Record::parse(" 1,2\n"), Err(ParseError::InvalidInteger));
        assert_eq!(Record::parse("1,2,3\n"), Err(ParseError::InvalidInteger));
    }

    #[test]
    fn test_parse_out_of_range() {
        assert_eq!(Record::parse("32768,0\n"), Err(ParseError::OutOfRange));
        assert_eq!(
            Record::parse("-32768,32767\n"),
            Ok((Record::new(i16::MIN, i16::MAX), LineEnding::Lf))
        );
    }

    #[test]
    fn test_line_ending_width_matches_text() {
        for ending in [LineEnding::Lf, LineEnding::CrLf] {
            assert_eq!(ending.width(), ending.as_str().len());
        }
    }
}
