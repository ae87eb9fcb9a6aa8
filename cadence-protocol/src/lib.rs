//! Cadence Serial Record Format
//!
//! This crate defines the text protocol between the sampler and whatever
//! is listening on the host side of the UART. Every sampling instant
//! produces exactly one line:
//!
//! ```text
//! record  := INTEGER "," INTEGER LINEEND
//! INTEGER := ["-"] DIGIT+
//! LINEEND := "\n" | "\r\n"
//! ```
//!
//! The integers are the bias-corrected readings of channel 1 and channel 2,
//! in that order. There is no header, framing byte or checksum; a host
//! that joins mid-stream resynchronizes on the next line ending.

#![no_std]
#![deny(unsafe_code)]

pub mod record;

pub use record::{EncodeError, LineEnding, ParseError, Record, MAX_RECORD_LEN};
