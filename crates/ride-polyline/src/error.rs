//! Decoder error type.

use thiserror::Error;

/// Errors produced while decoding an encoded polyline.
///
/// Offsets are byte positions in the input string.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    /// The input ended mid-value (continuation bit still set) or after a
    /// latitude without its longitude.
    #[error("polyline truncated at byte {offset}")]
    Truncated { offset: usize },

    #[error("byte {byte:#04x} at offset {offset} is outside the polyline alphabet")]
    InvalidByte { offset: usize, byte: u8 },

    /// More 5-bit groups than any 32-bit value needs.
    #[error("value starting before byte {offset} overflows 32 bits")]
    Overflow { offset: usize },

    #[error("point {index} ({lat}, {lon}) is outside the valid lat/lon range")]
    OutOfRange { index: usize, lat: f64, lon: f64 },
}

pub type DecodeResult<T> = Result<T, DecodeError>;
