use thiserror::Error;

/// Failure reported by an encode or decode call.
///
/// Every call is fail-fast: the first violation aborts the call and is
/// returned as one of these variants. Offsets and indices are relative to the
/// view or text handed to the call.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// The requested byte range does not lie within the buffer.
    #[error("byte range {start}..{end} is out of bounds for a buffer of {capacity} bytes")]
    OutOfBounds {
        start: usize,
        end: usize,
        capacity: usize,
    },
    /// The destination view has no room for the next encoded sequence.
    #[error("buffer overflow: {needed} bytes needed after {written} of {capacity} were written")]
    Overflow {
        written: usize,
        needed: usize,
        capacity: usize,
    },
    /// A surrogate code unit that is not part of a high-then-low pair.
    #[error("unpaired surrogate 0x{unit:04X} at code unit {index}")]
    UnpairedSurrogate { index: usize, unit: u16 },
    /// The bytes under decode are not legal UTF-8.
    #[error("illegal UTF-8 at byte {offset}: {reason}")]
    IllegalUtf8 {
        offset: usize,
        reason: Utf8Violation,
    },
}

/// Why a byte sequence was rejected as UTF-8.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Utf8Violation {
    #[error("invalid lead byte 0x{0:02X}")]
    InvalidLeadByte(u8),
    #[error("truncated sequence: {needed} bytes needed, {available} available")]
    Truncated { needed: usize, available: usize },
    #[error("invalid continuation byte 0x{0:02X}")]
    InvalidContinuation(u8),
    #[error("overlong encoding")]
    Overlong,
    #[error("encoded surrogate code point")]
    EncodedSurrogate,
    #[error("code point above U+10FFFF")]
    OutOfRange,
}

impl CodecError {
    /// Byte or code unit position the error refers to, if any.
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        match *self {
            CodecError::OutOfBounds { .. } => None,
            CodecError::Overflow { written, .. } => Some(written),
            CodecError::UnpairedSurrogate { index, .. } => Some(index),
            CodecError::IllegalUtf8 { offset, .. } => Some(offset),
        }
    }
}
