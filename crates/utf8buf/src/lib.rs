//! A strict codec between UTF-16 code units and UTF-8 bytes held in fixed,
//! caller-owned buffers.
//!
//! Encoding writes straight into a byte window and reports how many bytes it
//! wrote; decoding validates a byte window and reassembles the code units.
//! Neither direction allocates a buffer for the caller, frames its output, or
//! keeps state between calls.
//!
//! ```rust
//! use utf8buf::{decode, encode, Utf16String};
//!
//! let text = Utf16String::from("A€😀");
//! let mut buf = [0u8; 16];
//! let n = encode(&mut buf, 0, text.as_units())?;
//! assert_eq!(&buf[..n], "A€😀".as_bytes());
//! assert_eq!(decode(&buf, ..n)?, text);
//! # Ok::<(), utf8buf::CodecError>(())
//! ```

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod buffer;
mod code_point;
mod decoder;
mod encoder;
mod error;
mod options;
mod text;
mod view;

#[cfg(test)]
mod tests;

use core::ops::RangeBounds;

pub use buffer::ByteBuffer;
pub use decoder::Decoder;
pub use encoder::Encoder;
pub use error::{CodecError, Utf8Violation};
pub use options::{CodecOptions, SurrogateMode};
pub use text::{CodePoints, Utf16String};
pub use view::{ByteView, ByteViewMut};

/// Encodes `text` into `buffer[start..]` with default options.
///
/// Returns the number of bytes written. Pass `start = 0` to write from the
/// beginning of the buffer.
///
/// # Errors
///
/// - [`CodecError::OutOfBounds`] if `start > buffer.len()`.
/// - [`CodecError::UnpairedSurrogate`] for a lone surrogate.
/// - [`CodecError::Overflow`] if the encoded text does not fit.
pub fn encode(buffer: &mut [u8], start: usize, text: &[u16]) -> Result<usize, CodecError> {
    Encoder::default().encode(&mut ByteViewMut::new(buffer, start..)?, text)
}

/// Decodes `buffer[range]` with default options.
///
/// Pass `..` to decode the whole buffer.
///
/// # Errors
///
/// - [`CodecError::OutOfBounds`] if `range` does not lie within `buffer`.
/// - [`CodecError::IllegalUtf8`] if the bytes are not legal UTF-8.
pub fn decode(buffer: &[u8], range: impl RangeBounds<usize>) -> Result<Utf16String, CodecError> {
    Decoder::default().decode(&ByteView::new(buffer, range)?)
}

/// Number of bytes [`encode`] would write for `text`.
///
/// # Errors
///
/// [`CodecError::UnpairedSurrogate`] for a lone surrogate.
pub fn encoded_len(text: &[u16]) -> Result<usize, CodecError> {
    Encoder::default().encoded_len(text)
}
