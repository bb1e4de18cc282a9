use alloc::{boxed::Box, vec, vec::Vec};
use core::{fmt, ops::RangeBounds};

use bstr::BStr;

use crate::{
    decoder::Decoder,
    encoder::Encoder,
    error::CodecError,
    text::Utf16String,
    view::{ByteView, ByteViewMut},
};

/// Fixed-capacity, zero-initialised byte storage.
///
/// The capacity never changes after construction; encoding into it fails with
/// [`CodecError::Overflow`] rather than growing it.
#[derive(Clone, PartialEq, Eq)]
pub struct ByteBuffer {
    data: Box<[u8]>,
}

impl ByteBuffer {
    /// Allocates `capacity` zero bytes.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            data: vec![0; capacity].into_boxed_slice(),
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    #[must_use]
    pub fn into_inner(self) -> Box<[u8]> {
        self.data
    }

    /// Read-only view of `range`.
    ///
    /// # Errors
    ///
    /// [`CodecError::OutOfBounds`] if `range` exceeds the capacity.
    pub fn view(&self, range: impl RangeBounds<usize>) -> Result<ByteView<'_>, CodecError> {
        ByteView::new(&self.data, range)
    }

    /// Writable view of `range`.
    ///
    /// # Errors
    ///
    /// [`CodecError::OutOfBounds`] if `range` exceeds the capacity.
    pub fn view_mut(&mut self, range: impl RangeBounds<usize>) -> Result<ByteViewMut<'_>, CodecError> {
        ByteViewMut::new(&mut self.data, range)
    }

    /// Encodes `text` starting at byte `start` with default options.
    ///
    /// Returns the number of bytes written.
    ///
    /// # Errors
    ///
    /// See [`Encoder::encode`]; also [`CodecError::OutOfBounds`] if `start`
    /// exceeds the capacity.
    pub fn write_utf16(&mut self, start: usize, text: &[u16]) -> Result<usize, CodecError> {
        Encoder::default().encode(&mut self.view_mut(start..)?, text)
    }

    /// Decodes the bytes in `range` with default options.
    ///
    /// # Errors
    ///
    /// See [`Decoder::decode`]; also [`CodecError::OutOfBounds`] for a bad
    /// range.
    pub fn read_utf16(&self, range: impl RangeBounds<usize>) -> Result<Utf16String, CodecError> {
        Decoder::default().decode(&self.view(range)?)
    }
}

impl From<Vec<u8>> for ByteBuffer {
    fn from(data: Vec<u8>) -> Self {
        Self {
            data: data.into_boxed_slice(),
        }
    }
}

impl From<Box<[u8]>> for ByteBuffer {
    fn from(data: Box<[u8]>) -> Self {
        Self { data }
    }
}

impl AsRef<[u8]> for ByteBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl fmt::Debug for ByteBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteBuffer")
            .field("capacity", &self.data.len())
            .field("data", &BStr::new(&self.data))
            .finish()
    }
}
