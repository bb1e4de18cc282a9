//! Bounds-checked windows over a byte buffer.
//!
//! A view is `(buffer, start, length)`: the encoder and decoder only ever see
//! indices `0..length`, and the view translates them to `start + index` in the
//! underlying storage. Views borrow their buffer, so each encode or decode
//! call has exclusive (or shared read-only) access for its duration.

use core::ops::{Bound, RangeBounds};

use crate::error::CodecError;

/// Resolves `range` against a buffer of `capacity` bytes.
///
/// Unbounded ends default to `0` and `capacity`.
fn resolve(
    range: &impl RangeBounds<usize>,
    capacity: usize,
) -> Result<(usize, usize), CodecError> {
    let out_of_bounds = |start: usize, end: usize| CodecError::OutOfBounds {
        start,
        end,
        capacity,
    };

    let start = match range.start_bound() {
        Bound::Included(&s) => s,
        Bound::Excluded(&s) => s.checked_add(1).ok_or(out_of_bounds(s, capacity))?,
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&e) => e.checked_add(1).ok_or(out_of_bounds(start, e))?,
        Bound::Excluded(&e) => e,
        Bound::Unbounded => capacity,
    };

    if start > end || end > capacity {
        return Err(out_of_bounds(start, end));
    }
    Ok((start, end))
}

/// Read-only window over a byte buffer.
#[derive(Debug, Clone, Copy)]
pub struct ByteView<'a> {
    bytes: &'a [u8],
    start: usize,
}

impl<'a> ByteView<'a> {
    /// Creates a view of `buffer[range]`.
    ///
    /// # Errors
    ///
    /// [`CodecError::OutOfBounds`] if the range does not lie within `buffer`.
    pub fn new(buffer: &'a [u8], range: impl RangeBounds<usize>) -> Result<Self, CodecError> {
        let (start, end) = resolve(&range, buffer.len())?;
        Ok(Self {
            bytes: &buffer[start..end],
            start,
        })
    }

    /// Views the whole of `buffer`.
    #[must_use]
    pub fn full(buffer: &'a [u8]) -> Self {
        Self {
            bytes: buffer,
            start: 0,
        }
    }

    /// Offset of the view within its buffer.
    #[must_use]
    pub fn start(&self) -> usize {
        self.start
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Byte at `index` within the view.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<u8> {
        self.bytes.get(index).copied()
    }

    #[must_use]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }
}

/// Writable window over a byte buffer.
#[derive(Debug)]
pub struct ByteViewMut<'a> {
    bytes: &'a mut [u8],
    start: usize,
}

impl<'a> ByteViewMut<'a> {
    /// Creates a writable view of `buffer[range]`.
    ///
    /// # Errors
    ///
    /// [`CodecError::OutOfBounds`] if the range does not lie within `buffer`.
    pub fn new(buffer: &'a mut [u8], range: impl RangeBounds<usize>) -> Result<Self, CodecError> {
        let (start, end) = resolve(&range, buffer.len())?;
        Ok(Self {
            bytes: &mut buffer[start..end],
            start,
        })
    }

    /// Views the whole of `buffer`.
    #[must_use]
    pub fn full(buffer: &'a mut [u8]) -> Self {
        Self {
            bytes: buffer,
            start: 0,
        }
    }

    /// Offset of the view within its buffer.
    #[must_use]
    pub fn start(&self) -> usize {
        self.start
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Bytes left in the view past `pos`.
    #[must_use]
    pub fn remaining_after(&self, pos: usize) -> usize {
        self.bytes.len().saturating_sub(pos)
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<u8> {
        self.bytes.get(index).copied()
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.bytes
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        self.bytes
    }

    /// Copies `src` to `pos..pos + src.len()`.
    ///
    /// Either every byte is written or none is.
    ///
    /// # Errors
    ///
    /// [`CodecError::Overflow`] if `src` does not fit after `pos`.
    pub fn write_at(&mut self, pos: usize, src: &[u8]) -> Result<(), CodecError> {
        if self.remaining_after(pos) < src.len() {
            return Err(CodecError::Overflow {
                written: pos,
                needed: src.len(),
                capacity: self.bytes.len(),
            });
        }
        self.bytes[pos..pos + src.len()].copy_from_slice(src);
        Ok(())
    }
}
