//! Code point arithmetic shared by both directions of the codec.
//!
//! - UTF-8 sequence lengths, from a code point (encode) or a lead byte
//!   (decode).
//! - Surrogate classification and pair composition/decomposition.
//! - The second-byte constraints that keep decoded sequences minimal and in
//!   range.

use crate::error::Utf8Violation;

pub(crate) const HIGH_SURROGATES: core::ops::RangeInclusive<u16> = 0xD800..=0xDBFF;
pub(crate) const LOW_SURROGATES: core::ops::RangeInclusive<u16> = 0xDC00..=0xDFFF;

const SUPPLEMENTARY_BASE: u32 = 0x1_0000;

#[inline]
pub(crate) fn is_surrogate(unit: u16) -> bool {
    (0xD800..=0xDFFF).contains(&unit)
}

#[inline]
pub(crate) fn is_high_surrogate(unit: u16) -> bool {
    HIGH_SURROGATES.contains(&unit)
}

#[inline]
pub(crate) fn is_low_surrogate(unit: u16) -> bool {
    LOW_SURROGATES.contains(&unit)
}

/// `((high & 0x3FF) << 10) + (low & 0x3FF) + 0x10000`
#[inline]
pub(crate) fn combine_surrogates(high: u16, low: u16) -> u32 {
    ((u32::from(high) & 0x3FF) << 10) + (u32::from(low) & 0x3FF) + SUPPLEMENTARY_BASE
}

/// Inverse of [`combine_surrogates`] for `0x10000..=0x10FFFF`.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn split_supplementary(cp: u32) -> (u16, u16) {
    debug_assert!((SUPPLEMENTARY_BASE..=0x10_FFFF).contains(&cp));
    let offset = cp - SUPPLEMENTARY_BASE;
    (
        0xD800 + (offset >> 10) as u16,
        0xDC00 + (offset & 0x3FF) as u16,
    )
}

/// Number of UTF-8 bytes needed for `cp`.
#[inline]
pub(crate) fn utf8_len(cp: u32) -> usize {
    match cp {
        0..=0x7F => 1,
        0x80..=0x7FF => 2,
        0x800..=0xFFFF => 3,
        _ => 4,
    }
}

/// Writes the UTF-8 form of `cp` to the front of `out`, returning its length.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn write_utf8(cp: u32, out: &mut [u8; 4]) -> usize {
    match utf8_len(cp) {
        1 => {
            out[0] = cp as u8;
            1
        }
        2 => {
            out[0] = 0xC0 | (cp >> 6) as u8;
            out[1] = 0x80 | (cp & 0x3F) as u8;
            2
        }
        3 => {
            out[0] = 0xE0 | (cp >> 12) as u8;
            out[1] = 0x80 | ((cp >> 6) & 0x3F) as u8;
            out[2] = 0x80 | (cp & 0x3F) as u8;
            3
        }
        _ => {
            out[0] = 0xF0 | (cp >> 18) as u8;
            out[1] = 0x80 | ((cp >> 12) & 0x3F) as u8;
            out[2] = 0x80 | ((cp >> 6) & 0x3F) as u8;
            out[3] = 0x80 | (cp & 0x3F) as u8;
            4
        }
    }
}

/// Sequence length declared by a lead byte, or `None` if `lead` cannot start
/// a sequence (`80..=C1`, `F5..=FF`).
#[inline]
pub(crate) fn sequence_len(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

/// Payload bits of a lead byte for a sequence of `len` bytes.
#[inline]
pub(crate) fn lead_payload(lead: u8, len: usize) -> u32 {
    let mask = match len {
        1 => 0x7F,
        2 => 0x1F,
        3 => 0x0F,
        _ => 0x07,
    };
    u32::from(lead & mask)
}

#[inline]
pub(crate) fn is_continuation(byte: u8) -> bool {
    (0x80..=0xBF).contains(&byte)
}

/// Checks the byte after a three- or four-byte lead against the ranges that
/// rule out overlong forms, surrogates and code points past U+10FFFF.
///
/// `second` must already be a continuation byte.
#[inline]
pub(crate) fn check_second_byte(
    lead: u8,
    second: u8,
    allow_surrogates: bool,
) -> Result<(), Utf8Violation> {
    match (lead, second) {
        (0xE0, 0x80..=0x9F) | (0xF0, 0x80..=0x8F) => Err(Utf8Violation::Overlong),
        (0xED, 0xA0..=0xBF) if !allow_surrogates => Err(Utf8Violation::EncodedSurrogate),
        (0xF4, 0x90..=0xBF) => Err(Utf8Violation::OutOfRange),
        _ => Ok(()),
    }
}
