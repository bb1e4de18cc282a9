use alloc::{string::String, vec::Vec};
use core::fmt;

use crate::{
    code_point::{combine_surrogates, is_high_surrogate, is_low_surrogate, split_supplementary},
    error::CodecError,
};

/// An owned text value made of UTF-16 code units.
///
/// This is what [`Decoder`](crate::Decoder) produces. In strict mode the
/// units always form well-formed UTF-16; in
/// [`Preserving`](crate::SurrogateMode::Preserving) mode they may contain lone
/// surrogates, like the strings of many managed runtimes.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Utf16String {
    units: Vec<u16>,
}

impl Utf16String {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_units(units: Vec<u16>) -> Self {
        Self { units }
    }

    #[must_use]
    pub fn as_units(&self) -> &[u16] {
        &self.units
    }

    #[must_use]
    pub fn into_units(self) -> Vec<u16> {
        self.units
    }

    /// Length in code units.
    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Whether every surrogate is part of a high-then-low pair.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        char::decode_utf16(self.units.iter().copied()).all(|r| r.is_ok())
    }

    /// Iterates code points, yielding lone surrogates as their own value.
    pub fn code_points(&self) -> CodePoints<'_> {
        CodePoints {
            units: &self.units,
            pos: 0,
        }
    }

    /// Converts to a `String`, replacing lone surrogates with U+FFFD.
    #[must_use]
    pub fn to_string_lossy(&self) -> String {
        char::decode_utf16(self.units.iter().copied())
            .map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect()
    }

    /// Converts to a `String`.
    ///
    /// # Errors
    ///
    /// [`CodecError::UnpairedSurrogate`] for the first lone surrogate.
    pub fn into_string(self) -> Result<String, CodecError> {
        let mut out = String::with_capacity(self.units.len());
        let mut index = 0;
        for r in char::decode_utf16(self.units.iter().copied()) {
            match r {
                Ok(c) => {
                    out.push(c);
                    index += c.len_utf16();
                }
                Err(e) => {
                    return Err(CodecError::UnpairedSurrogate {
                        index,
                        unit: e.unpaired_surrogate(),
                    });
                }
            }
        }
        Ok(out)
    }
}

impl fmt::Debug for Utf16String {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.to_string_lossy(), f)
    }
}

impl fmt::Display for Utf16String {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in char::decode_utf16(self.units.iter().copied()) {
            fmt::Write::write_char(f, r.unwrap_or(char::REPLACEMENT_CHARACTER))?;
        }
        Ok(())
    }
}

impl From<&str> for Utf16String {
    fn from(s: &str) -> Self {
        Self {
            units: s.encode_utf16().collect(),
        }
    }
}

impl From<Vec<u16>> for Utf16String {
    fn from(units: Vec<u16>) -> Self {
        Self { units }
    }
}

impl FromIterator<u16> for Utf16String {
    fn from_iter<I: IntoIterator<Item = u16>>(iter: I) -> Self {
        Self {
            units: iter.into_iter().collect(),
        }
    }
}

impl AsRef<[u16]> for Utf16String {
    fn as_ref(&self) -> &[u16] {
        &self.units
    }
}

impl PartialEq<str> for Utf16String {
    fn eq(&self, other: &str) -> bool {
        self.units.iter().copied().eq(other.encode_utf16())
    }
}

impl PartialEq<&str> for Utf16String {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

/// Iterator returned by [`Utf16String::code_points`].
#[derive(Debug, Clone)]
pub struct CodePoints<'a> {
    units: &'a [u16],
    pos: usize,
}

impl Iterator for CodePoints<'_> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let unit = *self.units.get(self.pos)?;
        if is_high_surrogate(unit) {
            if let Some(&low) = self.units.get(self.pos + 1) {
                if is_low_surrogate(low) {
                    self.pos += 2;
                    return Some(combine_surrogates(unit, low));
                }
            }
        }
        self.pos += 1;
        Some(u32::from(unit))
    }
}

/// Reassembles decoded code points into a [`Utf16String`].
///
/// A UTF-8 byte never yields more than one code unit (four bytes yield two),
/// so reserving one unit per input byte up front means the output is built in
/// a single allocation regardless of length.
pub(crate) struct TextBuilder {
    units: Vec<u16>,
}

impl TextBuilder {
    pub(crate) fn with_byte_len(bytes: usize) -> Self {
        Self {
            units: Vec::with_capacity(bytes),
        }
    }

    #[inline]
    pub(crate) fn push_unit(&mut self, unit: u16) {
        self.units.push(unit);
    }

    /// Pushes `cp`, splitting supplementary code points into a pair.
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn push_code_point(&mut self, cp: u32) {
        if cp >= 0x1_0000 {
            let (high, low) = split_supplementary(cp);
            self.units.push(high);
            self.units.push(low);
        } else {
            self.units.push(cp as u16);
        }
    }

    pub(crate) fn finish(self) -> Utf16String {
        Utf16String { units: self.units }
    }
}
