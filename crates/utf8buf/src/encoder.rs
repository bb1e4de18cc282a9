//! UTF-16 code units to UTF-8 bytes.
//!
//! The encoder walks the text one code point at a time:
//!
//! | code point                 | bytes |
//! |----------------------------|-------|
//! | `0000..=007F`              | 1     |
//! | `0080..=07FF`              | 2     |
//! | `0800..=D7FF`, `E000..=FFFF` | 3   |
//! | `10000..=10FFFF` (pairs)   | 4     |
//!
//! A code point is written only if all of its bytes fit, so on
//! [`CodecError::Overflow`] the view holds every earlier code point and
//! nothing past the failure offset.

use crate::{
    code_point::{
        combine_surrogates, is_high_surrogate, is_low_surrogate, is_surrogate, utf8_len,
        write_utf8,
    },
    error::CodecError,
    options::CodecOptions,
    view::ByteViewMut,
};

/// Encodes UTF-16 text into a [`ByteViewMut`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Encoder {
    options: CodecOptions,
}

impl Encoder {
    #[must_use]
    pub fn new(options: CodecOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub fn options(&self) -> &CodecOptions {
        &self.options
    }

    /// Writes the UTF-8 form of `text` to the front of `view`.
    ///
    /// Returns the number of bytes written.
    ///
    /// # Errors
    ///
    /// - [`CodecError::UnpairedSurrogate`] for a surrogate outside a
    ///   high-then-low pair (strict mode).
    /// - [`CodecError::Overflow`] when the next code point does not fit. Bytes
    ///   of earlier code points stay written.
    pub fn encode(&self, view: &mut ByteViewMut<'_>, text: &[u16]) -> Result<usize, CodecError> {
        let mut written = 0;
        let mut i = 0;
        let mut seq = [0u8; 4];

        while i < text.len() {
            let (cp, consumed) = self.next_code_point(text, i)?;
            let n = write_utf8(cp, &mut seq);
            view.write_at(written, &seq[..n])
                .map_err(|e| self.options.reject(e))?;
            written += n;
            i += consumed;
        }

        Ok(written)
    }

    /// Number of bytes [`encode`](Self::encode) would write for `text`.
    ///
    /// # Errors
    ///
    /// [`CodecError::UnpairedSurrogate`], as for `encode`.
    pub fn encoded_len(&self, text: &[u16]) -> Result<usize, CodecError> {
        let mut len = 0;
        let mut i = 0;
        while i < text.len() {
            let (cp, consumed) = self.next_code_point(text, i)?;
            len += utf8_len(cp);
            i += consumed;
        }
        Ok(len)
    }

    /// Code point starting at `text[i]` and the number of units it spans.
    #[inline]
    fn next_code_point(&self, text: &[u16], i: usize) -> Result<(u32, usize), CodecError> {
        let unit = text[i];
        if !is_surrogate(unit) {
            return Ok((u32::from(unit), 1));
        }

        if is_high_surrogate(unit) {
            if let Some(&low) = text.get(i + 1) {
                if is_low_surrogate(low) {
                    return Ok((combine_surrogates(unit, low), 2));
                }
            }
        }

        if self.options.preserves_surrogates() {
            Ok((u32::from(unit), 1))
        } else {
            Err(self
                .options
                .reject(CodecError::UnpairedSurrogate { index: i, unit }))
        }
    }
}
