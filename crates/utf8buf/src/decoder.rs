//! UTF-8 bytes to UTF-16 code units.
//!
//! Each step reads a lead byte, works out the sequence length, validates the
//! continuation bytes, assembles the code point and emits one unit (or a
//! surrogate pair for four-byte sequences). Any violation ends the call; there
//! is no resynchronisation and no partial output.

use crate::{
    code_point::{check_second_byte, is_continuation, lead_payload, sequence_len},
    error::{CodecError, Utf8Violation},
    options::CodecOptions,
    text::{TextBuilder, Utf16String},
    view::ByteView,
};

/// Decodes a [`ByteView`] holding UTF-8 into a [`Utf16String`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Decoder {
    options: CodecOptions,
}

impl Decoder {
    #[must_use]
    pub fn new(options: CodecOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub fn options(&self) -> &CodecOptions {
        &self.options
    }

    /// Decodes every byte of `view`.
    ///
    /// # Errors
    ///
    /// [`CodecError::IllegalUtf8`] with the offset (relative to the view) of
    /// the first sequence that is not legal UTF-8.
    pub fn decode(&self, view: &ByteView<'_>) -> Result<Utf16String, CodecError> {
        let bytes = view.as_bytes();
        let mut out = TextBuilder::with_byte_len(bytes.len());
        let mut pos = 0;

        while pos < bytes.len() {
            let lead = bytes[pos];
            if lead < 0x80 {
                out.push_unit(u16::from(lead));
                pos += 1;
                continue;
            }

            let (cp, len) = self.decode_sequence(&bytes[pos..]).map_err(|reason| {
                self.options
                    .reject(CodecError::IllegalUtf8 { offset: pos, reason })
            })?;
            out.push_code_point(cp);
            pos += len;
        }

        Ok(out.finish())
    }

    /// Decodes the multi-byte sequence at the front of `bytes`.
    fn decode_sequence(&self, bytes: &[u8]) -> Result<(u32, usize), Utf8Violation> {
        let lead = bytes[0];
        let len = sequence_len(lead).ok_or(Utf8Violation::InvalidLeadByte(lead))?;
        if bytes.len() < len {
            return Err(Utf8Violation::Truncated {
                needed: len,
                available: bytes.len(),
            });
        }

        let tail = &bytes[1..len];
        if let Some(&bad) = tail.iter().find(|&&b| !is_continuation(b)) {
            return Err(Utf8Violation::InvalidContinuation(bad));
        }
        check_second_byte(lead, tail[0], self.options.preserves_surrogates())?;

        let cp = tail
            .iter()
            .fold(lead_payload(lead, len), |cp, &b| (cp << 6) | u32::from(b & 0x3F));
        Ok((cp, len))
    }
}
