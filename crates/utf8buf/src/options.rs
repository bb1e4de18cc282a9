use crate::error::CodecError;

/// How surrogate code units that are not part of a valid pair are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SurrogateMode {
    /// Lone surrogates are errors in both directions.
    ///
    /// Encoding reports [`CodecError::UnpairedSurrogate`]; decoding rejects
    /// the three-byte forms `ED A0..BF xx` as
    /// [`Utf8Violation::EncodedSurrogate`](crate::Utf8Violation::EncodedSurrogate).
    #[default]
    Strict,
    /// Lone surrogates are carried through as their three-byte forms
    /// (WTF-8 style), so any sequence of `u16` survives a round trip.
    Preserving,
}

/// Configuration for [`Encoder`](crate::Encoder) and
/// [`Decoder`](crate::Decoder).
///
/// # Examples
///
/// ```rust
/// use utf8buf::{CodecOptions, Encoder, SurrogateMode};
///
/// let encoder = Encoder::new(CodecOptions {
///     surrogate_mode: SurrogateMode::Preserving,
///     ..Default::default()
/// });
/// assert_eq!(encoder.encoded_len(&[0xD800]), Ok(3));
/// ```
///
/// # Default
///
/// Strict surrogate handling.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CodecOptions {
    /// Treatment of surrogate code units outside a valid pair.
    ///
    /// # Default
    ///
    /// [`SurrogateMode::Strict`]
    pub surrogate_mode: SurrogateMode,

    #[cfg(any(test, feature = "fuzzing"))]
    #[cfg_attr(feature = "serde", serde(default))]
    /// Panic on codec errors instead of returning them.
    ///
    /// Enabled only in test builds to produce backtraces at the failure site.
    pub panic_on_error: bool,
}

impl CodecOptions {
    pub(crate) fn preserves_surrogates(&self) -> bool {
        self.surrogate_mode == SurrogateMode::Preserving
    }

    /// Funnel for every rejection so tracing and test panics see them all.
    #[cold]
    pub(crate) fn reject(&self, err: CodecError) -> CodecError {
        #[cfg(feature = "tracing")]
        tracing::debug!(error = %err, position = ?err.position(), "utf8buf rejected input");

        #[cfg(any(test, feature = "fuzzing"))]
        if self.panic_on_error {
            panic!("{err}");
        }

        err
    }
}
