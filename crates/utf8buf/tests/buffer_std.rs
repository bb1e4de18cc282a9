#![allow(missing_docs)]
use utf8buf::{
    ByteBuffer, ByteView, ByteViewMut, CodecError, CodecOptions, Decoder, Encoder, SurrogateMode,
    Utf16String,
};

#[test]
fn owned_buffer_roundtrip() {
    let text = Utf16String::from("Grüße, 世界 🌍");
    let mut buf = ByteBuffer::new(64);
    let n = buf.write_utf16(0, text.as_units()).unwrap();
    assert_eq!(&buf.as_bytes()[..n], "Grüße, 世界 🌍".as_bytes());
    let back = buf.read_utf16(..n).unwrap();
    assert_eq!(back.into_string().unwrap(), "Grüße, 世界 🌍");
}

#[test]
fn caller_owned_slice_with_explicit_engines() {
    let options = CodecOptions {
        surrogate_mode: SurrogateMode::Preserving,
        ..Default::default()
    };
    let encoder = Encoder::new(options);
    let decoder = Decoder::new(options);

    // A lone high surrogate, as produced by a string sliced mid-pair.
    let units = [0x0061, 0xD83D];
    let mut storage = vec![0u8; 16];
    let mut view = ByteViewMut::new(&mut storage, 4..12).unwrap();
    let n = encoder.encode(&mut view, &units).unwrap();
    assert_eq!(n, 4);
    assert_eq!(&storage[4..8], &[0x61, 0xED, 0xA0, 0xBD]);

    let text = decoder
        .decode(&ByteView::new(&storage, 4..4 + n).unwrap())
        .unwrap();
    assert_eq!(text.as_units(), &units);
    assert_eq!(text.to_string_lossy(), "a\u{FFFD}");

    // The same bytes are rejected by a strict decoder.
    assert!(matches!(
        Decoder::default().decode(&ByteView::new(&storage, 4..4 + n).unwrap()),
        Err(CodecError::IllegalUtf8 { offset: 1, .. })
    ));
}

#[test]
fn sizing_before_encoding() {
    let text = Utf16String::from("€€€");
    let len = utf8buf::encoded_len(text.as_units()).unwrap();
    assert_eq!(len, 9);
    let mut buf = ByteBuffer::new(len);
    assert_eq!(buf.write_utf16(0, text.as_units()), Ok(len));
    assert!(matches!(
        buf.write_utf16(1, text.as_units()),
        Err(CodecError::Overflow { written: 6, .. })
    ));
}
