//! The concrete encode/decode scenarios the codec is expected to reproduce
//! byte for byte.

use crate::{ByteBuffer, CodecError, Utf16String, Utf8Violation, decode, encode};

#[test]
fn encode_ascii_letter() {
    let mut buf = [0u8; 4];
    assert_eq!(encode(&mut buf, 0, &[0x0041]), Ok(1));
    assert_eq!(buf[0], 0x41);
}

#[test]
fn encode_euro_sign() {
    let mut buf = [0u8; 3];
    assert_eq!(encode(&mut buf, 0, &[0x20AC]), Ok(3));
    assert_eq!(buf, [0xE2, 0x82, 0xAC]);
}

#[test]
fn encode_supplementary_from_pair() {
    let text = Utf16String::from("😀");
    assert_eq!(text.as_units(), &[0xD83D, 0xDE00]);
    let mut buf = [0u8; 4];
    assert_eq!(encode(&mut buf, 0, text.as_units()), Ok(4));
    assert_eq!(buf, [0xF0, 0x9F, 0x98, 0x80]);
}

#[test]
fn decode_first_two_byte_code_point() {
    let text = decode(&[0xC2, 0x80], ..).unwrap();
    assert_eq!(text.as_units(), &[0x0080]);
}

#[test]
fn decode_missing_continuation() {
    assert_eq!(
        decode(&[0xC2], ..),
        Err(CodecError::IllegalUtf8 {
            offset: 0,
            reason: Utf8Violation::Truncated {
                needed: 2,
                available: 1
            }
        })
    );
}

#[test]
fn decode_overlong_nul() {
    assert!(matches!(
        decode(&[0xC0, 0x80], ..),
        Err(CodecError::IllegalUtf8 { offset: 0, .. })
    ));
}

#[test]
fn encode_lone_high_surrogate() {
    let mut buf = [0u8; 8];
    assert_eq!(
        encode(&mut buf, 0, &[0xD800]),
        Err(CodecError::UnpairedSurrogate {
            index: 0,
            unit: 0xD800
        })
    );
    assert_eq!(buf, [0; 8]);
}

#[test]
fn encode_lone_low_surrogate_first() {
    let mut buf = [0u8; 8];
    assert_eq!(
        encode(&mut buf, 0, &[0xDC00, 0xD800]),
        Err(CodecError::UnpairedSurrogate {
            index: 0,
            unit: 0xDC00
        })
    );
}

#[test]
fn encode_is_not_transactional() {
    let mut buf = [0u8; 8];
    assert_eq!(
        encode(&mut buf, 0, &[0x41, 0x42, 0xD800, 0x43]),
        Err(CodecError::UnpairedSurrogate {
            index: 2,
            unit: 0xD800
        })
    );
    assert_eq!(&buf[..3], &[0x41, 0x42, 0x00]);
}

#[test]
fn records_share_one_buffer() {
    let mut buf = ByteBuffer::new(32);
    let first = Utf16String::from("größe");
    let second = Utf16String::from("🦀 crab");

    let n1 = buf.write_utf16(0, first.as_units()).unwrap();
    let n2 = buf.write_utf16(n1, second.as_units()).unwrap();

    assert_eq!(buf.read_utf16(..n1).unwrap(), first);
    assert_eq!(buf.read_utf16(n1..n1 + n2).unwrap(), second);
    // Decoding across the seam is fine too: both records are whole.
    assert_eq!(buf.read_utf16(..n1 + n2).unwrap(), "größe🦀 crab");
    // Splitting inside the crab is not.
    assert!(buf.read_utf16(..n1 + 2).is_err());
}
