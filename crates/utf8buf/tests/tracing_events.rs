#![allow(missing_docs)]
use tracing_test::traced_test;
use utf8buf::{ByteBuffer, CodecError, Utf8Violation, decode, encode};

#[test]
#[traced_test]
fn decode_rejection_is_logged() {
    let err = decode(&[0x41, 0xC0, 0x80], ..).unwrap_err();
    assert_eq!(
        err,
        CodecError::IllegalUtf8 {
            offset: 1,
            reason: Utf8Violation::InvalidLeadByte(0xC0)
        }
    );
    assert!(logs_contain("utf8buf rejected input"));
    assert!(logs_contain("position=Some(1)"));
}

#[test]
#[traced_test]
fn encode_rejections_are_logged() {
    assert!(encode(&mut [0u8; 4], 0, &[0xD800]).is_err());
    assert!(logs_contain("unpaired surrogate 0xD800 at code unit 0"));

    let mut buf = ByteBuffer::new(1);
    assert!(buf.write_utf16(0, &[0x20AC]).is_err());
    assert!(logs_contain("buffer overflow"));
}

#[test]
#[traced_test]
fn successful_calls_log_nothing() {
    let mut buf = [0u8; 8];
    let n = encode(&mut buf, 0, &[0x41, 0x20AC]).unwrap();
    decode(&buf, ..n).unwrap();
    assert!(!logs_contain("rejected"));
}
