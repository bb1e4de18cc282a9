//! Packs several strings into one fixed buffer and reads them back.
//!
//! The codec itself never frames its output: it writes bytes and says how
//! many. Here the caller adds the framing, a little-endian `u16` length before
//! each record, and sizes every record with `encoded_len` before writing it.
//!
//! Run with
//!
//! ```bash
//! cargo run -p utf8buf --example framed_records
//! ```

use utf8buf::{ByteBuffer, CodecError, Utf16String, encoded_len};

const LEN_PREFIX: usize = 2;

/// Writes one length-prefixed record at `at`, or nothing if it does not fit.
fn write_record(buf: &mut ByteBuffer, at: usize, text: &Utf16String) -> Result<usize, CodecError> {
    let len = encoded_len(text.as_units())?;
    let prefix = u16::try_from(len).expect("record longer than u16::MAX bytes");
    let needed = LEN_PREFIX + len;
    let mut view = buf.view_mut(at..)?;
    if view.len() < needed {
        return Err(CodecError::Overflow {
            written: 0,
            needed,
            capacity: view.len(),
        });
    }
    view.write_at(0, &prefix.to_le_bytes())?;
    let written = buf.write_utf16(at + LEN_PREFIX, text.as_units())?;
    debug_assert_eq!(written, len);
    Ok(needed)
}

fn read_record(buf: &ByteBuffer, at: usize) -> Result<(Utf16String, usize), CodecError> {
    let prefix = buf.view(at..at + LEN_PREFIX)?;
    let prefix: [u8; LEN_PREFIX] = prefix
        .as_bytes()
        .try_into()
        .expect("view spans exactly LEN_PREFIX bytes");
    let len = usize::from(u16::from_le_bytes(prefix));
    let start = at + LEN_PREFIX;
    let text = buf.read_utf16(start..start + len)?;
    Ok((text, LEN_PREFIX + len))
}

fn main() -> Result<(), CodecError> {
    let records = ["plain ascii", "Grüße", "日本語", "crab 🦀"];
    let mut buf = ByteBuffer::new(64);

    let mut at = 0;
    for record in records {
        at += write_record(&mut buf, at, &Utf16String::from(record))?;
    }
    println!("{at} of {} bytes used: {buf:?}", buf.capacity());

    // The next record does not fit, so nothing of it is written.
    let too_long = Utf16String::from("x".repeat(64).as_str());
    match write_record(&mut buf, at, &too_long) {
        Err(e) => println!("rejected: {e}"),
        Ok(_) => unreachable!("64 bytes cannot fit after {at}"),
    }

    let mut pos = 0;
    while pos < at {
        let (text, used) = read_record(&buf, pos)?;
        println!("{pos:>3}: {text}");
        pos += used;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_record_leaves_buffer_unchanged() {
        let mut buf = ByteBuffer::new(16);
        let at = write_record(&mut buf, 0, &Utf16String::from("Grüße")).unwrap();
        assert_eq!(at, LEN_PREFIX + 7);
        let before = buf.clone();

        // Prefix alone would fit; prefix plus text would not.
        let err = write_record(&mut buf, at, &Utf16String::from("abcdef")).unwrap_err();
        assert_eq!(
            err,
            CodecError::Overflow {
                written: 0,
                needed: 8,
                capacity: 7
            }
        );
        assert_eq!(buf, before);
        assert_eq!(read_record(&buf, 0).unwrap().0, "Grüße");
    }

    #[test]
    fn records_read_back_in_order() {
        let mut buf = ByteBuffer::new(32);
        let mut at = 0;
        for record in ["a", "日本", "🦀"] {
            at += write_record(&mut buf, at, &Utf16String::from(record)).unwrap();
        }
        let mut pos = 0;
        let mut seen = Vec::new();
        while pos < at {
            let (text, used) = read_record(&buf, pos).unwrap();
            seen.push(text.to_string_lossy());
            pos += used;
        }
        assert_eq!(seen, ["a", "日本", "🦀"]);
    }
}
