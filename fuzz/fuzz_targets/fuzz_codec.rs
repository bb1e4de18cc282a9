#![no_main]
use std::cell::RefCell;

use arbitrary::Arbitrary;
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use utf8buf::{
    ByteView, ByteViewMut, CodecError, CodecOptions, Decoder, Encoder, SurrogateMode,
};

thread_local! {
    // One SmallRng per thread, seeded once from the host OS
    static RNG: RefCell<SmallRng> =
        RefCell::new(SmallRng::from_os_rng());
}

/// Byte sequences sitting on the edges of the decoder's acceptance table.
static EDGE_TABLE: &[&[u8]] = &[
    b"\x7F",
    b"\xC2\x80",
    b"\xDF\xBF",
    b"\xE0\xA0\x80",
    b"\xED\x9F\xBF",
    b"\xED\xA0\x80", // encoded surrogate
    b"\xEE\x80\x80",
    b"\xEF\xBF\xBF",
    b"\xF0\x90\x80\x80",
    b"\xF4\x8F\xBF\xBF",
    b"\xF4\x90\x80\x80", // past U+10FFFF
    b"\xC0\x80",         // overlong NUL
    b"\xE0\x80\x80",     // overlong
    b"\x80",
    b"\xFF",
];

/// Helper: borrow the thread-local RNG and run a closure with it.
fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

/// Splice edge sequences into the input so the byte half of `Input` keeps
/// hitting the interesting corners of the lead-byte table.
fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    let size = fuzzer_mutate(data, size, max_size);
    if !seed.is_multiple_of(4) {
        return size;
    }

    with_rng(|rng| {
        let edge = EDGE_TABLE[rng.random_range(0..EDGE_TABLE.len())];
        if size + edge.len() > max_size {
            return size;
        }
        let at = rng.random_range(0..=size);
        data.copy_within(at..size, at + edge.len());
        data[at..at + edge.len()].copy_from_slice(edge);
        size + edge.len()
    })
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

#[derive(Debug, Arbitrary)]
struct Input {
    preserving: bool,
    capacity: u8,
    units: Vec<u16>,
    bytes: Vec<u8>,
}

fn codec(input: &Input) {
    let options = CodecOptions {
        surrogate_mode: if input.preserving {
            SurrogateMode::Preserving
        } else {
            SurrogateMode::Strict
        },
        panic_on_error: false,
    };
    let encoder = Encoder::new(options);
    let decoder = Decoder::new(options);

    // Decode: strict mode must agree with the standard library.
    let decoded = decoder.decode(&ByteView::full(&input.bytes));
    if !input.preserving {
        match (&decoded, std::str::from_utf8(&input.bytes)) {
            (Ok(text), Ok(s)) => assert_eq!(text.as_units(), s.encode_utf16().collect::<Vec<_>>()),
            (Err(CodecError::IllegalUtf8 { offset, .. }), Err(e)) => {
                assert_eq!(*offset, e.valid_up_to());
            }
            (ours, std) => panic!("disagreement: {ours:?} vs {std:?}"),
        }
    }

    // Whatever decodes re-encodes. Strict mode reproduces the input bytes;
    // preserving mode may join two encoded surrogates into one sequence, so
    // only the units are compared.
    if let Ok(text) = decoded {
        let mut buf = vec![0u8; input.bytes.len()];
        let n = encoder
            .encode(&mut ByteViewMut::full(&mut buf), text.as_units())
            .expect("decoded text must re-encode");
        if input.preserving {
            let again = decoder.decode(&ByteView::full(&buf[..n])).unwrap();
            assert_eq!(again, text);
        } else {
            assert_eq!(&buf[..n], &input.bytes[..]);
        }
    }

    // Encode into a tight view and check the guard bytes around it.
    let capacity = usize::from(input.capacity);
    let mut buf = vec![0xA5u8; capacity + 2];
    let result = encoder.encode(
        &mut ByteViewMut::new(&mut buf, 1..1 + capacity).unwrap(),
        &input.units,
    );
    assert_eq!(buf[0], 0xA5);
    assert_eq!(buf[capacity + 1], 0xA5);

    match (result, encoder.encoded_len(&input.units)) {
        (Ok(n), Ok(len)) => {
            assert_eq!(n, len);
            let text = decoder
                .decode(&ByteView::new(&buf, 1..1 + n).unwrap())
                .expect("encoded text must decode");
            assert_eq!(text.as_units(), &input.units[..]);
        }
        (Err(CodecError::Overflow { written, .. }), Ok(len)) => {
            assert!(len > capacity);
            assert!(buf[1 + written..=capacity].iter().all(|&b| b == 0xA5));
        }
        (Err(e @ CodecError::UnpairedSurrogate { .. }), Err(f)) => assert_eq!(e, f),
        (Err(CodecError::Overflow { .. }), Err(CodecError::UnpairedSurrogate { .. })) => {}
        (ours, len) => panic!("disagreement: {ours:?} vs {len:?}"),
    }
}

fuzz_target!(|input: Input| codec(&input));
