use alloc::{boxed::Box, vec::Vec};

use quickcheck::{Arbitrary, Gen};

use crate::SurrogateMode;

/// A Unicode scalar value, biased towards the edges of each length class.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct ScalarValue(pub(crate) u32);

const EDGES: &[u32] = &[
    0x0000, 0x007F, 0x0080, 0x07FF, 0x0800, 0xD7FF, 0xE000, 0xFFFD, 0xFFFF, 0x1_0000, 0x10_FFFF,
];

impl Arbitrary for ScalarValue {
    fn arbitrary(g: &mut Gen) -> Self {
        let cp = match usize::arbitrary(g) % 4 {
            0 => *g.choose(EDGES).unwrap(),
            1 => u32::arbitrary(g) % 0x80,
            _ => u32::arbitrary(g) % 0x11_0000,
        };
        if (0xD800..=0xDFFF).contains(&cp) {
            Self(cp - 0x800)
        } else {
            Self(cp)
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(
            self.0
                .shrink()
                .filter(|cp| !(0xD800..=0xDFFF).contains(cp))
                .map(Self),
        )
    }
}

/// Well-formed UTF-16 built from arbitrary scalar values.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct WellFormed(pub(crate) Vec<u16>);

impl Arbitrary for WellFormed {
    fn arbitrary(g: &mut Gen) -> Self {
        let scalars: Vec<ScalarValue> = Vec::arbitrary(g);
        let units = scalars
            .into_iter()
            .filter_map(|s| char::from_u32(s.0))
            .flat_map(|c| {
                let mut buf = [0u16; 2];
                let n = c.encode_utf16(&mut buf).len();
                buf.into_iter().take(n)
            })
            .collect();
        Self(units)
    }
}

impl Arbitrary for SurrogateMode {
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            SurrogateMode::Strict
        } else {
            SurrogateMode::Preserving
        }
    }
}
