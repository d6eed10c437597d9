use serde::{Deserialize, Serialize};

/// Per-base occurrence counts of a validated sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NucleotideCounts {
    #[serde(rename = "A")]
    pub a: usize,
    #[serde(rename = "T")]
    pub t: usize,
    #[serde(rename = "C")]
    pub c: usize,
    #[serde(rename = "G")]
    pub g: usize,
}

impl NucleotideCounts {
    pub fn new_from_sequence(sequence: &[u8]) -> Self {
        let mut ret = Self::default();
        for c in sequence {
            match c {
                b'A' => ret.a += 1,
                b'T' => ret.t += 1,
                b'C' => ret.c += 1,
                b'G' => ret.g += 1,
                _ => {}
            }
        }
        ret
    }

    #[inline(always)]
    pub fn total(&self) -> usize {
        self.a + self.t + self.c + self.g
    }

    #[inline(always)]
    pub fn gc(&self) -> usize {
        self.g + self.c
    }

    /// GC content as a percentage of the total base count, rounded to two
    /// decimal places. An empty sequence has a GC content of 0.
    pub fn gc_percent(&self) -> f64 {
        if self.total() == 0 {
            return 0.0;
        }
        let gc = self.gc() as f64 / self.total() as f64 * 100.0;
        (gc * 100.0).round() / 100.0
    }
}
