use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Start/stop codon configuration for the ORF scan. Codons are triplets.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CodonTable {
    pub start_codon: String,
    pub stop_codons: Vec<String>,
}

impl Default for CodonTable {
    fn default() -> Self {
        Self {
            start_codon: "ATG".to_string(),
            stop_codons: vec!["TAA".to_string(), "TAG".to_string(), "TGA".to_string()],
        }
    }
}

impl CodonTable {
    #[inline(always)]
    pub fn is_start_codon(&self, codon: &[u8]) -> bool {
        codon == self.start_codon.as_bytes()
    }

    #[inline(always)]
    pub fn is_stop_codon(&self, codon: &[u8]) -> bool {
        self.stop_codons.iter().any(|stop| codon == stop.as_bytes())
    }
}

/// An open reading frame on the forward strand: a start codon through the
/// last base of the first in-step stop codon. Indices are 0-based and
/// inclusive.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenReadingFrame {
    pub start: usize,
    pub end: usize,
    pub length: usize,
    pub sequence: String,
}

impl OpenReadingFrame {
    /// Finds all ORFs in the three forward reading frames, frame-major,
    /// then ascending by start position within a frame.
    ///
    /// Start codons are discovered at every position of a frame's
    /// sub-sequence, overlapping occurrences included; discovery is not
    /// triplet-aligned beyond the frame offset, so a start position can be
    /// reported by up to three frames. Starts with no downstream stop codon
    /// are dropped. Worst case is quadratic in sequence length per frame.
    pub fn find_orfs(sequence: &[u8], codons: &CodonTable) -> Vec<OpenReadingFrame> {
        [0usize, 1, 2]
            .par_iter()
            .flat_map(|frame| Self::add_orfs(sequence, codons, *frame))
            .collect()
    }

    fn add_orfs(sequence: &[u8], codons: &CodonTable, frame: usize) -> Vec<OpenReadingFrame> {
        let mut ret = vec![];
        let mut start = frame;
        while start + 3 <= sequence.len() {
            if codons.is_start_codon(&sequence[start..start + 3]) {
                if let Some(orf) = Self::scan_to_stop(sequence, codons, start) {
                    ret.push(orf);
                }
            }
            start += 1;
        }
        ret
    }

    fn scan_to_stop(
        sequence: &[u8],
        codons: &CodonTable,
        start: usize,
    ) -> Option<OpenReadingFrame> {
        let mut pos = start + 3;
        while pos + 3 <= sequence.len() {
            if codons.is_stop_codon(&sequence[pos..pos + 3]) {
                let end = pos + 2;
                return Some(OpenReadingFrame {
                    start,
                    end,
                    length: end - start + 1,
                    sequence: String::from_utf8_lossy(&sequence[start..=end]).to_string(),
                });
            }
            pos += 3;
        }
        None
    }
}
