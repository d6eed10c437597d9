use serde::{Deserialize, Serialize};

use crate::dna_sequence::DNAsequence;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RestrictionEnzyme {
    pub name: String,
    pub sequence: String,
    pub note: Option<String>,
}

impl RestrictionEnzyme {
    /// All start positions where the recognition sequence matches exactly.
    /// The scan advances by one base after each position, so overlapping
    /// occurrences are all reported.
    pub fn get_sites(&self, seq: &DNAsequence) -> Vec<usize> {
        let mut ret = vec![];
        let recognition_len = self.sequence.len();
        let forward = seq.forward();
        if recognition_len == 0 || forward.len() < recognition_len {
            return ret;
        }
        let pattern = self.sequence.as_bytes();
        for start in 0..=(forward.len() - recognition_len) {
            if &forward[start..start + recognition_len] == pattern {
                ret.push(start);
            }
        }
        ret
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enzyme(name: &str, sequence: &str) -> RestrictionEnzyme {
        RestrictionEnzyme {
            name: name.to_string(),
            sequence: sequence.to_string(),
            note: None,
        }
    }

    fn seq(s: &str) -> DNAsequence {
        DNAsequence::from_sequence(s).unwrap()
    }

    #[test]
    fn test_single_site() {
        let sites = enzyme("EcoRI", "GAATTC").get_sites(&seq("GAATTC"));
        assert_eq!(sites, vec![0]);
    }

    #[test]
    fn test_site_at_offset() {
        let sites = enzyme("EcoRI", "GAATTC").get_sites(&seq("ATTGAATTC"));
        assert_eq!(sites, vec![3]);
    }

    #[test]
    fn test_multiple_sites() {
        let sites = enzyme("EcoRI", "GAATTC").get_sites(&seq("GAATTCGAATTC"));
        assert_eq!(sites, vec![0, 6]);
    }

    #[test]
    fn test_overlapping_sites() {
        // The second NotI site begins inside the first one.
        let sites = enzyme("NotI", "GCGGCCGC").get_sites(&seq("GCGGCCGCGGCCGC"));
        assert_eq!(sites, vec![0, 6]);
    }

    #[test]
    fn test_no_sites() {
        assert!(enzyme("BamHI", "GGATCC").get_sites(&seq("ATATATAT")).is_empty());
    }

    #[test]
    fn test_sequence_shorter_than_pattern() {
        assert!(enzyme("NotI", "GCGGCCGC").get_sites(&seq("GCG")).is_empty());
        assert!(enzyme("NotI", "GCGGCCGC").get_sites(&seq("")).is_empty());
    }

    #[test]
    fn test_reported_positions_match_pattern() {
        let re = enzyme("HindIII", "AAGCTT");
        let dna = seq("AAGCTTAAAAGCTTAAGCTT");
        for pos in re.get_sites(&dna) {
            assert_eq!(
                &dna.forward()[pos..pos + re.sequence.len()],
                re.sequence.as_bytes()
            );
        }
    }
}
