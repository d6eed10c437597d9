use crate::{
    ENZYMES,
    composition::NucleotideCounts,
    dna_sequence::DNAsequence,
    enzymes::Enzymes,
    error::AnalysisError,
    open_reading_frame::{CodonTable, OpenReadingFrame},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The aggregate result of one analysis call. Serializes with the
/// camelCase field names callers expect; `restriction_sites` only holds
/// enzymes with at least one match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub nucleotide_count: NucleotideCounts,
    pub gc_content: f64,
    pub complementary_sequence: String,
    pub orfs: Vec<OpenReadingFrame>,
    pub restriction_sites: BTreeMap<String, Vec<usize>>,
}

/// Validates `raw` and runs the full analysis battery against the built-in
/// enzyme catalog and the standard codon table.
///
/// Validation failure rejects immediately; no partial result is produced.
/// The empty string is a valid sequence and yields an all-zero result with
/// a GC content of 0. Deterministic and stateless; concurrent calls need no
/// coordination.
pub fn analyze(raw: &str) -> Result<AnalysisResult, AnalysisError> {
    analyze_with(raw, &ENZYMES, &CodonTable::default())
}

/// As `analyze`, with a caller-supplied enzyme catalog and codon table.
pub fn analyze_with(
    raw: &str,
    enzymes: &Enzymes,
    codons: &CodonTable,
) -> Result<AnalysisResult, AnalysisError> {
    let seq = DNAsequence::from_sequence(raw)?;
    let nucleotide_count = NucleotideCounts::new_from_sequence(seq.forward());
    let gc_content = nucleotide_count.gc_percent();
    let complementary_sequence = seq.complement().get_forward_string();
    let orfs = OpenReadingFrame::find_orfs(seq.forward(), codons);
    let restriction_sites = find_restriction_sites(&seq, enzymes);
    Ok(AnalysisResult {
        nucleotide_count,
        gc_content,
        complementary_sequence,
        orfs,
        restriction_sites,
    })
}

/// Site positions per enzyme; enzymes without a single match are absent.
pub fn find_restriction_sites(
    seq: &DNAsequence,
    enzymes: &Enzymes,
) -> BTreeMap<String, Vec<usize>> {
    let mut ret = BTreeMap::new();
    for re in enzymes.restriction_enzymes() {
        let sites = re.get_sites(seq);
        if !sites.is_empty() {
            ret.insert(re.name.to_owned(), sites);
        }
    }
    ret
}
