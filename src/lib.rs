use enzymes::Enzymes;
use lazy_static::lazy_static;

pub mod analysis;
pub mod composition;
pub mod dna_sequence;
pub mod enzymes;
pub mod error;
pub mod nucleotide;
pub mod open_reading_frame;
pub mod restriction_enzyme;

lazy_static! {
    // Built-in restriction enzyme catalog
    pub static ref ENZYMES: Enzymes = Enzymes::default();
}
