//! Rough molecular weight as the sum of free amino acid masses.
//!
//! Water lost to peptide bonds and disulfide formation is not subtracted, so
//! the estimate overshoots the true polymer mass.

use super::params::molecular_weight::{RESIDUE_WEIGHTS, STANDARD_RESIDUES};
use super::ResidueCount;
use bio::utils::TextSlice;

/// Counts of the 20 standard residues. Other letters are ignored.
pub fn count_residues(seq: TextSlice) -> ResidueCount {
    ResidueCount::count(seq, STANDARD_RESIDUES)
}

/// Molecular weight in Daltons, case-insensitive.
pub fn molecular_weight(seq: TextSlice) -> f64 {
    let counts = count_residues(seq);
    STANDARD_RESIDUES
        .iter()
        .map(|aa| counts.get(*aa) as f64 * RESIDUE_WEIGHTS[aa])
        .sum()
}

/// Signed deviation of `computed` from `reference`, in percent.
pub fn error_percentage(computed: f64, reference: f64) -> f64 {
    (computed - reference) / reference * 100.0
}
