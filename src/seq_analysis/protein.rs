//! Protein sequence analysis for human preproinsulin.
//!
//! The pipeline is a chain of pure stages:
//!
//! 1. [clean](clean/index.html) strips database markup from a raw record
//! 2. [segments](segments/index.html) splits the 110-residue precursor into
//!    leader, B-chain, C-peptide and A-chain
//! 3. [weight](weight/index.html) estimates the molecular weight of insulin (B + A)
//! 4. [charge](charge/index.html) sweeps the net charge of insulin over pH 0-14
//!
//! # Example
//!
//! ```
//! use preproinsulin::seq_analysis::protein::{charge, clean, segments, weight};
//! let raw = "ORIGIN\n 1 malwmrllpl lallalwgpd paaafvnqhl cgshlvealy lvcgergffy tpktrreaed\n\
//!            61 lqvgqvelgg gpgagslqpl alegslqkrg iveqcctsic slyqlenycn\n//\n";
//! let seq = clean::clean_sequence(raw);
//! let parts = segments::split(&seq).unwrap();
//! let insulin = parts.insulin();
//! let mw = weight::molecular_weight(insulin.as_bytes());
//! let table = charge::charge_table(&charge::count_charged(insulin.as_bytes()));
//! assert!(mw > 6000.0);
//! assert_eq!(table.len(), 15);
//! ```

pub mod charge;
pub mod clean;
pub mod params;
pub mod segments;
pub mod weight;

use bio::utils::TextSlice;
use std::collections::BTreeMap;

/// Occurrence counts of an enumerated set of residues within one sequence.
///
/// Counting is case-insensitive; keys are stored lowercase. Residues outside
/// the enumerated set are not counted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResidueCount {
    counts: BTreeMap<u8, usize>,
}

impl ResidueCount {
    /// Count every residue of `alphabet` in `seq`.
    pub fn count(seq: TextSlice, alphabet: &[u8]) -> Self {
        let mut counts: BTreeMap<u8, usize> = alphabet
            .iter()
            .map(|aa| (aa.to_ascii_lowercase(), 0))
            .collect();
        for aa in seq {
            if let Some(n) = counts.get_mut(&aa.to_ascii_lowercase()) {
                *n += 1;
            }
        }
        ResidueCount { counts }
    }

    /// Occurrences of `residue`, zero if it is absent or not enumerated.
    pub fn get(&self, residue: u8) -> usize {
        self.counts
            .get(&residue.to_ascii_lowercase())
            .copied()
            .unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, usize)> + '_ {
        self.counts.iter().map(|(&aa, &n)| (aa, n))
    }
}

impl FromIterator<(u8, usize)> for ResidueCount {
    fn from_iter<I: IntoIterator<Item = (u8, usize)>>(iter: I) -> Self {
        let mut counts = BTreeMap::new();
        for (aa, n) in iter {
            *counts.entry(aa.to_ascii_lowercase()).or_insert(0) += n;
        }
        ResidueCount { counts }
    }
}
