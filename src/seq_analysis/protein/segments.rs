//! Splitting of the 110-residue preproinsulin precursor into its four
//! biological segments.
//!
//! | segment   | residues | length |
//! |-----------|----------|--------|
//! | leader    | 1-24     | 24     |
//! | B-chain   | 25-54    | 30     |
//! | C-peptide | 55-89    | 35     |
//! | A-chain   | 90-110   | 21     |

use log::error;
use std::fmt;
use std::ops::Range;

/// Length of human preproinsulin.
pub const PREPROINSULIN_LEN: usize = 110;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    Leader,
    BChain,
    CPeptide,
    AChain,
}

impl SegmentKind {
    /// All segments in sequence order.
    pub const ALL: [SegmentKind; 4] = [
        SegmentKind::Leader,
        SegmentKind::BChain,
        SegmentKind::CPeptide,
        SegmentKind::AChain,
    ];

    /// Half-open residue range within the precursor.
    pub fn range(self) -> Range<usize> {
        match self {
            SegmentKind::Leader => 0..24,
            SegmentKind::BChain => 24..54,
            SegmentKind::CPeptide => 54..89,
            SegmentKind::AChain => 89..110,
        }
    }

    pub fn expected_len(self) -> usize {
        self.range().len()
    }

    /// Name of the file this segment is persisted to.
    pub fn file_name(self) -> &'static str {
        match self {
            SegmentKind::Leader => "lsinsulin_seq_clean.txt",
            SegmentKind::BChain => "binsulin_seq_clean.txt",
            SegmentKind::CPeptide => "cinsulin_seq_clean.txt",
            SegmentKind::AChain => "ainsulin_seq_clean.txt",
        }
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SegmentKind::Leader => "leader",
            SegmentKind::BChain => "B-chain",
            SegmentKind::CPeptide => "C-peptide",
            SegmentKind::AChain => "A-chain",
        };
        f.write_str(name)
    }
}

/// The four segments of one precursor. Concatenated in order they
/// reconstruct the precursor exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segments {
    pub leader: String,
    pub b_chain: String,
    pub c_peptide: String,
    pub a_chain: String,
}

impl Segments {
    pub fn get(&self, kind: SegmentKind) -> &str {
        match kind {
            SegmentKind::Leader => &self.leader,
            SegmentKind::BChain => &self.b_chain,
            SegmentKind::CPeptide => &self.c_peptide,
            SegmentKind::AChain => &self.a_chain,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (SegmentKind, &str)> + '_ {
        SegmentKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }

    /// Leader + B + C + A.
    pub fn concat(&self) -> String {
        self.iter().map(|(_, seq)| seq).collect()
    }

    /// Mature insulin as one string: B-chain followed by A-chain.
    pub fn insulin(&self) -> String {
        [self.b_chain.as_str(), self.a_chain.as_str()].concat()
    }
}

/// Split a cleaned precursor into its segments.
///
/// Returns `None` when `seq` is not exactly [`PREPROINSULIN_LEN`] ASCII
/// residues; the discrepancy is logged, nothing is sliced.
pub fn split(seq: &str) -> Option<Segments> {
    if seq.len() != PREPROINSULIN_LEN || !seq.is_ascii() {
        error!(
            "sequence length is {}, expected {}; check the cleaned file",
            seq.chars().count(),
            PREPROINSULIN_LEN
        );
        return None;
    }
    let slice = |kind: SegmentKind| seq[kind.range()].to_string();
    Some(Segments {
        leader: slice(SegmentKind::Leader),
        b_chain: slice(SegmentKind::BChain),
        c_peptide: slice(SegmentKind::CPeptide),
        a_chain: slice(SegmentKind::AChain),
    })
}
