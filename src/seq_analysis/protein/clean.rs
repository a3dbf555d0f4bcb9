//! Cleaning of NCBI ORIGIN-format sequence records.
//!
//! A record such as
//!
//! ```text
//! ORIGIN
//!         1 malwmrllpl lallalwgpd paaafvnqhl cgshlvealy lvcgergffy tpktrreaed
//!        61 lqvgqvelgg gpgagslqpl alegslqkrg iveqcctsic slyqlenycn
//! //
//! ```
//!
//! is reduced to the bare lowercase residue string. Marker removal is plain
//! substring removal, so a marker embedded in sequence text is dropped too.

use bio::alphabets;

pub const HEADER_MARKER: &str = "ORIGIN";
pub const END_MARKER: &str = "//";

/// Strip markers, digits, whitespace and every other non-letter, then lowercase.
///
/// The relative order of the surviving letters is preserved.
pub fn clean_sequence(raw: &str) -> String {
    raw.replace(HEADER_MARKER, "")
        .replace(END_MARKER, "")
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Soft length check; a mismatch is reported by the caller, never fatal.
pub fn length_matches(seq: &str, expected: usize) -> bool {
    seq.len() == expected
}

/// Whether every residue belongs to the 20-letter standard protein alphabet.
pub fn is_standard_protein(seq: &str) -> bool {
    alphabets::protein::alphabet().is_word(seq.as_bytes())
}
