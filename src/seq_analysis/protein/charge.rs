//! Net charge of a protein across pH 0-14.
//!
//! Each ionizable side chain contributes its Henderson-Hasselbalch fraction:
//!
//! - basic (`k`, `h`, `r`): `n * 10^pKa / (10^pH + 10^pKa)` positive charge
//! - acidic (`y`, `c`, `d`, `e`): `n * 10^pH / (10^pH + 10^pKa)` negative charge
//!
//! Termini are not modelled.

use super::params::net_charge::{residues_with, Charge, CHARGED_RESIDUES, PH_MAX, PH_MIN, PKA_TABLE};
use super::ResidueCount;
use bio::utils::TextSlice;
use std::fmt;

/// Counts of the seven charge-contributing residues.
pub fn count_charged(seq: TextSlice) -> ResidueCount {
    ResidueCount::count(seq, &CHARGED_RESIDUES)
}

fn group_charge(counts: &ResidueCount, charge: Charge, ph: f64) -> f64 {
    let h = 10f64.powf(ph);
    residues_with(charge)
        .map(|aa| {
            let n = counts.get(aa) as f64;
            let k = 10f64.powf(PKA_TABLE[&aa].0);
            match charge {
                Charge::Positive => n * k / (h + k),
                Charge::Negative => n * h / (h + k),
            }
        })
        .sum()
}

/// Net charge at a single pH.
pub fn net_charge(counts: &ResidueCount, ph: f64) -> f64 {
    group_charge(counts, Charge::Positive, ph) - group_charge(counts, Charge::Negative, ph)
}

/// Net charge at every integer pH from 0 to 14.
pub fn charge_table(counts: &ResidueCount) -> ChargeTable {
    let rows = (PH_MIN..=PH_MAX)
        .map(|ph| {
            let ph = f64::from(ph);
            (ph, net_charge(counts, ph))
        })
        .collect();
    ChargeTable { rows }
}

/// `(pH, net charge)` pairs in ascending pH order.
#[derive(Debug, Clone, PartialEq)]
pub struct ChargeTable {
    rows: Vec<(f64, f64)>,
}

impl ChargeTable {
    pub fn rows(&self) -> &[(f64, f64)] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Net charge at `ph`, if it is one of the tabulated points.
    pub fn at(&self, ph: f64) -> Option<f64> {
        self.rows.iter().find(|(p, _)| *p == ph).map(|&(_, c)| c)
    }
}

impl fmt::Display for ChargeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "pH | net-charge")?;
        writeln!(f, "{}", "-".repeat(22))?;
        for (ph, charge) in &self.rows {
            writeln!(f, "{:<5.2} | {:>10.2}", ph, charge)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(pairs: &[(u8, usize)]) -> ResidueCount {
        pairs.iter().copied().collect()
    }

    #[test]
    fn counts_charged_residues() {
        let c = count_charged(b"krhde");
        for aa in b"krhde" {
            assert_eq!(c.get(*aa), 1);
        }
        assert_eq!(c.get(b'y'), 0);
        assert_eq!(c.get(b'c'), 0);
    }

    #[test]
    fn half_ionized_at_pka() {
        // histidine pKa is 6.00
        let c = counts(&[(b'h', 2)]);
        assert_eq!(net_charge(&c, 6.0), 1.0);
    }

    #[test]
    fn matches_henderson_hasselbalch_terms() {
        let c = counts(&[(b'k', 3), (b'r', 3), (b'd', 3), (b'e', 2)]);
        for ph in 0..=14 {
            let p = f64::from(ph);
            let h = 10f64.powf(p);
            let pos = 0.0
                + 3.0 * 10f64.powf(10.53) / (h + 10f64.powf(10.53))
                + 0.0 * 10f64.powf(6.00) / (h + 10f64.powf(6.00))
                + 3.0 * 10f64.powf(12.48) / (h + 10f64.powf(12.48));
            let neg = 0.0
                + 0.0 * h / (h + 10f64.powf(10.07))
                + 0.0 * h / (h + 10f64.powf(8.18))
                + 3.0 * h / (h + 10f64.powf(3.65))
                + 2.0 * h / (h + 10f64.powf(4.25));
            assert_eq!(net_charge(&c, p), pos - neg, "pH {}", ph);
        }
    }

    #[test]
    fn sign_flips_across_the_sweep() {
        let c = counts(&[(b'k', 3), (b'r', 3), (b'd', 3), (b'e', 2)]);
        let table = charge_table(&c);
        assert!(table.at(0.0).unwrap() > 5.99);
        assert!(table.at(14.0).unwrap() < -4.9);
    }

    #[test]
    fn no_charged_residues_is_neutral() {
        let table = charge_table(&count_charged(b"gavlip"));
        assert!(table.rows().iter().all(|&(_, c)| c == 0.0));
    }

    #[test]
    fn table_covers_ph_0_to_14() {
        let table = charge_table(&count_charged(b"krhde"));
        assert_eq!(table.len(), 15);
        let phs: Vec<f64> = table.rows().iter().map(|&(p, _)| p).collect();
        assert_eq!(phs.first(), Some(&0.0));
        assert_eq!(phs.last(), Some(&14.0));
        assert!(phs.windows(2).all(|w| w[1] - w[0] == 1.0));
        assert_eq!(table.at(7.5), None);
    }

    #[test]
    fn net_charge_decreases_with_ph() {
        let insulin = b"fvnqhlcgshlvealylvcgergffytpktgiveqcctsicslyqlenycn";
        let table = charge_table(&count_charged(insulin));
        assert!(table.rows().windows(2).all(|w| w[1].1 < w[0].1));
        assert!((table.at(0.0).unwrap() - 4.00).abs() < 0.01);
        assert!((table.at(7.0).unwrap() + 2.19).abs() < 0.01);
        assert!((table.at(14.0).unwrap() + 13.97).abs() < 0.01);
    }

    #[test]
    fn renders_header_and_rows() {
        let rendered = charge_table(&count_charged(b"krhde")).to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "pH | net-charge");
        assert_eq!(lines.len(), 2 + 15);
        assert!(lines[2].starts_with("0.00"));
        assert!(lines[16].starts_with("14.00"));
    }
}
