use lazy_static::lazy_static;
use phf::phf_map;
use std::collections::BTreeMap;

pub mod net_charge {
    use super::*;

    /// The pH sweep is evaluated at every integer from `PH_MIN` to `PH_MAX` inclusive.
    pub const PH_MIN: u8 = 0;
    pub const PH_MAX: u8 = 14;

    /// Charge-contributing residues, in the order their terms are summed.
    pub const CHARGED_RESIDUES: [u8; 7] = [b'y', b'c', b'k', b'h', b'r', b'd', b'e'];

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Charge {
        /// Positive while protonated (basic side chains).
        Positive,
        /// Negative once deprotonated (acidic side chains).
        Negative,
    }

    lazy_static! {
        pub static ref PKA_TABLE: BTreeMap<u8, (f64, Charge)> = {
            let mut m = BTreeMap::new();
            m.insert(b'y', (10.07, Charge::Negative));
            m.insert(b'c', (8.18, Charge::Negative));
            m.insert(b'k', (10.53, Charge::Positive));
            m.insert(b'h', (6.00, Charge::Positive));
            m.insert(b'r', (12.48, Charge::Positive));
            m.insert(b'd', (3.65, Charge::Negative));
            m.insert(b'e', (4.25, Charge::Negative));
            m
        };
    }

    /// Residues of one charge group, in summation order.
    pub fn residues_with(charge: Charge) -> impl Iterator<Item = u8> {
        CHARGED_RESIDUES
            .into_iter()
            .filter(move |aa| PKA_TABLE[aa].1 == charge)
    }
}

pub mod molecular_weight {
    use super::*;

    /// Literature mass of mature human insulin, in Daltons.
    pub const MATURE_INSULIN_MASS: f64 = 5807.63;

    /// The 20 standard residues, in the order their masses are summed.
    pub const STANDARD_RESIDUES: &[u8; 20] = b"ACDEFGHIKLMNPQRSTVWY";

    /// Free amino acid masses (Da). Peptide-bond water loss is not subtracted.
    pub static RESIDUE_WEIGHTS: phf::Map<u8, f64> = phf_map! {
        b'A' => 89.09,
        b'C' => 121.16,
        b'D' => 133.10,
        b'E' => 147.13,
        b'F' => 165.19,
        b'G' => 75.07,
        b'H' => 155.16,
        b'I' => 131.17,
        b'K' => 146.19,
        b'L' => 131.17,
        b'M' => 149.21,
        b'N' => 132.12,
        b'P' => 115.13,
        b'Q' => 146.15,
        b'R' => 174.20,
        b'S' => 105.09,
        b'T' => 119.12,
        b'V' => 117.15,
        b'W' => 204.23,
        b'Y' => 181.19,
    };
}

#[cfg(test)]
mod tests {
    use super::molecular_weight::*;
    use super::net_charge::*;

    #[test]
    fn charge_groups_keep_summation_order() {
        let basic: Vec<u8> = residues_with(Charge::Positive).collect();
        let acidic: Vec<u8> = residues_with(Charge::Negative).collect();
        assert_eq!(basic, b"khr");
        assert_eq!(acidic, b"ycde");
    }

    #[test]
    fn every_charged_residue_has_a_pka() {
        assert_eq!(PKA_TABLE.len(), CHARGED_RESIDUES.len());
        assert_eq!(PKA_TABLE[&b'h'].0, 6.00);
        assert_eq!(PKA_TABLE[&b'r'].0, 12.48);
    }

    #[test]
    fn every_standard_residue_has_a_weight() {
        assert_eq!(RESIDUE_WEIGHTS.len(), 20);
        for aa in STANDARD_RESIDUES.iter() {
            assert!(RESIDUE_WEIGHTS.contains_key(aa), "missing {}", *aa as char);
        }
    }
}
