//! Built-in protein analyzer.
//!
//! Implements the classic ProtParam-style property calculations over the 20
//! standard amino acids: Guruprasad instability index, residue-class
//! secondary-structure fractions, isoelectric point by charge bisection,
//! average molecular weight, and aromaticity.

use crate::analysis::traits::ProteinAnalyzer;
use crate::error::{GenomeLabError, Result};

/// Map an amino acid byte to an index 0-19 in alphabetical one-letter
/// order (ACDEFGHIKLMNPQRSTVWY). Returns None for non-standard residues.
fn residue_index(aa: u8) -> Option<usize> {
    match aa {
        b'A' => Some(0),
        b'C' => Some(1),
        b'D' => Some(2),
        b'E' => Some(3),
        b'F' => Some(4),
        b'G' => Some(5),
        b'H' => Some(6),
        b'I' => Some(7),
        b'K' => Some(8),
        b'L' => Some(9),
        b'M' => Some(10),
        b'N' => Some(11),
        b'P' => Some(12),
        b'Q' => Some(13),
        b'R' => Some(14),
        b'S' => Some(15),
        b'T' => Some(16),
        b'V' => Some(17),
        b'W' => Some(18),
        b'Y' => Some(19),
        _ => None,
    }
}

/// Average residue weights in daltons, indexed by `residue_index`.
const RESIDUE_WEIGHTS: [f64; 20] = [
    89.09,  // A
    121.16, // C
    133.10, // D
    147.13, // E
    165.19, // F
    75.03,  // G
    155.16, // H
    131.17, // I
    146.19, // K
    131.17, // L
    149.21, // M
    132.12, // N
    115.13, // P
    146.15, // Q
    174.20, // R
    105.09, // S
    119.12, // T
    117.15, // V
    204.23, // W
    181.19, // Y
];

/// Weight of one water molecule, released per peptide bond.
const WATER: f64 = 18.015;

/// Side-chain and terminal pKa values (EMBOSS set).
const PKA_NTERM: f64 = 9.69;
const PKA_CTERM: f64 = 2.34;
const PKA_D: f64 = 3.65;
const PKA_E: f64 = 4.25;
const PKA_C: f64 = 8.18;
const PKA_Y: f64 = 10.07;
const PKA_H: f64 = 6.00;
const PKA_K: f64 = 10.53;
const PKA_R: f64 = 12.48;

/// Guruprasad dipeptide instability weight values (DIWV).
///
/// `DIWV[first][second]` is the contribution of the dipeptide
/// first→second; both axes follow `residue_index` order
/// (ACDEFGHIKLMNPQRSTVWY).
#[rustfmt::skip]
const DIWV: [[f64; 20]; 20] = [
    // A
    [1.0, 44.94, -7.49, 1.0, 1.0, 1.0, -7.49, 1.0, 1.0, 1.0, 1.0, 1.0, 20.26, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0],
    // C
    [1.0, 1.0, 20.26, 1.0, 1.0, 1.0, 33.60, 1.0, 1.0, 20.26, 33.60, 1.0, 20.26, -6.54, 1.0, 1.0, 33.60, -6.54, 24.68, 1.0],
    // D
    [1.0, 1.0, 1.0, 1.0, -6.54, 1.0, 1.0, 1.0, -7.49, 1.0, 1.0, 1.0, 1.0, 1.0, -6.54, 20.26, -14.03, 1.0, 1.0, 1.0],
    // E
    [1.0, 44.94, 20.26, 33.60, 1.0, 1.0, -6.54, 20.26, 1.0, 1.0, 1.0, 1.0, 20.26, 20.26, 1.0, 20.26, 1.0, 1.0, -14.03, 1.0],
    // F
    [1.0, 1.0, 13.34, 1.0, 1.0, 1.0, 1.0, 1.0, -14.03, 1.0, 1.0, 1.0, 20.26, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 33.60],
    // G
    [-7.49, 1.0, 1.0, -6.54, 1.0, 13.34, 1.0, -7.49, -7.49, 1.0, 1.0, -7.49, 1.0, 1.0, 1.0, 1.0, -7.49, 1.0, 13.34, -7.49],
    // H
    [1.0, 1.0, 1.0, 1.0, -9.37, -9.37, 1.0, 44.94, 24.68, 1.0, 1.0, 24.68, -1.88, 1.0, 1.0, 1.0, -6.54, 1.0, -1.88, 44.94],
    // I
    [1.0, 1.0, 1.0, 44.94, 1.0, 1.0, 13.34, 1.0, -7.49, 20.26, 1.0, 1.0, -1.88, 1.0, 1.0, 1.0, 1.0, -7.49, 1.0, 1.0],
    // K
    [1.0, 1.0, 1.0, 1.0, 1.0, -7.49, 1.0, -7.49, 1.0, -7.49, 33.60, 1.0, -6.54, 24.64, 33.60, 1.0, 1.0, -7.49, 1.0, 1.0],
    // L
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, -7.49, 1.0, 1.0, 1.0, 20.26, 33.60, 20.26, 1.0, 1.0, 1.0, 24.68, 1.0],
    // M
    [13.34, 1.0, 1.0, 1.0, 1.0, 1.0, 58.28, 1.0, 1.0, 1.0, -1.88, 1.0, 44.94, -6.54, -6.54, 44.94, -1.88, 1.0, 1.0, 24.68],
    // N
    [1.0, -1.88, 1.0, 1.0, -14.03, -14.03, 1.0, 44.94, 24.68, 1.0, 1.0, 1.0, -1.88, -6.54, 1.0, 1.0, -7.49, 1.0, -9.37, 1.0],
    // P
    [20.26, -6.54, -6.54, 18.38, 20.26, 1.0, 1.0, 1.0, 1.0, 1.0, -6.54, 1.0, 20.26, 20.26, -6.54, 20.26, 1.0, 20.26, -1.88, 1.0],
    // Q
    [1.0, -6.54, 20.26, 20.26, -6.54, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 20.26, 20.26, 1.0, 44.94, 1.0, -6.54, 1.0, -6.54],
    // R
    [1.0, 1.0, 1.0, 1.0, 1.0, -7.49, 20.26, 1.0, 1.0, 1.0, 1.0, 13.34, 20.26, 20.26, 58.28, 44.94, 1.0, 1.0, 58.28, -6.54],
    // S
    [1.0, 33.60, 1.0, 20.26, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 44.94, 20.26, 20.26, 20.26, 1.0, 1.0, 1.0, 1.0],
    // T
    [1.0, 1.0, 1.0, 20.26, 13.34, -7.49, 1.0, 1.0, 1.0, 1.0, 1.0, -14.03, 1.0, -6.54, 1.0, 1.0, 1.0, 1.0, -14.03, 1.0],
    // V
    [1.0, 1.0, -14.03, 1.0, 1.0, -7.49, 1.0, 1.0, -1.88, 1.0, 1.0, 1.0, 20.26, 1.0, 1.0, 1.0, -7.49, 1.0, 1.0, -6.54],
    // W
    [-14.03, 1.0, 1.0, 1.0, 1.0, -9.37, 24.68, 1.0, 1.0, 13.34, 24.68, 13.34, 1.0, 1.0, 1.0, 1.0, -14.03, -7.49, 1.0, 1.0],
    // Y
    [24.68, 1.0, 24.68, -6.54, 1.0, -7.49, 13.34, 1.0, 1.0, 1.0, 44.94, 1.0, 13.34, 1.0, -15.91, 1.0, -7.49, 1.0, -9.37, 13.34],
];

/// Residue classes behind the secondary-structure fractions.
const HELIX_RESIDUES: &[u8] = b"VIYFWL";
const TURN_RESIDUES: &[u8] = b"NPGS";
const SHEET_RESIDUES: &[u8] = b"EMAL";

const AROMATIC_RESIDUES: &[u8] = b"FWY";

/// Table-driven analyzer over the 20 standard amino acids.
#[derive(Debug, Default, Clone)]
pub struct ProtParamAnalyzer;

impl ProtParamAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Validate a protein sequence and map it to residue indices.
    fn checked_residues(&self, protein: &str) -> Result<Vec<usize>> {
        if protein.is_empty() {
            return Err(GenomeLabError::Analyzer(
                "empty protein sequence".to_string(),
            ));
        }

        protein
            .bytes()
            .map(|b| {
                residue_index(b).ok_or_else(|| {
                    GenomeLabError::Analyzer(format!(
                        "unsupported residue '{}' in protein sequence",
                        b as char
                    ))
                })
            })
            .collect()
    }

    fn class_fraction(&self, protein: &str, class: &[u8]) -> Result<f64> {
        self.checked_residues(protein)?;
        let members = protein.bytes().filter(|b| class.contains(b)).count();
        Ok(members as f64 / protein.len() as f64)
    }

    /// Net charge at a given pH via Henderson-Hasselbalch.
    fn net_charge(&self, protein: &str, ph: f64) -> f64 {
        let mut charge = 0.0;

        charge += 1.0 / (1.0 + 10_f64.powf(ph - PKA_NTERM));
        charge -= 1.0 / (1.0 + 10_f64.powf(PKA_CTERM - ph));

        for aa in protein.bytes() {
            match aa {
                b'D' => charge -= 1.0 / (1.0 + 10_f64.powf(PKA_D - ph)),
                b'E' => charge -= 1.0 / (1.0 + 10_f64.powf(PKA_E - ph)),
                b'C' => charge -= 1.0 / (1.0 + 10_f64.powf(PKA_C - ph)),
                b'Y' => charge -= 1.0 / (1.0 + 10_f64.powf(PKA_Y - ph)),
                b'H' => charge += 1.0 / (1.0 + 10_f64.powf(ph - PKA_H)),
                b'K' => charge += 1.0 / (1.0 + 10_f64.powf(ph - PKA_K)),
                b'R' => charge += 1.0 / (1.0 + 10_f64.powf(ph - PKA_R)),
                _ => {}
            }
        }

        charge
    }
}

impl ProteinAnalyzer for ProtParamAnalyzer {
    fn instability_index(&self, protein: &str) -> Result<f64> {
        let residues = self.checked_residues(protein)?;

        let dipeptide_sum: f64 = residues
            .windows(2)
            .map(|pair| DIWV[pair[0]][pair[1]])
            .sum();

        Ok(10.0 / residues.len() as f64 * dipeptide_sum)
    }

    fn secondary_structure_fraction(&self, protein: &str) -> Result<(f64, f64, f64)> {
        let helix = self.class_fraction(protein, HELIX_RESIDUES)?;
        let turn = self.class_fraction(protein, TURN_RESIDUES)?;
        let sheet = self.class_fraction(protein, SHEET_RESIDUES)?;
        Ok((helix, turn, sheet))
    }

    fn isoelectric_point(&self, protein: &str) -> Result<f64> {
        self.checked_residues(protein)?;

        // Bisection over the full pH scale; the charge function is
        // monotonically decreasing in pH.
        let mut low = 0.0_f64;
        let mut high = 14.0_f64;

        for _ in 0..100 {
            let mid = (low + high) / 2.0;
            let charge = self.net_charge(protein, mid);
            if charge.abs() < 0.001 {
                return Ok(mid);
            }
            if charge > 0.0 {
                low = mid;
            } else {
                high = mid;
            }
        }

        Ok((low + high) / 2.0)
    }

    fn molecular_weight(&self, protein: &str) -> Result<f64> {
        let residues = self.checked_residues(protein)?;

        let total: f64 = residues.iter().map(|&i| RESIDUE_WEIGHTS[i]).sum();
        Ok(total - (residues.len() as f64 - 1.0) * WATER)
    }

    fn aromaticity(&self, protein: &str) -> Result<f64> {
        self.class_fraction(protein, AROMATIC_RESIDUES)
    }
}
