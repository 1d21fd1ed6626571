use crate::error::Result;

/// Physicochemical analysis of a protein sequence.
///
/// The evolution engine treats the analyzer as an injected capability so
/// evaluation logic can be exercised against fixed or failing
/// implementations. Implementations must return a distinguishable error for
/// input they cannot interpret (empty sequences, non-standard residues)
/// rather than a partial result.
pub trait ProteinAnalyzer: Send + Sync {
    /// Guruprasad instability index; values below 40 indicate a stable
    /// protein.
    fn instability_index(&self, protein: &str) -> Result<f64>;

    /// (helix, turn, sheet) residue fractions, each in [0, 1], summing to
    /// at most 1 per class.
    fn secondary_structure_fraction(&self, protein: &str) -> Result<(f64, f64, f64)>;

    /// pH at which the protein carries no net charge.
    fn isoelectric_point(&self, protein: &str) -> Result<f64>;

    /// Average molecular weight in daltons.
    fn molecular_weight(&self, protein: &str) -> Result<f64>;

    /// Fraction of aromatic residues (F, W, Y).
    fn aromaticity(&self, protein: &str) -> Result<f64>;
}
