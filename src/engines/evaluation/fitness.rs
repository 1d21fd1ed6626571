use crate::types::StabilityVerdict;

/// Compose stability, protein length, and environmental survival into one
/// scalar score; higher is better.
///
/// Survival acts as a multiplier, so environmental unfitness zeroes the
/// score regardless of how stable or long the protein is.
pub fn compose_fitness(verdict: &StabilityVerdict, protein_len: usize, survival: f64) -> f64 {
    (100.0 - verdict.score + protein_len as f64 * 0.5) * (survival / 100.0)
}
