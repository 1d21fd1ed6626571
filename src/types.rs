use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Physicochemical snapshot of a protein, recomputed every generation.
///
/// Absence (`Option::None` at the call sites) means the protein was too
/// short for the analyzer to produce a meaningful result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicalProfile {
    /// Alpha-helix content as a percentage.
    pub helix_pct: f64,
    /// Beta-sheet content as a percentage.
    pub sheet_pct: f64,
    /// pH at which the protein carries no net charge.
    pub isoelectric_point: f64,
    /// Molecular weight in kilodaltons.
    pub weight_kda: f64,
    /// Fraction of aromatic residues, in [0, 1].
    pub aromaticity: f64,
}

/// Categorical stability classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StabilityStatus {
    TooShort,
    Stable,
    Unstable,
    Error,
}

/// Numeric instability score plus its classification.
///
/// `TooShort` and `Error` both carry the neutral score 100 so degenerate
/// proteins rank below anything the analyzer could actually score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StabilityVerdict {
    pub score: f64,
    pub status: StabilityStatus,
}

impl StabilityVerdict {
    pub fn neutral(status: StabilityStatus) -> Self {
        Self {
            score: 100.0,
            status,
        }
    }
}

/// One simulation member together with its per-generation derived state.
///
/// Only the genome survives into the next generation; everything else is
/// recomputed from scratch each step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Individual {
    pub genome: String,
    pub protein: String,
    pub profile: Option<PhysicalProfile>,
    pub verdict: StabilityVerdict,
    pub survival: f64,
    pub fitness: f64,
}

/// Immutable per-generation summary, appended to the run history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRecord {
    pub generation: usize,
    /// Mean fitness over the whole population before selection.
    pub mean_fitness: f64,
    /// Helix percentage of the leading individual, 0 when it has no profile.
    pub champion_helix_pct: f64,
}

/// Highest-fitness individual of the final generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Champion {
    pub genome: String,
    pub protein: String,
    pub profile: Option<PhysicalProfile>,
    pub fitness: f64,
}

/// Complete result of one simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunResult {
    pub history: Vec<GenerationRecord>,
    pub champion: Champion,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    /// True when the run was cancelled before reaching the configured
    /// generation count; the history covers the completed generations.
    pub cancelled: bool,
}
