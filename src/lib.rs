//! GenomeLab: directed evolution of a short DNA sequence under mutation
//! pressure and environmental selection.
//!
//! The [`engines::generation::EvolutionEngine`] owns the simulation loop:
//! codon-level mutation, translation, stability and structure evaluation,
//! environmental stress scoring and generational selection. Protein
//! physicochemistry is supplied through the [`analysis::ProteinAnalyzer`]
//! capability; [`analysis::ProtParamAnalyzer`] is the built-in
//! implementation.

pub mod analysis;
pub mod config;
pub mod engines;
pub mod error;
pub mod types;

pub use error::{GenomeLabError, Result};
