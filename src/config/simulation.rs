use super::traits::ConfigSection;
use crate::engines::generation::genome::is_valid_genome;
use crate::error::GenomeLabError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub initial_genome: String,
    pub num_generations: usize,
    /// Per-codon mutation probability as a percentage.
    pub mutation_rate: f64,
    pub population_size: usize,
    /// Fixed seed for reproducible runs; omit for entropy seeding.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            initial_genome: "ATGCGATCGATCGATCGATCGATCGATCGATCGATCGATC".to_string(),
            num_generations: 20,
            mutation_rate: 1.0,
            population_size: 12,
            seed: None,
        }
    }
}

impl ConfigSection for SimulationConfig {
    fn section_name() -> &'static str {
        "simulation"
    }

    fn validate(&self) -> Result<(), GenomeLabError> {
        if self.initial_genome.is_empty() {
            return Err(GenomeLabError::Configuration(
                "Initial genome must not be empty".to_string(),
            ));
        }
        if !is_valid_genome(&self.initial_genome) {
            return Err(GenomeLabError::Configuration(
                "Initial genome may only contain A, T, C and G".to_string(),
            ));
        }
        if self.num_generations == 0 {
            return Err(GenomeLabError::Configuration(
                "Generation count must be positive".to_string(),
            ));
        }
        if self.population_size == 0 || self.population_size % 2 != 0 {
            return Err(GenomeLabError::Configuration(
                "Population size must be a positive even number".to_string(),
            ));
        }
        if !(0.0..=100.0).contains(&self.mutation_rate) {
            return Err(GenomeLabError::Configuration(
                "Mutation rate must be a percentage between 0 and 100".to_string(),
            ));
        }
        Ok(())
    }
}
