use crate::analysis::ProteinAnalyzer;
use crate::config::AppConfig;
use crate::engines::evaluation::{compose_fitness, survival_multiplier, Evaluator};
use crate::engines::generation::genome::{is_valid_genome, Genome};
use crate::engines::generation::operators::mutate_sequence;
use crate::engines::generation::translation::translate;
use crate::error::{GenomeLabError, Result};
use crate::types::{Champion, GenerationRecord, Individual, RunResult};
use chrono::Utc;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Run configuration for one simulation; immutable for the run's duration.
#[derive(Debug, Clone)]
pub struct EvolutionConfig {
    pub initial_genome: Genome,
    pub generations: usize,
    /// Per-codon mutation probability as a percentage.
    pub mutation_rate: f64,
    /// Must be even so selection can halve the population exactly.
    pub population_size: usize,
    pub temperature_c: f64,
    pub ph: f64,
    pub seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            initial_genome: "ATGCGATCGATCGATCGATCGATCGATCGATCGATCGATC".to_string(),
            generations: 20,
            mutation_rate: 1.0,
            population_size: 12,
            temperature_c: 37.0,
            ph: 7.0,
            seed: None,
        }
    }
}

impl EvolutionConfig {
    /// Reject invalid configurations before any simulation work begins.
    pub fn validate(&self) -> Result<()> {
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
        if self.generations == 0 {
            return Err(GenomeLabError::Configuration(
                "Generation count must be positive".to_string(),
            ));
        }
        if self.population_size == 0 {
            return Err(GenomeLabError::Configuration(
                "Population size must be positive".to_string(),
            ));
        }
        if self.population_size % 2 != 0 {
            return Err(GenomeLabError::Configuration(
                "Population size must be even to support halving selection".to_string(),
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

impl From<&AppConfig> for EvolutionConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            initial_genome: config.simulation.initial_genome.clone(),
            generations: config.simulation.num_generations,
            mutation_rate: config.simulation.mutation_rate,
            population_size: config.simulation.population_size,
            temperature_c: config.environment.temperature_c,
            ph: config.environment.ph,
            seed: config.simulation.seed,
        }
    }
}

pub trait ProgressCallback: Send {
    fn on_generation_start(&mut self, generation: usize);
    fn on_generation_complete(&mut self, generation: usize, mean_fitness: f64, best_fitness: f64);
}

/// Cooperative cancellation flag for long runs.
///
/// The engine checks it after each completed generation, never mid-way
/// through one, so a cancelled run still ends on a consistent population.
#[derive(Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// Orchestrates one simulation run: seeds the population, iterates
/// mutation, translation, evaluation and selection, and accumulates the
/// per-generation history.
pub struct EvolutionEngine {
    config: EvolutionConfig,
    evaluator: Evaluator,
    rng: StdRng,
}

impl EvolutionEngine {
    pub fn new(config: EvolutionConfig, analyzer: Arc<dyn ProteinAnalyzer>) -> Result<Self> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            config,
            evaluator: Evaluator::new(analyzer),
            rng,
        })
    }

    /// Run the full simulation to completion.
    pub fn run<C: ProgressCallback>(&mut self, callback: C) -> Result<RunResult> {
        self.run_with_cancel(callback, &CancelToken::new())
    }

    /// Run the full simulation, checking `cancel` after each completed
    /// generation. A cancelled run returns the history accumulated so far
    /// and the champion of the last completed generation.
    pub fn run_with_cancel<C: ProgressCallback>(
        &mut self,
        mut callback: C,
        cancel: &CancelToken,
    ) -> Result<RunResult> {
        let started_at = Utc::now();
        log::info!(
            "starting run: {} generations, population {}, mutation rate {}%",
            self.config.generations,
            self.config.population_size,
            self.config.mutation_rate
        );

        let mut population = self.initialize_population();
        let mut history = Vec::with_capacity(self.config.generations);
        let mut ranked: Vec<Individual> = Vec::new();
        let mut cancelled = false;

        for generation in 0..self.config.generations {
            callback.on_generation_start(generation);

            ranked = self.evaluate_population(&population);
            let mean_fitness = ranked.iter().map(|i| i.fitness).sum::<f64>() / ranked.len() as f64;

            // Truncation selection; the stable sort keeps insertion order
            // on fitness ties.
            ranked.sort_by(|a, b| {
                b.fitness
                    .partial_cmp(&a.fitness)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });

            let champion_helix_pct = ranked[0]
                .profile
                .as_ref()
                .map(|p| p.helix_pct)
                .unwrap_or(0.0);
            history.push(GenerationRecord {
                generation,
                mean_fitness,
                champion_helix_pct,
            });

            callback.on_generation_complete(generation, mean_fitness, ranked[0].fitness);

            population = next_population(&ranked);

            if cancel.is_cancelled() && generation + 1 < self.config.generations {
                log::info!("run cancelled after generation {}", generation);
                cancelled = true;
                break;
            }
        }

        let best = &ranked[0];
        Ok(RunResult {
            history,
            champion: Champion {
                genome: best.genome.clone(),
                protein: best.protein.clone(),
                profile: best.profile.clone(),
                fitness: best.fitness,
            },
            started_at,
            finished_at: Utc::now(),
            cancelled,
        })
    }

    /// Mutate and score a single genome once, outside any population.
    pub fn evolve_once(&mut self, genome: &str) -> Result<Individual> {
        if !is_valid_genome(genome) {
            return Err(GenomeLabError::Configuration(
                "Genome may only contain A, T, C and G".to_string(),
            ));
        }

        let mutation_rate = self.config.mutation_rate;
        let mutated = mutate_sequence(genome, mutation_rate, &mut self.rng);
        Ok(self.score_individual(mutated))
    }

    fn initialize_population(&self) -> Vec<Genome> {
        vec![self.config.initial_genome.clone(); self.config.population_size]
    }

    /// Mutate and score every individual.
    ///
    /// Each individual gets its own child random stream derived from the
    /// master stream, so parallel evaluation stays deterministic for a
    /// fixed seed.
    fn evaluate_population(&mut self, population: &[Genome]) -> Vec<Individual> {
        let seeds: Vec<u64> = (0..population.len()).map(|_| self.rng.gen()).collect();
        let mutation_rate = self.config.mutation_rate;

        population
            .par_iter()
            .zip(seeds.par_iter())
            .map(|(genome, &seed)| {
                let mut rng = StdRng::seed_from_u64(seed);
                let mutated = mutate_sequence(genome, mutation_rate, &mut rng);
                self.score_individual(mutated)
            })
            .collect()
    }

    fn score_individual(&self, genome: Genome) -> Individual {
        let protein = translate(&genome);
        let verdict = self.evaluator.stability(&protein);
        let profile = self.evaluator.physical_profile(&protein);
        let survival =
            survival_multiplier(profile.as_ref(), self.config.temperature_c, self.config.ph);
        let fitness = compose_fitness(&verdict, protein.len(), survival);

        Individual {
            genome,
            protein,
            profile,
            verdict,
            survival,
            fitness,
        }
    }
}

/// Refill the population from the ranked survivors: the top half, followed
/// by the same survivors again, so each appears exactly twice in rank
/// order.
fn next_population(ranked: &[Individual]) -> Vec<Genome> {
    let survivors = &ranked[..ranked.len() / 2];
    survivors
        .iter()
        .chain(survivors.iter())
        .map(|individual| individual.genome.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{StabilityStatus, StabilityVerdict};

    fn individual(genome: &str, fitness: f64) -> Individual {
        Individual {
            genome: genome.to_string(),
            protein: String::new(),
            profile: None,
            verdict: StabilityVerdict::neutral(StabilityStatus::TooShort),
            survival: 0.0,
            fitness,
        }
    }

    #[test]
    fn next_population_duplicates_top_half_in_order() {
        let ranked = vec![
            individual("AAA", 4.0),
            individual("TTT", 3.0),
            individual("CCC", 2.0),
            individual("GGG", 1.0),
        ];

        let next = next_population(&ranked);
        assert_eq!(next, vec!["AAA", "TTT", "AAA", "TTT"]);
    }

    #[test]
    fn next_population_keeps_size() {
        let ranked: Vec<Individual> = (0..12)
            .map(|i| individual("ATG", 12.0 - i as f64))
            .collect();

        assert_eq!(next_population(&ranked).len(), 12);
    }

    #[test]
    fn validation_rejects_bad_configurations() {
        assert!(EvolutionConfig::default().validate().is_ok());

        let mut config = EvolutionConfig::default();
        config.initial_genome = String::new();
        assert!(config.validate().is_err());

        let mut config = EvolutionConfig::default();
        config.initial_genome = "ATGU".to_string();
        assert!(config.validate().is_err());

        let mut config = EvolutionConfig::default();
        config.generations = 0;
        assert!(config.validate().is_err());

        let mut config = EvolutionConfig::default();
        config.population_size = 0;
        assert!(config.validate().is_err());

        let mut config = EvolutionConfig::default();
        config.population_size = 7;
        assert!(config.validate().is_err());

        let mut config = EvolutionConfig::default();
        config.mutation_rate = 101.0;
        assert!(config.validate().is_err());

        // Rate 0 is legal: it makes the mutator the identity function.
        let mut config = EvolutionConfig::default();
        config.mutation_rate = 0.0;
        assert!(config.validate().is_ok());
    }
}
