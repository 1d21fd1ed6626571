pub mod evolution_engine;
pub mod genome;
pub mod operators;
pub mod progress;
pub mod translation;

pub use evolution_engine::{
    CancelToken, EvolutionConfig, EvolutionEngine, ProgressCallback,
};
pub use genome::Genome;
pub use operators::{mutate_codon, mutate_sequence};
pub use progress::{ChannelProgressCallback, ConsoleProgressCallback, ProgressMessage};
pub use translation::translate;
