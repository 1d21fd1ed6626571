pub mod fitness;
pub mod stability;
pub mod stress;

pub use fitness::compose_fitness;
pub use stability::Evaluator;
pub use stress::survival_multiplier;
