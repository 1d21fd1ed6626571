pub mod environment;
pub mod manager;
pub mod simulation;
pub mod traits;

pub use environment::EnvironmentConfig;
pub use manager::{AppConfig, ConfigManager};
pub use simulation::SimulationConfig;
