use super::{environment::EnvironmentConfig, simulation::SimulationConfig, traits::ConfigSection};
use crate::error::GenomeLabError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, RwLock};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    pub simulation: SimulationConfig,
    pub environment: EnvironmentConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), GenomeLabError> {
        self.simulation.validate()?;
        self.environment.validate()?;
        Ok(())
    }
}

pub struct ConfigManager {
    config: Arc<RwLock<AppConfig>>,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(AppConfig::default())),
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), GenomeLabError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| GenomeLabError::Configuration(format!("Failed to read config: {}", e)))?;

        let config: AppConfig = toml::from_str(&contents)
            .map_err(|e| GenomeLabError::Configuration(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        *self.config.write().unwrap() = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), GenomeLabError> {
        let config = self.config.read().unwrap();
        let toml_str = toml::to_string_pretty(&*config)
            .map_err(|e| GenomeLabError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)
            .map_err(|e| GenomeLabError::Configuration(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    pub fn get(&self) -> AppConfig {
        self.config.read().unwrap().clone()
    }

    pub fn update<F>(&self, f: F) -> Result<(), GenomeLabError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut config = self.config.write().unwrap();
        f(&mut config);
        config.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn parses_a_full_toml_document() {
        let config: AppConfig = toml::from_str(
            r#"
            [simulation]
            initial_genome = "ATGAAACCC"
            num_generations = 10
            mutation_rate = 2.5
            population_size = 8
            seed = 42

            [environment]
            temperature_c = 55.0
            ph = 4.5
            "#,
        )
        .unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.simulation.num_generations, 10);
        assert_eq!(config.simulation.seed, Some(42));
        assert!((config.environment.temperature_c - 55.0).abs() < 1e-12);
    }

    #[test]
    fn update_rejects_invalid_edits() {
        let manager = ConfigManager::new();

        let result = manager.update(|config| {
            config.simulation.population_size = 7;
        });
        assert!(result.is_err());
    }

    #[test]
    fn validation_rejects_out_of_range_ph() {
        let mut config = AppConfig::default();
        config.environment.ph = 15.0;
        assert!(config.validate().is_err());
    }
}
