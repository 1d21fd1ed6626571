use super::traits::ConfigSection;
use crate::error::GenomeLabError;
use serde::{Deserialize, Serialize};

/// Ambient conditions the population is selected under; constant for the
/// whole run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    pub temperature_c: f64,
    pub ph: f64,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            temperature_c: 37.0,
            ph: 7.0,
        }
    }
}

impl ConfigSection for EnvironmentConfig {
    fn section_name() -> &'static str {
        "environment"
    }

    fn validate(&self) -> Result<(), GenomeLabError> {
        if !self.temperature_c.is_finite() || self.temperature_c < -273.15 {
            return Err(GenomeLabError::Configuration(
                "Temperature must be a finite value above absolute zero".to_string(),
            ));
        }
        if !(0.0..=14.0).contains(&self.ph) {
            return Err(GenomeLabError::Configuration(
                "pH must be between 0 and 14".to_string(),
            ));
        }
        Ok(())
    }
}
