use crate::resources::WaveConfig;
use crate::utils::constants::{MAX_TIMESTEP, MIN_TIMESTEP};
use crate::vehicles::{BoatConfig, ConfigError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Top-level simulation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Physics timestep (s)
    pub timestep: f64,
    /// Master seed for wave phases and audio offsets
    pub seed: u64,
    pub boat: BoatConfig,
    pub waves: WaveConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            timestep: 0.02,
            seed: 42,
            boat: BoatConfig::default(),
            waves: WaveConfig::default(),
        }
    }
}

impl SimConfig {
    pub fn from_yaml<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: SimConfig = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_TIMESTEP..=MAX_TIMESTEP).contains(&self.timestep) {
            return Err(ConfigError::ValidationError(format!(
                "timestep {} outside [{}, {}]",
                self.timestep, MIN_TIMESTEP, MAX_TIMESTEP
            )));
        }
        self.boat.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn test_oversized_timestep_is_rejected() {
        let config = SimConfig {
            timestep: 0.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
