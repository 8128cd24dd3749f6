use crate::components::PropulsionConfig;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid boat configuration: {0}")]
    ValidationError(String),
}

/// Mass properties and motion limits of the hull
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyConfig {
    /// Hull mass (kg)
    pub mass: f64,
    /// Principal moments of inertia about the body axes (kg·m²)
    pub inertia: Vector3<f64>,
    /// Linear speed cap (m/s)
    pub max_velocity: f64,
    /// Angular speed cap (rad/s)
    pub max_angular_velocity: f64,
}

impl Default for BodyConfig {
    fn default() -> Self {
        Self {
            mass: 1200.0,
            inertia: Vector3::new(1500.0, 2000.0, 800.0),
            max_velocity: 30.0,
            max_angular_velocity: 3.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoatConfig {
    /// Boat identification
    pub name: String,

    pub body: BodyConfig,
    pub propulsion: PropulsionConfig,
}

impl Default for BoatConfig {
    fn default() -> Self {
        Self {
            name: "Runabout".to_string(),
            body: BodyConfig::default(),
            propulsion: PropulsionConfig::default(),
        }
    }
}

impl BoatConfig {
    pub fn from_yaml<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: BoatConfig = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.body.mass <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "mass must be positive, got {}",
                self.body.mass
            )));
        }
        if self.body.inertia.iter().any(|&i| i <= 0.0) {
            return Err(ConfigError::ValidationError(
                "inertia components must be positive".to_string(),
            ));
        }
        if self.propulsion.power < 0.0 || self.propulsion.accel_rate < 0.0 {
            return Err(ConfigError::ValidationError(
                "power and accel_rate must be non-negative".to_string(),
            ));
        }
        if self.propulsion.rudder_axis.norm() == 0.0 {
            return Err(ConfigError::ValidationError(
                "rudder_axis must not be zero".to_string(),
            ));
        }
        Ok(())
    }
}
