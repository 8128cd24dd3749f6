use serde::{Deserialize, Serialize};

/// Parameters for the procedural wave field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaveConfig {
    /// Number of superposed wave trains
    pub wave_count: usize,
    /// Amplitude budget shared across the trains (m)
    pub amplitude: f64,
    /// Reference wavelength; individual trains jitter around it (m)
    pub wavelength: f64,
    /// Phase speed of the reference train (m/s)
    pub speed: f64,
    /// Mean travel direction (degrees, 0 = +Z)
    pub direction_deg: f64,
    /// Maximum angular deviation of a train from the mean (degrees)
    pub directional_spread_deg: f64,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            wave_count: 6,
            amplitude: 0.35,
            wavelength: 9.0,
            speed: 1.2,
            direction_deg: 0.0,
            directional_spread_deg: 35.0,
        }
    }
}

impl WaveConfig {
    /// Mirror-flat water. Handy for tests and harbor scenes.
    pub fn calm() -> Self {
        Self {
            amplitude: 0.0,
            ..Default::default()
        }
    }
}
