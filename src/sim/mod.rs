//! Fixed-step driver loop.
//!
//! Owns the boat, the wave field, and the clock, and runs the per-tick
//! sequence: control tick (sample → throttle → steering) → wave
//! propagation → body integration → clock advance.

mod config;

pub use config::SimConfig;

use crate::resources::{GerstnerWaves, TimeManager};
use crate::utils::errors::SimError;
use crate::utils::rng::RngManager;
use crate::vehicles::Boat;
use log::info;

/// Player/AI control inputs for one tick. Range handling happens in the
/// propulsion unit; out-of-range values are clamped there, not here.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Controls {
    /// Throttle demand, nominally [0, 1]
    pub throttle: f64,
    /// Steering demand, nominally [-1, 1], positive to starboard
    pub steering: f64,
}

pub struct Simulation {
    boat: Boat,
    waves: GerstnerWaves,
    time: TimeManager,
}

impl Simulation {
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        config
            .validate()
            .map_err(|e| SimError::InvalidConfig(e.to_string()))?;

        let rng_manager = RngManager::new(config.seed);
        let mut waves = GerstnerWaves::new(&config.waves, &rng_manager);
        let mut boat = Boat::new(config.boat);
        boat.initialize(&mut waves, &mut rng_manager.get_rng("boat-audio"));

        info!(
            "simulation ready: boat '{}', timestep {} s, seed {}",
            boat.name(),
            config.timestep,
            config.seed
        );

        Ok(Self {
            boat,
            waves,
            time: TimeManager::new(config.timestep),
        })
    }

    /// Run one fixed tick.
    pub fn step(&mut self, controls: Controls) {
        let dt = self.time.delta_seconds();
        self.boat
            .step(&mut self.waves, controls.throttle, controls.steering, dt);
        self.waves.propagate(dt);
        self.boat.integrate(dt);
        self.time.advance();
    }

    /// Release oracle-held resources. Runs on drop as well, and is safe to
    /// call at any point, including before the first tick.
    pub fn shutdown(&mut self) {
        self.boat.teardown(&mut self.waves);
    }

    pub fn boat(&self) -> &Boat {
        &self.boat
    }

    pub fn boat_mut(&mut self) -> &mut Boat {
        &mut self.boat
    }

    pub fn waves(&self) -> &GerstnerWaves {
        &self.waves
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.time.elapsed_seconds()
    }

    pub fn ticks(&self) -> u64 {
        self.time.ticks()
    }
}

impl Drop for Simulation {
    fn drop(&mut self) {
        self.shutdown();
    }
}
