mod body;
mod config;

pub use body::BoatBody;
pub use config::{BoatConfig, BodyConfig, ConfigError};

use crate::components::{PropulsionUnit, RudderVisual};
use crate::traits::WaveOracle;
use log::info;
use rand::Rng;

/// A watercraft: rigid hull, one propulsion unit, one rudder visual.
#[derive(Debug, Clone)]
pub struct Boat {
    name: String,
    body: BoatBody,
    engine: PropulsionUnit,
    rudder: RudderVisual,
}

impl Boat {
    pub fn new(config: BoatConfig) -> Self {
        Self {
            name: config.name,
            body: BoatBody::new(&config.body),
            engine: PropulsionUnit::new(config.propulsion),
            rudder: RudderVisual::new(),
        }
    }

    /// Register the engine with the wave oracle.
    pub fn initialize<R: Rng>(&mut self, oracle: &mut dyn WaveOracle, rng: &mut R) {
        self.engine.initialize(oracle, rng);
        info!("boat '{}' initialized", self.name);
    }

    /// One control tick: sample submersion, then throttle, then steering.
    /// Forces land in the body's accumulators; call [`Boat::integrate`]
    /// afterwards to turn them into motion.
    pub fn step(&mut self, oracle: &mut dyn WaveOracle, throttle: f64, steering: f64, dt: f64) {
        self.engine.step(&self.body, oracle, dt);
        self.engine.accelerate(&mut self.body, throttle);
        self.engine.turn(&mut self.body, &mut self.rudder, steering);
    }

    pub fn integrate(&mut self, dt: f64) {
        self.body.integrate(dt);
    }

    /// Release oracle-held resources. Safe without prior initialization.
    pub fn teardown(&mut self, oracle: &mut dyn WaveOracle) {
        self.engine.teardown(oracle);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn body(&self) -> &BoatBody {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut BoatBody {
        &mut self.body
    }

    pub fn engine(&self) -> &PropulsionUnit {
        &self.engine
    }

    pub fn rudder(&self) -> &RudderVisual {
        &self.rudder
    }
}
