pub mod components;
pub mod resources;
pub mod sim;
pub mod systems;
pub mod traits;
pub mod utils;
pub mod vehicles;

pub use components::{EngineAudioParams, PropulsionConfig, PropulsionUnit, RudderVisual};
pub use resources::{GerstnerWaves, TimeManager, WaveConfig};
pub use sim::{Controls, SimConfig, Simulation};
pub use traits::{ForceMode, QueryId, RenderableTransform, RigidBody, WaveOracle, WaveSample};
pub use utils::errors::SimError;
pub use vehicles::{Boat, BoatBody, BoatConfig, BodyConfig, ConfigError};
