pub mod physics;
pub mod propulsion;
pub mod render;
pub mod spatial;

pub use physics::PhysicsComponent;
pub use propulsion::{EngineAudioParams, PropulsionConfig, PropulsionUnit};
pub use render::RudderVisual;
pub use spatial::SpatialComponent;
