pub mod boat;

pub use boat::{Boat, BoatBody, BoatConfig, BodyConfig, ConfigError};
