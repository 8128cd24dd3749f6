pub mod time;
pub mod water;

pub use time::TimeManager;
pub use water::{GerstnerWaves, WaveConfig};
