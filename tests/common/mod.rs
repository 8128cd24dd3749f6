use skiff::{SimConfig, WaveConfig};

/// Flat water, no pitch coupling, generous speed cap: scenarios read
/// cleanly off the kinematics.
pub fn calm_config() -> SimConfig {
    let mut config = SimConfig {
        seed: 7,
        waves: WaveConfig::calm(),
        ..Default::default()
    };
    config.boat.body.max_velocity = 10_000.0;
    config.boat.propulsion.back_turn_multiplier = 0.0;
    config
}

/// Default sea state, deterministic seed.
pub fn choppy_config() -> SimConfig {
    SimConfig {
        seed: 7,
        ..Default::default()
    }
}
