/// Propulsion cuts out when the sampled depth (water height minus mount
/// height) drops below this (m): the engine keeps pushing until the mount
/// rises more than 10 cm clear of the water.
pub const SUBMERSION_CUTOFF: f64 = -0.1;

/// Rudder deflection at full steering input (degrees)
pub const RUDDER_SWEEP_DEG: f64 = 60.0;
/// Rudder smoothing time constant (s)
pub const RUDDER_SMOOTH_TIME: f64 = 0.5;
/// Rudder angular speed limit (degrees/s)
pub const RUDDER_MAX_RATE_DEG: f64 = 10.0;

/// Engine audio pitch per unit of squared speed
pub const ENGINE_PITCH_SCALE: f64 = 0.01;
/// Engine audio pitch floor at idle
pub const ENGINE_PITCH_FLOOR: f64 = 0.3;

pub const MAX_TIMESTEP: f64 = 1.0 / 30.0; // Maximum physics timestep
pub const MIN_TIMESTEP: f64 = 1.0 / 1000.0; // Minimum physics timestep
