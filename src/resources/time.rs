/// Fixed-step simulation clock.
///
/// The driver advances it once per tick; nothing here reads the wall
/// clock, so runs are reproducible regardless of host speed.
#[derive(Debug, Clone)]
pub struct TimeManager {
    timestep: f64,
    elapsed: f64,
    ticks: u64,
    time_scale: f64,
}

impl TimeManager {
    pub fn new(timestep: f64) -> Self {
        Self {
            timestep,
            elapsed: 0.0,
            ticks: 0,
            time_scale: 1.0,
        }
    }

    /// Scaled duration of one tick (s)
    pub fn delta_seconds(&self) -> f64 {
        self.timestep * self.time_scale
    }

    /// Advance by one tick and return its scaled duration.
    pub fn advance(&mut self) -> f64 {
        let dt = self.delta_seconds();
        self.elapsed += dt;
        self.ticks += 1;
        dt
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn set_time_scale(&mut self, scale: f64) {
        self.time_scale = scale.max(0.0);
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.ticks = 0;
    }
}
