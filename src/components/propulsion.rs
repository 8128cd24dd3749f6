use crate::traits::{ForceMode, QueryId, RenderableTransform, RigidBody, WaveOracle};
use crate::utils::constants::{
    ENGINE_PITCH_FLOOR, ENGINE_PITCH_SCALE, RUDDER_MAX_RATE_DEG, RUDDER_SMOOTH_TIME,
    RUDDER_SWEEP_DEG, SUBMERSION_CUTOFF,
};
use crate::utils::math::{move_towards, smooth_damp_angle};
use log::{debug, warn};
use nalgebra::Vector3;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Tunable parameters for one propulsion unit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropulsionConfig {
    /// Mount point in the hull frame (m)
    pub position: Vector3<f64>,
    /// Thrust at full throttle, applied mass-independently (m/s²)
    pub power: f64,
    /// Yaw authority at full steering input (rad/s²)
    pub steering_torque: f64,
    /// Throttle slew rate (1/s)
    pub accel_rate: f64,
    /// Stern-squat pitch coupling under throttle
    pub back_turn_multiplier: f64,
    /// Roll coupling while steering
    pub side_turn_multiplier: f64,
    /// Scale on the rudder's visual sweep
    pub rudder_max_angle: f64,
    /// Axis the rudder visual rotates around
    pub rudder_axis: Vector3<f64>,
}

impl Default for PropulsionConfig {
    fn default() -> Self {
        Self {
            position: Vector3::new(0.0, -0.25, -1.5),
            power: 18.0,
            steering_torque: 5.0,
            accel_rate: 0.1,
            back_turn_multiplier: 1.0,
            side_turn_multiplier: 1.0,
            rudder_max_angle: 1.0,
            rudder_axis: Vector3::y(),
        }
    }
}

/// Presentation-side parameters derived from the unit's state.
///
/// Nothing here feeds back into the physics; audio/rendering collaborators
/// poll these once per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineAudioParams {
    /// Engine loop pitch, floored so an idle engine still rumbles
    pub engine_pitch: f64,
    /// Normalized playback start offset for the engine loop, [0, 1)
    pub engine_start_offset: f64,
    /// Normalized playback start offset for the water wash loop, [0, 1)
    pub water_start_offset: f64,
}

/// Outboard propulsion unit for a single watercraft.
///
/// Once per physics tick the owner calls `step` (submersion sampling),
/// then `accelerate` and `turn` with the mapped control inputs. Thrust and
/// steering torque only apply while the mount point is no deeper than
/// `SUBMERSION_CUTOFF`; the rudder visual tracks steering regardless.
#[derive(Debug, Clone)]
pub struct PropulsionUnit {
    config: PropulsionConfig,
    query_id: Option<QueryId>,
    current_acceleration: f64,
    submersion_depth: f64,
    rudder_angle: f64,
    rudder_velocity: f64,
    step_dt: f64,
    velocity_sq: f64,
    engine_start_offset: f64,
    water_start_offset: f64,
}

impl PropulsionUnit {
    pub fn new(config: PropulsionConfig) -> Self {
        Self {
            config,
            query_id: None,
            current_acceleration: 0.0,
            submersion_depth: 0.0,
            rudder_angle: 0.0,
            rudder_velocity: 0.0,
            step_dt: 0.0,
            velocity_sq: 0.0,
            engine_start_offset: 0.0,
            water_start_offset: 0.0,
        }
    }

    /// Register this unit's wave query slot and roll the audio start
    /// offsets. Idempotent: a second call keeps the existing query id.
    pub fn initialize<R: Rng>(&mut self, oracle: &mut dyn WaveOracle, rng: &mut R) {
        if self.query_id.is_some() {
            warn!("propulsion unit already initialized, keeping query id");
            return;
        }
        let id = oracle.register();
        self.query_id = Some(id);
        self.engine_start_offset = rng.gen::<f64>();
        self.water_start_offset = rng.gen::<f64>();
        debug!("propulsion unit registered wave query {:?}", id);
    }

    /// Per-tick submersion sampling. Must run before `accelerate`/`turn`
    /// within the same tick.
    ///
    /// Submits the world-space mount point under this unit's query id and
    /// reads back the best-available surface sample, which may lag the
    /// submission by one tick. While the oracle has nothing yet, the
    /// previous depth stands.
    pub fn step(&mut self, body: &dyn RigidBody, oracle: &mut dyn WaveOracle, dt: f64) {
        self.step_dt = dt;
        self.velocity_sq = body.linear_velocity().norm_squared();

        let Some(id) = self.query_id else {
            return;
        };
        let point = body.transform_point(&self.config.position);
        oracle.submit_query_points(id, &[point]);
        if let Some(sample) = oracle.fetch_results(id).and_then(|s| s.first()) {
            self.submersion_depth = sample.height - point.y;
        }
    }

    /// Throttle control, input clamped to [0, 1].
    ///
    /// Does nothing at all while the mount hangs clear of the water;
    /// otherwise the throttle ramps linearly toward the input and the
    /// resulting thrust goes out along the horizontal projection of the
    /// bow axis, with a pitch torque that lifts the bow under power.
    pub fn accelerate(&mut self, body: &mut dyn RigidBody, modifier: f64) {
        if !self.is_submerged() {
            return;
        }
        let modifier = modifier.clamp(0.0, 1.0);

        self.current_acceleration = move_towards(
            self.current_acceleration,
            modifier,
            self.config.accel_rate * self.step_dt,
        );

        let mut forward = body.forward();
        forward.y = 0.0;
        if forward.norm() > 0.0 {
            forward.normalize_mut();
        }

        body.add_force(
            self.config.power * self.current_acceleration * forward,
            ForceMode::Acceleration,
        );
        body.add_relative_torque(
            Vector3::new(
                -self.current_acceleration * self.config.back_turn_multiplier,
                0.0,
                0.0,
            ),
            ForceMode::Acceleration,
        );
    }

    /// Steering control, input clamped to [-1, 1].
    ///
    /// The combined yaw/roll torque obeys the submersion gate; the rudder
    /// visual always tracks the input through a critically damped smoother.
    pub fn turn(
        &mut self,
        body: &mut dyn RigidBody,
        rudder: &mut dyn RenderableTransform,
        modifier: f64,
    ) {
        let modifier = modifier.clamp(-1.0, 1.0);

        if self.is_submerged() {
            let torque = Vector3::new(
                0.0,
                self.config.steering_torque,
                -self.config.steering_torque * 0.5 * self.config.side_turn_multiplier,
            ) * modifier;
            body.add_relative_torque(torque, ForceMode::Acceleration);
        }

        let target = RUDDER_SWEEP_DEG * -modifier * self.config.rudder_max_angle;
        self.rudder_angle = smooth_damp_angle(
            self.rudder_angle,
            target,
            &mut self.rudder_velocity,
            RUDDER_SMOOTH_TIME,
            RUDDER_MAX_RATE_DEG,
            self.step_dt,
        );
        rudder.set_local_rotation(self.config.rudder_axis * self.rudder_angle);
    }

    /// Release the oracle slot. Safe to call without prior initialization
    /// and safe to call twice.
    pub fn teardown(&mut self, oracle: &mut dyn WaveOracle) {
        if let Some(id) = self.query_id.take() {
            oracle.release(id);
            debug!("propulsion unit released wave query {:?}", id);
        }
    }

    pub fn is_submerged(&self) -> bool {
        self.submersion_depth > SUBMERSION_CUTOFF
    }

    pub fn config(&self) -> &PropulsionConfig {
        &self.config
    }

    pub fn query_id(&self) -> Option<QueryId> {
        self.query_id
    }

    pub fn current_acceleration(&self) -> f64 {
        self.current_acceleration
    }

    /// Water height minus mount height at the mount point; positive when
    /// the mount rides below the surface, negative when it hangs above it.
    pub fn submersion_depth(&self) -> f64 {
        self.submersion_depth
    }

    /// Smoothed rudder deflection (degrees)
    pub fn rudder_angle(&self) -> f64 {
        self.rudder_angle
    }

    pub fn audio_params(&self) -> EngineAudioParams {
        EngineAudioParams {
            engine_pitch: (self.velocity_sq * ENGINE_PITCH_SCALE).max(ENGINE_PITCH_FLOOR),
            engine_start_offset: self.engine_start_offset,
            water_start_offset: self.water_start_offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::WaveSample;
    use approx::assert_relative_eq;
    use nalgebra::UnitQuaternion;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashMap;

    const DT: f64 = 0.02;

    /// Body stub that records accumulated accelerations.
    #[derive(Default)]
    struct RecordingBody {
        position: Vector3<f64>,
        attitude: UnitQuaternion<f64>,
        velocity: Vector3<f64>,
        net_force: Vector3<f64>,
        net_torque: Vector3<f64>,
    }

    impl RigidBody for RecordingBody {
        fn position(&self) -> Vector3<f64> {
            self.position
        }
        fn attitude(&self) -> UnitQuaternion<f64> {
            self.attitude
        }
        fn linear_velocity(&self) -> Vector3<f64> {
            self.velocity
        }
        fn add_force(&mut self, force: Vector3<f64>, _mode: ForceMode) {
            self.net_force += force;
        }
        fn add_relative_torque(&mut self, torque: Vector3<f64>, _mode: ForceMode) {
            self.net_torque += torque;
        }
    }

    /// Oracle stub answering every query with a fixed surface height,
    /// immediately (no propagation lag).
    struct FlatOracle {
        level: f64,
        next_id: u64,
        slots: HashMap<QueryId, Vec<WaveSample>>,
    }

    impl FlatOracle {
        fn new(level: f64) -> Self {
            Self {
                level,
                next_id: 0,
                slots: HashMap::new(),
            }
        }
    }

    impl WaveOracle for FlatOracle {
        fn register(&mut self) -> QueryId {
            let id = QueryId(self.next_id);
            self.next_id += 1;
            self.slots.insert(id, Vec::new());
            id
        }
        fn submit_query_points(&mut self, id: QueryId, points: &[Vector3<f64>]) {
            if let Some(slot) = self.slots.get_mut(&id) {
                *slot = points
                    .iter()
                    .map(|_| WaveSample {
                        height: self.level,
                        ..Default::default()
                    })
                    .collect();
            }
        }
        fn fetch_results(&self, id: QueryId) -> Option<&[WaveSample]> {
            self.slots
                .get(&id)
                .filter(|s| !s.is_empty())
                .map(|s| s.as_slice())
        }
        fn release(&mut self, id: QueryId) {
            self.slots.remove(&id);
        }
    }

    fn rigged_unit(oracle: &mut FlatOracle) -> PropulsionUnit {
        let mut unit = PropulsionUnit::new(PropulsionConfig::default());
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        unit.initialize(oracle, &mut rng);
        unit
    }

    #[test]
    fn test_throttle_input_is_clamped() {
        let mut oracle = FlatOracle::new(0.0);
        let unit = rigged_unit(&mut oracle);
        let mut body = RecordingBody::default();

        for modifier in [-2.0, -0.5, 1.3, 2.0] {
            let mut unit = unit.clone();
            unit.step(&body, &mut oracle, DT);
            for _ in 0..100_000 {
                unit.accelerate(&mut body, modifier);
            }
            let expected = modifier.clamp(0.0, 1.0);
            assert_relative_eq!(unit.current_acceleration(), expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_throttle_ramp_is_rate_limited() {
        let mut oracle = FlatOracle::new(0.0);
        let mut unit = rigged_unit(&mut oracle);
        let mut body = RecordingBody::default();
        unit.step(&body, &mut oracle, DT);

        let max_step = unit.config().accel_rate * DT;
        let mut previous = unit.current_acceleration();
        for _ in 0..600 {
            unit.accelerate(&mut body, 1.0);
            let current = unit.current_acceleration();
            assert!((current - previous).abs() <= max_step + 1e-12);
            assert!((0.0..=1.0).contains(&current));
            previous = current;
        }
    }

    #[test]
    fn test_thrust_magnitude_converges_to_power() {
        let mut oracle = FlatOracle::new(0.0);
        let mut unit = rigged_unit(&mut oracle);
        let mut body = RecordingBody::default();
        unit.step(&body, &mut oracle, DT);

        // 0.1 * 0.02 per tick: 500 ticks to saturate
        for _ in 0..500 {
            unit.accelerate(&mut body, 1.0);
        }
        assert_relative_eq!(unit.current_acceleration(), 1.0, epsilon = 1e-9);

        body.net_force = Vector3::zeros();
        unit.accelerate(&mut body, 1.0);
        assert_relative_eq!(body.net_force.norm(), unit.config().power, epsilon = 1e-9);
        // thrust is horizontal for a level hull
        assert_relative_eq!(body.net_force.y, 0.0);
    }

    #[test]
    fn test_thrust_follows_horizontal_projection_of_forward() {
        let mut oracle = FlatOracle::new(0.0);
        let mut unit = rigged_unit(&mut oracle);
        let mut body = RecordingBody {
            // bow pitched up 30 degrees
            attitude: UnitQuaternion::from_axis_angle(
                &Vector3::x_axis(),
                -30f64.to_radians(),
            ),
            ..Default::default()
        };
        unit.step(&body, &mut oracle, DT);
        unit.accelerate(&mut body, 1.0);

        // the vertical component is stripped before scaling
        assert_relative_eq!(body.net_force.y, 0.0, epsilon = 1e-12);
        let expected = unit.config().power * unit.current_acceleration();
        assert_relative_eq!(body.net_force.norm(), expected, epsilon = 1e-9);
    }

    #[test]
    fn test_acceleration_pitches_the_bow() {
        let mut oracle = FlatOracle::new(0.0);
        let mut unit = rigged_unit(&mut oracle);
        let mut body = RecordingBody::default();
        unit.step(&body, &mut oracle, DT);

        unit.accelerate(&mut body, 1.0);
        assert!(body.net_torque.x < 0.0);
        assert_relative_eq!(
            body.net_torque.x,
            -unit.current_acceleration() * unit.config().back_turn_multiplier
        );
    }

    #[test]
    fn test_gate_blocks_physics_but_not_rudder() {
        // water 5 m below the mount
        let mut oracle = FlatOracle::new(-5.0);
        let mut unit = rigged_unit(&mut oracle);
        let mut body = RecordingBody::default();
        let mut rudder = crate::components::RudderVisual::new();

        // two steps so the fetched sample is applied
        unit.step(&body, &mut oracle, DT);
        unit.step(&body, &mut oracle, DT);
        assert!(!unit.is_submerged());

        for _ in 0..50 {
            unit.accelerate(&mut body, 1.0);
            unit.turn(&mut body, &mut rudder, 1.0);
        }
        assert_relative_eq!(body.net_force.norm(), 0.0);
        assert_relative_eq!(body.net_torque.norm(), 0.0);
        assert_relative_eq!(unit.current_acceleration(), 0.0);
        // the cosmetic rudder still swings toward -60°
        assert!(unit.rudder_angle() < -0.5);
    }

    #[test]
    fn test_turn_applies_combined_yaw_roll_torque() {
        let mut oracle = FlatOracle::new(0.0);
        let mut unit = rigged_unit(&mut oracle);
        let mut body = RecordingBody::default();
        let mut rudder = crate::components::RudderVisual::new();
        unit.step(&body, &mut oracle, DT);

        unit.turn(&mut body, &mut rudder, 1.0);
        let torque = unit.config().steering_torque;
        assert_relative_eq!(body.net_torque.y, torque);
        assert_relative_eq!(
            body.net_torque.z,
            -torque * 0.5 * unit.config().side_turn_multiplier
        );
        assert_relative_eq!(body.net_torque.x, 0.0);

        // opposite input mirrors the vector
        body.net_torque = Vector3::zeros();
        unit.turn(&mut body, &mut rudder, -1.0);
        assert_relative_eq!(body.net_torque.y, -torque);
    }

    #[test]
    fn test_rudder_tracks_toward_scaled_target() {
        let mut oracle = FlatOracle::new(0.0);
        let mut unit = rigged_unit(&mut oracle);
        let mut body = RecordingBody::default();
        let mut rudder = crate::components::RudderVisual::new();

        let target = RUDDER_SWEEP_DEG; // turn(-1) with rudder_max_angle = 1
        let mut previous = 0.0;
        for _ in 0..3000 {
            unit.step(&body, &mut oracle, DT);
            unit.turn(&mut body, &mut rudder, -1.0);
            let angle = unit.rudder_angle();
            assert!(angle >= previous - 1e-9, "approach must be monotone");
            assert!(angle <= target + 1e-9, "must not overshoot");
            let rate = (angle - previous).abs() / DT;
            assert!(rate <= RUDDER_MAX_RATE_DEG + 0.05);
            previous = angle;
        }
        assert_relative_eq!(unit.rudder_angle(), target, epsilon = 1e-3);
        assert_relative_eq!(rudder.local_rotation_deg().y, target, epsilon = 1e-3);
    }

    #[test]
    fn test_submersion_depth_tracks_surface_minus_mount() {
        let mut oracle = FlatOracle::new(2.0);
        let mut unit = rigged_unit(&mut oracle);
        let body = RecordingBody::default();

        unit.step(&body, &mut oracle, DT);
        // mount rides at y = -0.25 with the default config
        assert_relative_eq!(unit.submersion_depth(), 2.25, epsilon = 1e-12);
    }

    #[test]
    fn test_depth_is_stale_but_safe_without_oracle_data() {
        let mut oracle = FlatOracle::new(0.0);
        let mut unit = PropulsionUnit::new(PropulsionConfig::default());
        let body = RecordingBody::default();

        // never initialized: no query id, depth keeps its previous value
        unit.step(&body, &mut oracle, DT);
        assert_relative_eq!(unit.submersion_depth(), 0.0);
        assert!(unit.is_submerged());
    }

    #[test]
    fn test_teardown_without_initialize_is_a_noop() {
        let mut oracle = FlatOracle::new(0.0);
        let mut unit = PropulsionUnit::new(PropulsionConfig::default());
        unit.teardown(&mut oracle);
        unit.teardown(&mut oracle);
        assert!(unit.query_id().is_none());
    }

    #[test]
    fn test_teardown_releases_the_query_slot() {
        let mut oracle = FlatOracle::new(0.0);
        let mut unit = rigged_unit(&mut oracle);
        assert_eq!(oracle.slots.len(), 1);

        unit.teardown(&mut oracle);
        assert!(oracle.slots.is_empty());
        assert!(unit.query_id().is_none());
    }

    #[test]
    fn test_reinitialize_keeps_query_id() {
        let mut oracle = FlatOracle::new(0.0);
        let mut unit = rigged_unit(&mut oracle);
        let first = unit.query_id();

        let mut rng = ChaCha8Rng::seed_from_u64(10);
        unit.initialize(&mut oracle, &mut rng);
        assert_eq!(unit.query_id(), first);
        assert_eq!(oracle.slots.len(), 1);
    }

    #[test]
    fn test_audio_pitch_floor_and_growth() {
        let mut oracle = FlatOracle::new(0.0);
        let mut unit = rigged_unit(&mut oracle);
        let mut body = RecordingBody::default();

        unit.step(&body, &mut oracle, DT);
        assert_relative_eq!(unit.audio_params().engine_pitch, ENGINE_PITCH_FLOOR);

        body.velocity = Vector3::new(0.0, 0.0, 10.0);
        unit.step(&body, &mut oracle, DT);
        assert_relative_eq!(unit.audio_params().engine_pitch, 1.0);

        let params = unit.audio_params();
        assert!((0.0..1.0).contains(&params.engine_start_offset));
        assert!((0.0..1.0).contains(&params.water_start_offset));
    }
}
