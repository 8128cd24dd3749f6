//! Capability contracts between the propulsion logic and its collaborators.
//!
//! The propulsion unit never touches a concrete body, water surface, or
//! renderable directly; it talks to these traits so hosts can supply their
//! own implementations. Axis convention throughout: +Y up, +Z forward,
//! +X right; body-frame torque components are (x = pitch, y = yaw,
//! z = roll).

use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

/// How an applied force or torque is interpreted by the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForceMode {
    /// Newtons / newton-metres; scaled by mass and inertia.
    Force,
    /// Mass-independent; the vector is taken as an acceleration directly.
    Acceleration,
}

/// Stable key correlating wave-height queries and results across ticks.
///
/// Allocated by the oracle, monotonically increasing, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QueryId(pub u64);

/// Water surface state at one horizontal position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveSample {
    /// Surface height (m)
    pub height: f64,
    /// Surface normal, unit length
    pub normal: Vector3<f64>,
}

impl Default for WaveSample {
    fn default() -> Self {
        Self {
            height: 0.0,
            normal: Vector3::y(),
        }
    }
}

/// Read/accumulate access to a rigid body.
pub trait RigidBody {
    /// World-space position of the body origin (m)
    fn position(&self) -> Vector3<f64>;

    /// Rotation from body to world frame
    fn attitude(&self) -> UnitQuaternion<f64>;

    /// Linear velocity in world space (m/s)
    fn linear_velocity(&self) -> Vector3<f64>;

    fn forward(&self) -> Vector3<f64> {
        self.attitude() * Vector3::z()
    }

    fn up(&self) -> Vector3<f64> {
        self.attitude() * Vector3::y()
    }

    fn right(&self) -> Vector3<f64> {
        self.attitude() * Vector3::x()
    }

    /// Map a body-frame point into world space.
    fn transform_point(&self, local: &Vector3<f64>) -> Vector3<f64> {
        self.position() + self.attitude() * local
    }

    /// Accumulate a world-frame force for this tick.
    fn add_force(&mut self, force: Vector3<f64>, mode: ForceMode);

    /// Accumulate a body-frame torque for this tick.
    fn add_relative_torque(&mut self, torque: Vector3<f64>, mode: ForceMode);
}

/// Asynchronous-looking water height service.
///
/// Submissions made during a tick are resolved by the oracle between ticks;
/// `fetch_results` returns the best data available, which may lag the
/// latest submission by one cycle. Callers keep their previous value when
/// no data exists yet and never block.
pub trait WaveOracle {
    /// Allocate a fresh query id and its persistent result slot.
    fn register(&mut self) -> QueryId;

    /// Stage this tick's sample points under `id`.
    fn submit_query_points(&mut self, id: QueryId, points: &[Vector3<f64>]);

    /// Best-available results for `id`; `None` until a submission has been
    /// resolved.
    fn fetch_results(&self, id: QueryId) -> Option<&[WaveSample]>;

    /// Drop everything held under `id`. Idempotent.
    fn release(&mut self, id: QueryId);
}

/// Cosmetic transform consumer (rudder visual, attachments).
pub trait RenderableTransform {
    /// Set the local rotation as euler angles in degrees.
    fn set_local_rotation(&mut self, euler_deg: Vector3<f64>);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    struct FixedBody {
        position: Vector3<f64>,
        attitude: UnitQuaternion<f64>,
    }

    impl RigidBody for FixedBody {
        fn position(&self) -> Vector3<f64> {
            self.position
        }
        fn attitude(&self) -> UnitQuaternion<f64> {
            self.attitude
        }
        fn linear_velocity(&self) -> Vector3<f64> {
            Vector3::zeros()
        }
        fn add_force(&mut self, _force: Vector3<f64>, _mode: ForceMode) {}
        fn add_relative_torque(&mut self, _torque: Vector3<f64>, _mode: ForceMode) {}
    }

    #[test]
    fn test_default_axes_follow_attitude() {
        let body = FixedBody {
            position: Vector3::zeros(),
            // quarter turn to starboard about +Y
            attitude: UnitQuaternion::from_axis_angle(&Vector3::y_axis(), -FRAC_PI_2),
        };
        let forward = body.forward();
        assert_relative_eq!(forward.x, -1.0, epsilon = 1e-12);
        assert_relative_eq!(forward.z, 0.0, epsilon = 1e-12);
        assert_relative_eq!(body.up().y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_transform_point_composes_pose() {
        let body = FixedBody {
            position: Vector3::new(10.0, 1.0, -4.0),
            attitude: UnitQuaternion::identity(),
        };
        let world = body.transform_point(&Vector3::new(0.0, -0.25, -1.5));
        assert_relative_eq!(world.x, 10.0);
        assert_relative_eq!(world.y, 0.75);
        assert_relative_eq!(world.z, -5.5);
    }
}
