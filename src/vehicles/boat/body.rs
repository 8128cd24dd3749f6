use crate::components::{PhysicsComponent, SpatialComponent};
use crate::systems::physics::{apply_velocity_limits, integrate_state};
use crate::traits::{ForceMode, RigidBody};
use crate::vehicles::boat::config::BodyConfig;
use nalgebra::{UnitQuaternion, Vector3};

/// Rigid hull: spatial state plus per-tick accumulators.
///
/// Implements the [`RigidBody`] capability the propulsion unit consumes.
/// The owner integrates once per tick after all forces are in.
#[derive(Debug, Clone)]
pub struct BoatBody {
    spatial: SpatialComponent,
    physics: PhysicsComponent,
    max_velocity: f64,
    max_angular_velocity: f64,
}

impl BoatBody {
    pub fn new(config: &BodyConfig) -> Self {
        Self {
            spatial: SpatialComponent::default(),
            physics: PhysicsComponent::new(config.mass, config.inertia),
            max_velocity: config.max_velocity,
            max_angular_velocity: config.max_angular_velocity,
        }
    }

    /// Apply the tick's accumulated accelerations and reset them.
    pub fn integrate(&mut self, dt: f64) {
        integrate_state(&self.physics, &mut self.spatial, dt);
        apply_velocity_limits(
            &mut self.spatial,
            self.max_velocity,
            self.max_angular_velocity,
        );
        self.physics.clear();
    }

    pub fn spatial(&self) -> &SpatialComponent {
        &self.spatial
    }

    pub fn spatial_mut(&mut self) -> &mut SpatialComponent {
        &mut self.spatial
    }

    pub fn physics(&self) -> &PhysicsComponent {
        &self.physics
    }
}

impl RigidBody for BoatBody {
    fn position(&self) -> Vector3<f64> {
        self.spatial.position
    }

    fn attitude(&self) -> UnitQuaternion<f64> {
        self.spatial.attitude
    }

    fn linear_velocity(&self) -> Vector3<f64> {
        self.spatial.velocity
    }

    fn add_force(&mut self, force: Vector3<f64>, mode: ForceMode) {
        self.physics.add_force(force, mode);
    }

    fn add_relative_torque(&mut self, torque: Vector3<f64>, mode: ForceMode) {
        self.physics.add_relative_torque(torque, mode);
    }
}
