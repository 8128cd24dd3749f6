use crate::traits::ForceMode;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Per-tick force/torque accumulation for a rigid body.
///
/// Everything is stored as accelerations: `ForceMode::Force` inputs are
/// divided by mass (or the per-axis inertia) on the way in, so the
/// integrator only ever sees m/s² and rad/s². Accumulators are cleared
/// after each integration step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhysicsComponent {
    pub mass: f64,
    /// Principal moments of inertia about the body axes (kg·m²)
    pub inertia: Vector3<f64>,
    /// Accumulated linear acceleration, world frame (m/s²)
    pub linear_acceleration: Vector3<f64>,
    /// Accumulated angular acceleration, body frame (rad/s²)
    pub angular_acceleration: Vector3<f64>,
}

impl PhysicsComponent {
    pub fn new(mass: f64, inertia: Vector3<f64>) -> Self {
        Self {
            mass,
            inertia,
            linear_acceleration: Vector3::zeros(),
            angular_acceleration: Vector3::zeros(),
        }
    }

    pub fn add_force(&mut self, force: Vector3<f64>, mode: ForceMode) {
        match mode {
            ForceMode::Force => self.linear_acceleration += force / self.mass,
            ForceMode::Acceleration => self.linear_acceleration += force,
        }
    }

    pub fn add_relative_torque(&mut self, torque: Vector3<f64>, mode: ForceMode) {
        match mode {
            ForceMode::Force => {
                self.angular_acceleration += torque.component_div(&self.inertia);
            }
            ForceMode::Acceleration => self.angular_acceleration += torque,
        }
    }

    pub fn clear(&mut self) {
        self.linear_acceleration = Vector3::zeros();
        self.angular_acceleration = Vector3::zeros();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_acceleration_mode_ignores_mass() {
        let mut light = PhysicsComponent::new(1.0, Vector3::new(1.0, 1.0, 1.0));
        let mut heavy = PhysicsComponent::new(4000.0, Vector3::new(1.0, 1.0, 1.0));

        light.add_force(Vector3::new(0.0, 0.0, 18.0), ForceMode::Acceleration);
        heavy.add_force(Vector3::new(0.0, 0.0, 18.0), ForceMode::Acceleration);

        assert_relative_eq!(light.linear_acceleration.z, heavy.linear_acceleration.z);
        assert_relative_eq!(light.linear_acceleration.z, 18.0);
    }

    #[test]
    fn test_force_mode_scales_by_mass_and_inertia() {
        let mut physics = PhysicsComponent::new(200.0, Vector3::new(100.0, 50.0, 25.0));

        physics.add_force(Vector3::new(400.0, 0.0, 0.0), ForceMode::Force);
        assert_relative_eq!(physics.linear_acceleration.x, 2.0);

        physics.add_relative_torque(Vector3::new(100.0, 100.0, 100.0), ForceMode::Force);
        assert_relative_eq!(physics.angular_acceleration.x, 1.0);
        assert_relative_eq!(physics.angular_acceleration.y, 2.0);
        assert_relative_eq!(physics.angular_acceleration.z, 4.0);
    }

    #[test]
    fn test_clear_resets_accumulators() {
        let mut physics = PhysicsComponent::new(1.0, Vector3::new(1.0, 1.0, 1.0));
        physics.add_force(Vector3::new(1.0, 2.0, 3.0), ForceMode::Acceleration);
        physics.add_relative_torque(Vector3::new(0.5, 0.0, 0.0), ForceMode::Acceleration);

        physics.clear();
        assert_relative_eq!(physics.linear_acceleration.norm(), 0.0);
        assert_relative_eq!(physics.angular_acceleration.norm(), 0.0);
    }
}
