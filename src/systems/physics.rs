use crate::components::{PhysicsComponent, SpatialComponent};
use nalgebra::UnitQuaternion;

/// Integrate one fixed step of the accumulated accelerations into the
/// spatial state.
///
/// Semi-implicit Euler: velocities first, then positions from the updated
/// velocities. Angular velocity lives in the body frame, so the attitude
/// update composes on the right.
pub fn integrate_state(physics: &PhysicsComponent, spatial: &mut SpatialComponent, dt: f64) {
    spatial.velocity += physics.linear_acceleration * dt;
    spatial.position += spatial.velocity * dt;

    spatial.angular_velocity += physics.angular_acceleration * dt;
    if spatial.angular_velocity.norm() > 0.0 {
        let rotation = UnitQuaternion::from_scaled_axis(spatial.angular_velocity * dt);
        spatial.attitude *= rotation;

        // Ensure quaternion normalization
        spatial.attitude =
            UnitQuaternion::from_quaternion(spatial.attitude.into_inner().normalize());
    }
}

/// Applies velocity and angular velocity limits to prevent excessive motion.
pub fn apply_velocity_limits(
    spatial: &mut SpatialComponent,
    max_velocity: f64,
    max_angular_velocity: f64,
) {
    let velocity_norm = spatial.velocity.norm();
    if velocity_norm > max_velocity {
        spatial.velocity *= max_velocity / velocity_norm;
    }

    let angular_velocity_norm = spatial.angular_velocity.norm();
    if angular_velocity_norm > max_angular_velocity {
        spatial.angular_velocity *= max_angular_velocity / angular_velocity_norm;
    }
}
