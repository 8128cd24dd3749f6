use crate::traits::RenderableTransform;
use crate::utils::math::deg_to_rad;
use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

/// Cosmetic rudder transform.
///
/// Holds the local rotation the steering logic writes each tick; renderers
/// read it back as euler degrees or a quaternion. Purely visual, carries no
/// physical state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RudderVisual {
    local_rotation_deg: Vector3<f64>,
}

impl RudderVisual {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn local_rotation_deg(&self) -> Vector3<f64> {
        self.local_rotation_deg
    }

    pub fn local_rotation(&self) -> UnitQuaternion<f64> {
        UnitQuaternion::from_euler_angles(
            deg_to_rad(self.local_rotation_deg.x),
            deg_to_rad(self.local_rotation_deg.y),
            deg_to_rad(self.local_rotation_deg.z),
        )
    }
}

impl RenderableTransform for RudderVisual {
    fn set_local_rotation(&mut self, euler_deg: Vector3<f64>) {
        self.local_rotation_deg = euler_deg;
    }
}
