//! Perspective camera for the 3D scene variant.

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Camera3D, Vector3};

use crate::resources::decorlayout::CameraSpec;

/// Camera the scene variant is viewed through.
///
/// The projection aspect follows the render texture, which is recreated on
/// every [`Stage`](crate::resources::stage::Stage) resize.
#[derive(Resource, Clone, Copy, Debug)]
pub struct SceneCamera {
    pub position: Vector3,
    pub target: Vector3,
    pub up: Vector3,
    /// Vertical field of view in degrees.
    pub fovy: f32,
}

impl SceneCamera {
    pub fn to_camera3d(&self) -> Camera3D {
        Camera3D::perspective(self.position, self.target, self.up, self.fovy)
    }
}

impl From<&CameraSpec> for SceneCamera {
    fn from(spec: &CameraSpec) -> Self {
        let [px, py, pz] = spec.position;
        let [tx, ty, tz] = spec.target;
        Self {
            position: Vector3::new(px, py, pz),
            target: Vector3::new(tx, ty, tz),
            up: Vector3::new(0.0, 1.0, 0.0),
            fovy: spec.fovy,
        }
    }
}

impl Default for SceneCamera {
    fn default() -> Self {
        Self::from(&CameraSpec::default())
    }
}
