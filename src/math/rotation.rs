use glam::{Mat3, Mat4, Quat, Vec3};

/// Delta rotation from Euler angles (radians).
///
/// Every angle is halved before it enters the Tait-Bryan closed form, which
/// halves again, so the resulting quaternion turns by half of each input
/// angle. Mouse look and roll speeds are tuned against this.
pub fn quat_from_euler(pitch: f32, yaw: f32, roll: f32) -> Quat {
    let (sx, cx) = (pitch * 0.25).sin_cos();
    let (sy, cy) = (yaw * 0.25).sin_cos();
    let (sz, cz) = (roll * 0.25).sin_cos();

    Quat::from_xyzw(
        sx * cy * cz - cx * sy * sz,
        cx * sy * cz + sx * cy * sz,
        cx * cy * sz - sx * sy * cz,
        cx * cy * cz + sx * sy * sz,
    )
}

/// Apply `delta` in view space on top of `orientation`, keeping it unit length
pub fn compose(delta: Quat, orientation: Quat) -> Quat {
    (delta * orientation).normalize()
}

/// World-space axes of the camera, taken from the rows of its rotation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basis {
    pub right: Vec3,
    pub up: Vec3,
    /// Opposite of the look direction
    pub back: Vec3,
}

impl Basis {
    pub fn from_orientation(orientation: Quat) -> Self {
        let rot = Mat3::from_quat(orientation);
        Self {
            right: rot.row(0),
            up: rot.row(1),
            back: rot.row(2),
        }
    }

    pub fn forward(&self) -> Vec3 {
        -self.back
    }
}

/// World-to-camera transform: rotate after moving the eye to the origin
pub fn view_matrix(position: Vec3, orientation: Quat) -> Mat4 {
    Mat4::from_quat(orientation) * Mat4::from_translation(-position)
}
