use glam::Mat4;
use serde::{Deserialize, Serialize};

pub const NEAR_PLANE: f32 = 0.01;
pub const FAR_PLANE: f32 = 5000.0;

/// Clip-space depth range expected by the consumer's graphics API
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClipDepth {
    /// OpenGL convention, z in [-1, 1]
    #[default]
    NegativeOneToOne,
    /// wgpu / Vulkan / Metal / D3D convention, z in [0, 1]
    ZeroToOne,
}

/// Right-handed perspective projection.
///
/// `fov_radians` spans the vertical extent; the horizontal scale is divided
/// by `width / height`.
pub fn perspective(fov_radians: f32, width: f32, height: f32, depth: ClipDepth) -> Mat4 {
    let aspect = width / height;
    match depth {
        ClipDepth::NegativeOneToOne => {
            Mat4::perspective_rh_gl(fov_radians, aspect, NEAR_PLANE, FAR_PLANE)
        }
        ClipDepth::ZeroToOne => Mat4::perspective_rh(fov_radians, aspect, NEAR_PLANE, FAR_PLANE),
    }
}
