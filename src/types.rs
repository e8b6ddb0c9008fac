use glam::{Mat4, Vec3};

/// Camera uniform buffer data for GPU
///
/// Matrices are column-major, as WGSL and GLSL expect them.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub view_proj: [[f32; 4]; 4],
    pub position: [f32; 3],
    pub _pad: f32,
}

// Catch CPU/GPU layout mismatches at compile time
const _: () = assert!(std::mem::size_of::<CameraUniform>() == 208);

impl CameraUniform {
    pub fn new(view: Mat4, projection: Mat4, position: Vec3) -> Self {
        Self {
            view: view.to_cols_array_2d(),
            projection: projection.to_cols_array_2d(),
            view_proj: (projection * view).to_cols_array_2d(),
            position: position.to_array(),
            _pad: 0.0,
        }
    }
}
