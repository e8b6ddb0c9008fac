mod projection;
mod rotation;

pub use projection::{perspective, ClipDepth, FAR_PLANE, NEAR_PLANE};
pub use rotation::{compose, quat_from_euler, view_matrix, Basis};
