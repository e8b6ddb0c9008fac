pub mod camera;
pub mod cli;
pub mod core;
pub mod math;
pub mod settings;
pub mod types;

pub use camera::Camera;
pub use crate::core::{Action, ActionState, KeyMap, WinitKeyMap};
pub use settings::CameraSettings;
pub use types::CameraUniform;
