use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::math::ClipDepth;

pub const DEFAULT_FOV_DEGREES: f32 = 65.0;
pub const DEFAULT_MOUSE_SENSITIVITY: f32 = 0.5;
pub const DEFAULT_FORWARD_SPEED: f32 = 10.0;
pub const DEFAULT_STRAFE_SPEED: f32 = 5.0;

/// Runtime tunables of the fly camera.
///
/// Only tuning is configured here; the camera pose is never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    pub fov_degrees: f32,
    pub mouse_sensitivity: f32,
    /// Units per second along the look direction
    pub forward_speed: f32,
    /// Units per second sideways and vertically
    pub strafe_speed: f32,
    pub clip_depth: ClipDepth,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            fov_degrees: DEFAULT_FOV_DEGREES,
            mouse_sensitivity: DEFAULT_MOUSE_SENSITIVITY,
            forward_speed: DEFAULT_FORWARD_SPEED,
            strafe_speed: DEFAULT_STRAFE_SPEED,
            clip_depth: ClipDepth::default(),
        }
    }
}

impl CameraSettings {
    /// Load settings from a JSON file; missing fields keep their defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read camera settings: {:?}", path))?;
        let settings = Self::from_json(&text)
            .with_context(|| format!("Invalid camera settings in {:?}", path))?;

        log::debug!("Loaded camera settings from {:?}: {:?}", path, settings);
        Ok(settings)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}
