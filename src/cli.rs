// cli.rs - Command-line interface configuration
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::settings::CameraSettings;

#[derive(Parser, Debug, Clone)]
#[command(name = "fly-camera")]
#[command(about = "Free-fly camera viewer", long_about = None)]
pub struct Cli {
    /// JSON file with camera settings; flags below override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Horizontal field of view in degrees
    #[arg(long)]
    pub fov: Option<f32>,

    /// Mouse look sensitivity
    #[arg(long)]
    pub sensitivity: Option<f32>,

    /// Forward/back speed in units per second
    #[arg(long = "forward-speed")]
    pub forward_speed: Option<f32>,

    /// Strafe and vertical speed in units per second
    #[arg(long = "strafe-speed")]
    pub strafe_speed: Option<f32>,

    /// Initial window width in pixels
    #[arg(long, default_value_t = 1280)]
    pub width: u32,

    /// Initial window height in pixels
    #[arg(long, default_value_t = 720)]
    pub height: u32,

    /// Seconds between frame statistics log lines
    #[arg(long = "stats-interval", default_value_t = 1.0)]
    pub stats_interval: f32,
}

impl Cli {
    /// Settings from the config file (or defaults) with flag overrides applied
    pub fn settings(&self) -> Result<CameraSettings> {
        let mut settings = match &self.config {
            Some(path) => CameraSettings::load(path)?,
            None => CameraSettings::default(),
        };

        if let Some(fov) = self.fov {
            settings.fov_degrees = fov;
        }
        if let Some(sensitivity) = self.sensitivity {
            settings.mouse_sensitivity = sensitivity;
        }
        if let Some(speed) = self.forward_speed {
            settings.forward_speed = speed;
        }
        if let Some(speed) = self.strafe_speed {
            settings.strafe_speed = speed;
        }

        if !(settings.fov_degrees > 0.0 && settings.fov_degrees < 180.0) {
            log::warn!(
                "Field of view {} degrees is outside (0, 180); the projection will be degenerate",
                settings.fov_degrees
            );
        }

        Ok(settings)
    }
}
