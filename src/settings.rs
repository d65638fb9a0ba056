use std::fs;
use std::path::Path;

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};

use crate::animation::SPIN_SPEED;
use crate::camera::{PITCH, PITCH_LIMIT, SENSITIVITY, SPEED, YAW};
use crate::projection::FOV_Y_DEGREES;

/// Tunable camera constants
///
/// Every field falls back to the compile-time default when absent from
/// the settings file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    pub movement_speed: f32,
    pub mouse_sensitivity: f32,
    pub yaw: f32,
    pub pitch: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            movement_speed: SPEED,
            mouse_sensitivity: SENSITIVITY,
            yaw: YAW,
            pitch: PITCH,
        }
    }
}

/// Settings file contents (`--settings <file.json>`)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub camera: CameraSettings,
    pub spin_speed: f32,
    pub fov_y_degrees: f32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            camera: CameraSettings::default(),
            spin_speed: SPIN_SPEED,
            fov_y_degrees: FOV_Y_DEGREES,
        }
    }
}

impl AppSettings {
    pub fn from_json(text: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(text).context("Failed to parse settings JSON")?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values the camera cannot start from
    pub fn validate(&self) -> Result<()> {
        let pitch = self.camera.pitch;
        ensure!(
            pitch.abs() <= PITCH_LIMIT,
            "camera.pitch {pitch} is outside [-{PITCH_LIMIT}, {PITCH_LIMIT}]"
        );
        ensure!(
            self.fov_y_degrees > 0.0 && self.fov_y_degrees < 180.0,
            "fov_y_degrees {} must be in (0, 180)",
            self.fov_y_degrees
        );
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        let settings = Self::from_json(&text)
            .with_context(|| format!("Invalid settings in {}", path.display()))?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }
}
