use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::input::Button;

/// Tunable controller parameters.
///
/// Defaults: 0.05 mouse sensitivity, 3.0 world-units/second movement,
/// 80 degrees/second object rotation, and a scale factor of
/// `1 + 0.5 * dt` per frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Degrees of yaw/pitch per pixel of cursor travel
    pub sensitivity: f32,
    /// Camera and object translation speed, world-units per second
    pub base_speed: f32,
    /// Object rotation speed, degrees per second
    pub rotation_speed_deg: f32,
    /// Per-second compounding rate for uniform scaling
    pub scale_rate: f32,
    /// Button that switches the controller into object-transform mode while held
    pub mode_button: Button,
    /// Button that enables mouse-look when `look_gated_by_button` is set
    pub look_button: Button,
    /// When true, mouse-look only runs while `look_button` is held.
    /// When false, it runs whenever the controller is in free-camera mode.
    pub look_gated_by_button: bool,
    /// When true, movement keys keep driving the camera even while the
    /// mode modifier is held; when false, keys are routed exclusively by
    /// the current mode.
    pub camera_keys_always_active: bool,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            sensitivity: 0.05,
            base_speed: 3.0,
            rotation_speed_deg: 80.0,
            scale_rate: 0.5,
            mode_button: Button::MouseRight,
            look_button: Button::MouseRight,
            look_gated_by_button: false,
            camera_keys_always_active: false,
        }
    }
}

impl ControllerConfig {
    /// Load a config from a JSON file. Missing fields fall back to defaults.
    pub fn from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    }
}
