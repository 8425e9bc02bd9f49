use glam::{Mat4, Vec3};

/// Pitch limit in degrees; keeps the look direction from flipping at the poles.
pub const PITCH_LIMIT_DEG: f32 = 89.0;

/// Free-fly camera pose.
///
/// Yaw and pitch are stored in degrees; yaw is unbounded and wraps implicitly
/// through the trigonometric reconstruction. The look direction is always
/// derived from the angles, never stored.
#[derive(Debug, Clone, Copy)]
pub struct CameraState {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub up: Vec3,
}

impl CameraState {
    /// Camera at (0, 0, 3) looking down negative Z.
    ///
    /// Yaw starts at -90 degrees so that zero pitch gives front = (0, 0, -1).
    pub fn new() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 3.0),
            yaw: -90.0,
            pitch: 0.0,
            up: Vec3::Y,
        }
    }

    /// Unit look direction derived from yaw/pitch
    pub fn front(&self) -> Vec3 {
        let yaw = self.yaw.to_radians();
        let pitch = self.pitch.to_radians();
        Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize()
    }

    /// Camera-relative right axis
    pub fn right(&self) -> Vec3 {
        self.front().cross(self.up).normalize()
    }

    /// Add look offsets (degrees) to yaw/pitch, clamping pitch
    pub fn apply_look(&mut self, yaw_offset: f32, pitch_offset: f32) {
        self.yaw += yaw_offset;
        self.pitch = (self.pitch + pitch_offset).clamp(-PITCH_LIMIT_DEG, PITCH_LIMIT_DEG);
    }

    /// Right-handed view matrix looking along `front`
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front(), self.up)
    }
}

impl Default for CameraState {
    fn default() -> Self {
        Self::new()
    }
}
