use glam::{Mat4, Vec3};

/// Accumulated model-to-world transform for the displayed object.
///
/// Each operation post-multiplies an incremental matrix onto the current one,
/// so repeated key presses compound exactly as matrix composition dictates.
/// No translation/rotation/scale decomposition is kept; the drift that
/// accumulates under interleaved operations is the intended behavior.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelTransform {
    matrix: Mat4,
}

impl ModelTransform {
    pub fn new() -> Self {
        Self {
            matrix: Mat4::IDENTITY,
        }
    }

    /// Current matrix, ready for upload as a shader uniform
    pub fn matrix(&self) -> Mat4 {
        self.matrix
    }

    pub fn translate(&mut self, offset: Vec3) {
        self.matrix *= Mat4::from_translation(offset);
    }

    /// Rotate about the world up axis by `angle` radians
    pub fn rotate_y(&mut self, angle: f32) {
        self.matrix *= Mat4::from_rotation_y(angle);
    }

    pub fn scale_uniform(&mut self, factor: f32) {
        self.matrix *= Mat4::from_scale(Vec3::splat(factor));
    }

    /// Discard all accumulated composition. Irreversible; no undo history.
    pub fn reset(&mut self) {
        self.matrix = Mat4::IDENTITY;
    }
}

impl Default for ModelTransform {
    fn default() -> Self {
        Self::new()
    }
}
