use glam::Vec3;

use crate::camera::CameraState;
use crate::config::ControllerConfig;
use crate::input::{Button, InputSource};
use crate::transform::ModelTransform;

/// Which target the movement keys drive this frame.
///
/// Purely a function of the current input sample: holding the configured
/// mode modifier selects object-transform mode, releasing it instantly
/// reverts to free-camera mode. No latching, no hysteresis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlMode {
    FreeCamera,
    ObjectTransform,
}

/// Signals raised by one controller update
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameOutput {
    /// Escape was held this frame; the host owns the window lifecycle
    pub close_requested: bool,
    /// At least one recognized key produced an effect this frame
    pub recognized_input: bool,
}

/// Mouse-look baseline: last cursor sample, `None` until the first one.
///
/// Suppressing the delta implied by the first sample (and by the first sample
/// after look was disabled) prevents a jump-cut in camera orientation.
#[derive(Debug, Clone, Copy, Default)]
struct MouseLook {
    last: Option<(f32, f32)>,
}

impl MouseLook {
    fn clear(&mut self) {
        self.last = None;
    }
}

/// Free-fly camera and object-transform controller.
///
/// Runs once per frame inside the host render loop, between input poll and
/// draw. All state updates for a frame complete inside a single `update`
/// call; nothing here blocks or defers work.
#[derive(Debug)]
pub struct FlyController {
    config: ControllerConfig,
    look: MouseLook,
}

impl FlyController {
    pub fn new(config: ControllerConfig) -> Self {
        Self {
            config,
            look: MouseLook::default(),
        }
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Mode for the current input sample
    pub fn mode(&self, input: &impl InputSource) -> ControlMode {
        if input.is_down(self.config.mode_button) {
            ControlMode::ObjectTransform
        } else {
            ControlMode::FreeCamera
        }
    }

    /// Apply one frame of input to the camera pose and model transform.
    ///
    /// `delta_time` is elapsed seconds since the previous frame; movement and
    /// rotation scale by it so responsiveness is frame-rate independent.
    /// A held key re-applies its effect every call.
    pub fn update(
        &mut self,
        input: &impl InputSource,
        delta_time: f32,
        camera: &mut CameraState,
        model: &mut ModelTransform,
    ) -> FrameOutput {
        let dt = delta_time.max(0.0);
        let mode = self.mode(input);

        self.update_look(input, mode, camera);

        let mut recognized = match mode {
            ControlMode::FreeCamera => self.apply_camera_keys(input, dt, camera),
            ControlMode::ObjectTransform => {
                let mut handled = self.apply_object_keys(input, dt, model);
                if self.config.camera_keys_always_active {
                    handled |= self.apply_camera_keys(input, dt, camera);
                }
                handled
            }
        };

        let close_requested = input.is_down(Button::Escape);
        recognized |= close_requested;

        FrameOutput {
            close_requested,
            recognized_input: recognized,
        }
    }

    /// Fold the current cursor sample into yaw/pitch.
    ///
    /// While look is inactive the baseline is dropped, so the next sample
    /// after re-enabling only re-records it.
    fn update_look(&mut self, input: &impl InputSource, mode: ControlMode, camera: &mut CameraState) {
        let look_enabled = if self.config.look_gated_by_button {
            input.is_down(self.config.look_button)
        } else {
            mode == ControlMode::FreeCamera
        };

        if !look_enabled {
            self.look.clear();
            return;
        }

        let Some((x, y)) = input.cursor_position() else {
            return;
        };
        if !x.is_finite() || !y.is_finite() {
            log::warn!("ignoring non-finite cursor sample ({}, {})", x, y);
            return;
        }

        match self.look.last {
            None => self.look.last = Some((x, y)),
            Some((last_x, last_y)) => {
                // Y inverted: screen-space Y grows downward, pitch grows upward
                let yaw_offset = (x - last_x) * self.config.sensitivity;
                let pitch_offset = (last_y - y) * self.config.sensitivity;
                self.look.last = Some((x, y));
                camera.apply_look(yaw_offset, pitch_offset);
            }
        }
    }

    /// Translate the camera along camera-relative axes
    fn apply_camera_keys(
        &self,
        input: &impl InputSource,
        dt: f32,
        camera: &mut CameraState,
    ) -> bool {
        let step = self.config.base_speed * dt;
        let front = camera.front();
        let right = camera.right();
        let up = camera.up;
        let mut handled = false;

        if input.is_down(Button::KeyW) {
            camera.position += step * front;
            handled = true;
        }
        if input.is_down(Button::KeyS) {
            camera.position -= step * front;
            handled = true;
        }
        if input.is_down(Button::KeyA) {
            camera.position -= step * right;
            handled = true;
        }
        if input.is_down(Button::KeyD) {
            camera.position += step * right;
            handled = true;
        }
        if input.is_down(Button::Space) {
            camera.position += step * up;
            handled = true;
        }
        if input.is_down(Button::Shift) {
            camera.position -= step * up;
            handled = true;
        }

        handled
    }

    /// Mutate the model transform along world axes.
    ///
    /// Fixed order: translate, then rotate, then scale, then reset. Matrix
    /// operations do not commute, so the order is part of the contract.
    fn apply_object_keys(
        &self,
        input: &impl InputSource,
        dt: f32,
        model: &mut ModelTransform,
    ) -> bool {
        let step = self.config.base_speed * dt;
        let mut handled = false;

        if input.is_down(Button::KeyW) {
            model.translate(Vec3::new(0.0, step, 0.0));
            handled = true;
        }
        if input.is_down(Button::KeyS) {
            model.translate(Vec3::new(0.0, -step, 0.0));
            handled = true;
        }
        if input.is_down(Button::KeyA) {
            model.translate(Vec3::new(-step, 0.0, 0.0));
            handled = true;
        }
        if input.is_down(Button::KeyD) {
            model.translate(Vec3::new(step, 0.0, 0.0));
            handled = true;
        }

        let angle = self.config.rotation_speed_deg.to_radians() * dt;
        if input.is_down(Button::KeyQ) {
            model.rotate_y(angle);
            handled = true;
        }
        if input.is_down(Button::KeyE) {
            model.rotate_y(-angle);
            handled = true;
        }

        let factor = 1.0 + self.config.scale_rate * dt;
        if input.is_down(Button::KeyR) {
            model.scale_uniform(factor);
            handled = true;
        }
        if input.is_down(Button::KeyF) {
            model.scale_uniform(1.0 / factor);
            handled = true;
        }

        if input.is_down(Button::KeyT) {
            model.reset();
            handled = true;
        }

        handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct TestInput {
        pressed: Vec<Button>,
        cursor: Option<(f32, f32)>,
    }

    impl InputSource for TestInput {
        fn is_down(&self, button: Button) -> bool {
            self.pressed.contains(&button)
        }

        fn cursor_position(&self) -> Option<(f32, f32)> {
            self.cursor
        }
    }

    fn controller() -> FlyController {
        FlyController::new(ControllerConfig::default())
    }

    #[test]
    fn mode_follows_modifier_button() {
        let controller = controller();

        let idle = TestInput::default();
        assert_eq!(controller.mode(&idle), ControlMode::FreeCamera);

        let held = TestInput {
            pressed: vec![Button::MouseRight],
            cursor: None,
        };
        assert_eq!(controller.mode(&held), ControlMode::ObjectTransform);

        // Releasing reverts instantly; nothing is latched
        assert_eq!(controller.mode(&idle), ControlMode::FreeCamera);
    }

    #[test]
    fn escape_requests_close() {
        let mut controller = controller();
        let mut camera = CameraState::new();
        let mut model = ModelTransform::new();

        let input = TestInput {
            pressed: vec![Button::Escape],
            cursor: None,
        };
        let out = controller.update(&input, 0.016, &mut camera, &mut model);
        assert!(out.close_requested);
        assert!(out.recognized_input);
    }

    #[test]
    fn unrecognized_frame_reports_no_input() {
        let mut controller = controller();
        let mut camera = CameraState::new();
        let mut model = ModelTransform::new();

        let out = controller.update(&TestInput::default(), 0.016, &mut camera, &mut model);
        assert!(!out.close_requested);
        assert!(!out.recognized_input);
    }

    #[test]
    fn negative_delta_time_is_clamped() {
        let mut controller = controller();
        let mut camera = CameraState::new();
        let mut model = ModelTransform::new();
        let start = camera.position;

        let input = TestInput {
            pressed: vec![Button::KeyW],
            cursor: None,
        };
        controller.update(&input, -1.0, &mut camera, &mut model);
        assert_eq!(camera.position, start);
    }

    #[test]
    fn camera_keys_can_stay_active_in_transform_mode() {
        let config = ControllerConfig {
            camera_keys_always_active: true,
            ..ControllerConfig::default()
        };
        let mut controller = FlyController::new(config);
        let mut camera = CameraState::new();
        let mut model = ModelTransform::new();
        let start = camera.position;

        let input = TestInput {
            pressed: vec![Button::MouseRight, Button::KeyW],
            cursor: None,
        };
        controller.update(&input, 0.1, &mut camera, &mut model);

        // Both targets moved: the object translated and the camera advanced
        assert_ne!(model.matrix(), glam::Mat4::IDENTITY);
        assert_ne!(camera.position, start);
    }

    #[test]
    fn non_finite_cursor_is_rejected() {
        let mut controller = controller();
        let mut camera = CameraState::new();
        let mut model = ModelTransform::new();

        let input = TestInput {
            pressed: vec![],
            cursor: Some((f32::NAN, 50.0)),
        };
        controller.update(&input, 0.016, &mut camera, &mut model);

        assert_eq!(camera.yaw, -90.0);
        assert_eq!(camera.pitch, 0.0);
        assert!(camera.front().is_finite());
    }
}
