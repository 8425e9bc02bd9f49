use std::collections::HashSet;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::input::{Button, InputSource};

/// Adapter that bridges winit window events to the `InputSource` trait.
///
/// The host feeds it every `WindowEvent`; the controller then samples the
/// held-button set and cursor position once per frame.
#[derive(Debug, Clone, Default)]
pub struct WinitInput {
    /// Currently pressed buttons
    pressed: HashSet<Button>,
    /// Current cursor position relative to the window
    cursor: Option<(f32, f32)>,
}

impl WinitInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a winit WindowEvent and update internal state
    pub fn process_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(keycode) = event.physical_key {
                    match Self::keycode_to_button(keycode) {
                        Some(button) => self.set_pressed(button, event.state),
                        None => {
                            if event.state == ElementState::Pressed {
                                log::debug!("invalid key pressed: {:?}", keycode);
                            }
                        }
                    }
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(button) = Self::mouse_button_to_button(*button) {
                    self.set_pressed(button, *state);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Some((position.x as f32, position.y as f32));
            }
            WindowEvent::Focused(false) => {
                // Releases that happen while unfocused never arrive
                self.pressed.clear();
            }
            _ => {}
        }
    }

    /// True while any mapped button is held.
    ///
    /// Lets the host tell "no input" apart from "input that produced no
    /// effect this frame", e.g. an object-mode key held in free-camera mode.
    pub fn any_pressed(&self) -> bool {
        !self.pressed.is_empty()
    }

    fn set_pressed(&mut self, button: Button, state: ElementState) {
        match state {
            ElementState::Pressed => {
                self.pressed.insert(button);
            }
            ElementState::Released => {
                self.pressed.remove(&button);
            }
        }
    }

    /// Map winit KeyCode to Button
    fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
        match keycode {
            KeyCode::KeyW => Some(Button::KeyW),
            KeyCode::KeyA => Some(Button::KeyA),
            KeyCode::KeyS => Some(Button::KeyS),
            KeyCode::KeyD => Some(Button::KeyD),
            KeyCode::KeyQ => Some(Button::KeyQ),
            KeyCode::KeyE => Some(Button::KeyE),
            KeyCode::KeyR => Some(Button::KeyR),
            KeyCode::KeyF => Some(Button::KeyF),
            KeyCode::KeyT => Some(Button::KeyT),
            KeyCode::Space => Some(Button::Space),
            KeyCode::ShiftLeft | KeyCode::ShiftRight => Some(Button::Shift),
            KeyCode::Escape => Some(Button::Escape),
            _ => None,
        }
    }

    /// Map winit MouseButton to Button
    fn mouse_button_to_button(button: MouseButton) -> Option<Button> {
        match button {
            MouseButton::Left => Some(Button::MouseLeft),
            MouseButton::Right => Some(Button::MouseRight),
            _ => None,
        }
    }
}

impl InputSource for WinitInput {
    fn is_down(&self, button: Button) -> bool {
        self.pressed.contains(&button)
    }

    fn cursor_position(&self) -> Option<(f32, f32)> {
        self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Winit keyboard events cannot be constructed outside winit, so these
    // tests exercise the state tracking through the internal setters.

    #[test]
    fn new_adapter_is_empty() {
        let input = WinitInput::new();
        assert!(!input.is_down(Button::KeyW));
        assert!(!input.any_pressed());
        assert_eq!(input.cursor_position(), None);
    }

    #[test]
    fn any_pressed_tracks_held_set() {
        let mut input = WinitInput::new();

        input.set_pressed(Button::KeyT, ElementState::Pressed);
        assert!(input.any_pressed());

        input.set_pressed(Button::KeyT, ElementState::Released);
        assert!(!input.any_pressed());
    }

    #[test]
    fn press_and_release_track_state() {
        let mut input = WinitInput::new();

        input.set_pressed(Button::KeyW, ElementState::Pressed);
        input.set_pressed(Button::MouseRight, ElementState::Pressed);
        assert!(input.is_down(Button::KeyW));
        assert!(input.is_down(Button::MouseRight));

        input.set_pressed(Button::KeyW, ElementState::Released);
        assert!(!input.is_down(Button::KeyW));
        assert!(input.is_down(Button::MouseRight));
    }

    #[test]
    fn repeated_press_is_idempotent() {
        let mut input = WinitInput::new();
        input.set_pressed(Button::Space, ElementState::Pressed);
        input.set_pressed(Button::Space, ElementState::Pressed);
        input.set_pressed(Button::Space, ElementState::Released);
        assert!(!input.is_down(Button::Space));
    }

    #[test]
    fn keycode_mapping_covers_control_set() {
        assert_eq!(WinitInput::keycode_to_button(KeyCode::KeyT), Some(Button::KeyT));
        assert_eq!(
            WinitInput::keycode_to_button(KeyCode::ShiftRight),
            Some(Button::Shift)
        );
        assert_eq!(WinitInput::keycode_to_button(KeyCode::KeyZ), None);
        assert_eq!(
            WinitInput::mouse_button_to_button(MouseButton::Middle),
            None
        );
    }
}
