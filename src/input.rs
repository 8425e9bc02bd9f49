use serde::{Deserialize, Serialize};

/// Logical input action identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Button {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    KeyQ,
    KeyE,
    KeyR,
    KeyF,
    KeyT,
    Space,
    Shift,
    Escape,
    MouseLeft,
    MouseRight,
}

/// Per-frame input source - the host samples it once per loop iteration.
///
/// A held button reports `true` every frame; there is no buffering or
/// key-repeat suppression.
pub trait InputSource {
    /// Check if a button is currently down
    fn is_down(&self, button: Button) -> bool;

    /// Current cursor position in window coordinates, if one has been seen
    fn cursor_position(&self) -> Option<(f32, f32)>;
}
