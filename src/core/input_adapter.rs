use std::collections::HashSet;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::traits::{Button, Controller};

/// Input sample produced from a window event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Button { button: Button, pressed: bool },
    Cursor { x: f32, y: f32 },
}

/// Translate a Winit WindowEvent into an input sample
pub fn translate_event(event: &WindowEvent) -> Option<InputEvent> {
    match event {
        WindowEvent::KeyboardInput { event, .. } => {
            let PhysicalKey::Code(keycode) = event.physical_key else {
                return None;
            };
            // Key repeat is not a state change
            if event.repeat {
                return None;
            }
            keycode_to_button(keycode).map(|button| InputEvent::Button {
                button,
                pressed: event.state == ElementState::Pressed,
            })
        }
        WindowEvent::MouseInput { state, button, .. } => {
            mouse_button_to_button(*button).map(|button| InputEvent::Button {
                button,
                pressed: *state == ElementState::Pressed,
            })
        }
        WindowEvent::CursorMoved { position, .. } => Some(InputEvent::Cursor {
            x: position.x as f32,
            y: position.y as f32,
        }),
        _ => None,
    }
}

/// Map Winit KeyCode to Button
pub fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
    match keycode {
        KeyCode::KeyW => Some(Button::KeyW),
        KeyCode::KeyA => Some(Button::KeyA),
        KeyCode::KeyS => Some(Button::KeyS),
        KeyCode::KeyD => Some(Button::KeyD),
        KeyCode::KeyL => Some(Button::KeyL),
        KeyCode::KeyP => Some(Button::KeyP),
        KeyCode::Digit1 => Some(Button::Digit(1)),
        KeyCode::Digit2 => Some(Button::Digit(2)),
        KeyCode::Digit3 => Some(Button::Digit(3)),
        KeyCode::Digit4 => Some(Button::Digit(4)),
        KeyCode::Digit5 => Some(Button::Digit(5)),
        KeyCode::Digit6 => Some(Button::Digit(6)),
        KeyCode::Digit7 => Some(Button::Digit(7)),
        KeyCode::Digit8 => Some(Button::Digit(8)),
        KeyCode::Digit9 => Some(Button::Digit(9)),
        KeyCode::Escape => Some(Button::Escape),
        _ => None,
    }
}

/// Map Winit MouseButton to Button
fn mouse_button_to_button(button: MouseButton) -> Option<Button> {
    match button {
        MouseButton::Left => Some(Button::MouseLeft),
        _ => None,
    }
}

/// Set of currently held buttons
///
/// Tracks every held key at once, so chords such as W+D register as two
/// simultaneous presses.
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    held: HashSet<Button>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a press or release. Returns true on a fresh press.
    pub fn set(&mut self, button: Button, pressed: bool) -> bool {
        if pressed {
            self.held.insert(button)
        } else {
            self.held.remove(&button);
            false
        }
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }

    /// Forget every held key (focus loss)
    pub fn clear(&mut self) {
        self.held.clear();
    }
}

impl Controller for KeyState {
    fn is_down(&self, button: Button) -> bool {
        self.held.contains(&button)
    }
}

/// Converts absolute cursor samples into look offsets
///
/// The first sample only establishes the reference point. Vertical offsets
/// are reversed since window y grows downwards.
#[derive(Debug, Clone, Copy, Default)]
pub struct MouseTracker {
    last_position: Option<(f32, f32)>,
}

impl MouseTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&mut self, x: f32, y: f32) -> (f32, f32) {
        let (last_x, last_y) = self.last_position.unwrap_or((x, y));
        self.last_position = Some((x, y));
        (x - last_x, last_y - y)
    }

    /// Current cursor position (if available)
    pub fn position(&self) -> Option<(f32, f32)> {
        self.last_position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Winit KeyEvent has private fields, so these tests cover the state
    // types and the key mapping rather than translate_event.

    #[test]
    fn test_key_state_tracks_chords() {
        let mut keys = KeyState::new();
        assert!(keys.set(Button::KeyW, true));
        assert!(keys.set(Button::KeyD, true));

        assert!(keys.is_down(Button::KeyW));
        assert!(keys.is_down(Button::KeyD));
        assert!(!keys.is_down(Button::KeyS));
    }

    #[test]
    fn test_repeated_press_is_not_fresh() {
        let mut keys = KeyState::new();
        assert!(keys.set(Button::KeyL, true));
        assert!(!keys.set(Button::KeyL, true));
        assert!(keys.is_down(Button::KeyL));
    }

    #[test]
    fn test_release_removes_button() {
        let mut keys = KeyState::new();
        keys.set(Button::KeyA, true);
        keys.set(Button::KeyS, true);
        keys.set(Button::KeyA, false);

        assert!(!keys.is_down(Button::KeyA));
        assert!(keys.is_down(Button::KeyS));
        // releasing an unheld key is not a press
        assert!(!keys.set(Button::KeyA, false));

        keys.clear();
        assert!(keys.is_empty());
    }

    #[test]
    fn test_first_cursor_sample_has_no_offset() {
        let mut mouse = MouseTracker::new();
        assert_eq!(mouse.offset(400.0, 300.0), (0.0, 0.0));
        assert_eq!(mouse.position(), Some((400.0, 300.0)));
    }

    #[test]
    fn test_cursor_offset_inverts_y() {
        let mut mouse = MouseTracker::new();
        mouse.offset(400.0, 300.0);
        assert_eq!(mouse.offset(410.0, 290.0), (10.0, 10.0));
        assert_eq!(mouse.offset(405.0, 295.0), (-5.0, -5.0));
    }

    #[test]
    fn test_only_left_mouse_button_is_mapped() {
        assert_eq!(mouse_button_to_button(MouseButton::Left), Some(Button::MouseLeft));
        assert_eq!(mouse_button_to_button(MouseButton::Right), None);
    }

    #[test]
    fn test_keycode_mapping() {
        assert_eq!(keycode_to_button(KeyCode::KeyW), Some(Button::KeyW));
        assert_eq!(keycode_to_button(KeyCode::Digit7), Some(Button::Digit(7)));
        assert_eq!(keycode_to_button(KeyCode::Digit0), None);
        assert_eq!(keycode_to_button(KeyCode::KeyZ), None);
    }
}
