/// Input button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    KeyL,
    KeyP,
    Digit(u8),
    Escape,
    MouseLeft,
}

impl Button {
    /// Slot number (1-9) for digit keys, `None` for everything else
    pub fn digit_slot(self) -> Option<u8> {
        match self {
            Button::Digit(n) if (1..=9).contains(&n) => Some(n),
            _ => None,
        }
    }
}

/// Controller - handles button input states
pub trait Controller {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;
}
