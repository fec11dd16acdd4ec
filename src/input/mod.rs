use winit::event::MouseButton;
pub use winit::keyboard::KeyCode;

/// Pointer button as seen by inventories and item actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Usually the left mouse button
    Primary,
    /// Usually the right mouse button
    Secondary,
    /// Usually the middle mouse button
    Tertiary,
    Other(u16),
}

impl From<MouseButton> for PointerButton {
    fn from(button: MouseButton) -> Self {
        match button {
            MouseButton::Left => PointerButton::Primary,
            MouseButton::Right => PointerButton::Secondary,
            MouseButton::Middle => PointerButton::Tertiary,
            MouseButton::Back => PointerButton::Other(3),
            MouseButton::Forward => PointerButton::Other(4),
            MouseButton::Other(code) => PointerButton::Other(code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mouse_button_mapping() {
        assert_eq!(PointerButton::from(MouseButton::Left), PointerButton::Primary);
        assert_eq!(PointerButton::from(MouseButton::Right), PointerButton::Secondary);
        assert_eq!(PointerButton::from(MouseButton::Middle), PointerButton::Tertiary);
        assert_eq!(PointerButton::from(MouseButton::Other(9)), PointerButton::Other(9));
    }
}
