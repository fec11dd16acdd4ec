use crate::input::{KeyCode, PointerButton};
use crate::inventory::Inventory;
use crate::ui::inventory_ui::InventoryUI;
use glam::Vec2;
use std::collections::HashSet;
use winit::event::{ElementState, MouseButton};

/// Routes window input to an inventory window
#[derive(Debug, Default)]
pub struct InventoryInputHandler {
    pressed_keys: HashSet<KeyCode>,
    cursor: Vec2,
}

impl InventoryInputHandler {
    pub fn new() -> Self {
        Self {
            pressed_keys: HashSet::new(),
            cursor: Vec2::ZERO,
        }
    }

    /// Handle key press event
    pub fn handle_key_press(&mut self, key: KeyCode) {
        self.pressed_keys.insert(key);
    }

    /// Handle key release event
    pub fn handle_key_release(&mut self, key: KeyCode) {
        self.pressed_keys.remove(&key);
    }

    pub fn handle_cursor_moved(&mut self, x: f32, y: f32) {
        self.cursor = Vec2::new(x, y);
    }

    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    /// Process queued key presses
    pub fn update(&mut self, inventory_ui: &mut InventoryUI, inventory: &mut Inventory<'_>) {
        // Toggle inventory with E
        if self.pressed_keys.remove(&KeyCode::KeyE) {
            inventory_ui.toggle(inventory);
        }

        // Close inventory with Escape
        if self.pressed_keys.remove(&KeyCode::Escape) && inventory_ui.is_open() {
            inventory_ui.close(inventory);
        }
    }

    /// Handle a mouse button event at the current cursor position.
    ///
    /// Only presses act on the inventory. Returns whether a slot was hit.
    pub fn handle_mouse_button(
        &mut self,
        inventory_ui: &mut InventoryUI,
        inventory: &mut Inventory<'_>,
        button: MouseButton,
        state: ElementState,
    ) -> bool {
        if state != ElementState::Pressed {
            return false;
        }

        inventory_ui.handle_click(inventory, self.cursor, PointerButton::from(button))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::ItemStack;
    use crate::item::{ItemId, ItemRegistry};

    #[test]
    fn test_e_toggles_and_escape_closes() {
        let mut inventory = Inventory::new(4, 4, Vec2::splat(10.0)).unwrap();
        let mut ui = InventoryUI::new(Vec2::ZERO);
        let mut input = InventoryInputHandler::new();

        input.handle_key_press(KeyCode::KeyE);
        input.update(&mut ui, &mut inventory);
        assert!(ui.is_open());

        // key already consumed
        input.update(&mut ui, &mut inventory);
        assert!(ui.is_open());

        input.handle_key_press(KeyCode::Escape);
        input.update(&mut ui, &mut inventory);
        assert!(!ui.is_open());
    }

    #[test]
    fn test_right_press_splits_at_cursor() {
        let registry = ItemRegistry::with_defaults();
        let mut inventory = Inventory::new(4, 2, Vec2::splat(10.0)).unwrap();
        inventory.set_slot(1, Some(ItemStack::new(&registry, ItemId::STONE, 6).unwrap()));
        let mut ui = InventoryUI::new(Vec2::new(20.0, 20.0));
        ui.open();
        let mut input = InventoryInputHandler::new();

        input.handle_cursor_moved(35.0, 25.0);
        let released = input.handle_mouse_button(
            &mut ui,
            &mut inventory,
            MouseButton::Right,
            ElementState::Released,
        );
        assert!(!released);
        assert!(inventory.is_held_clear());

        let pressed = input.handle_mouse_button(
            &mut ui,
            &mut inventory,
            MouseButton::Right,
            ElementState::Pressed,
        );
        assert!(pressed);
        assert_eq!(inventory.held().unwrap().count(), 3);
        assert_eq!(inventory.slot(1).unwrap().count(), 3);
    }
}
