use crate::input::PointerButton;
use crate::inventory::{GridLayout, Inventory, ItemStack};
use crate::item::ItemDefinition;
use crate::renderer::ui::{Draw, UIColor, UIRect, UIRenderer};
use glam::Vec2;

/// Size of item icons in pixels
const ICON_SIZE: f32 = 48.0;
const SLOT_PADDING: f32 = 4.0;
const COUNT_TEXT_SIZE: f32 = 20.0;

const SLOT_COLOR: UIColor = UIColor {
    r: 0.39,
    g: 0.2,
    b: 0.2,
    a: 0.8,
};
const SLOT_BORDER_COLOR: UIColor = UIColor {
    r: 0.5,
    g: 0.5,
    b: 0.5,
    a: 1.0,
};

impl Draw for ItemDefinition {
    fn draw(&self, ui: &mut UIRenderer, anchor: Vec2) {
        ui.draw_texture(&self.texture, UIRect::centered(anchor, Vec2::splat(ICON_SIZE)));
    }
}

impl Draw for ItemStack<'_> {
    fn draw(&self, ui: &mut UIRenderer, anchor: Vec2) {
        self.definition().draw(ui, anchor);
        ui.draw_text(
            &self.count().to_string(),
            anchor.x,
            anchor.y,
            COUNT_TEXT_SIZE,
            UIColor::WHITE,
        );
    }
}

impl Draw for Inventory<'_> {
    /// Draws every slot with its top-left corner of the grid at `anchor`
    fn draw(&self, ui: &mut UIRenderer, anchor: Vec2) {
        let layout = self.layout();
        let slot_size = (layout.cell_size() - Vec2::splat(SLOT_PADDING * 2.0)).max(Vec2::ZERO);

        for (index, stack) in self.slots().enumerate() {
            let center = layout.slot_center(index, anchor);
            let rect = UIRect::centered(center, slot_size);

            ui.draw_rect(rect, SLOT_COLOR);
            ui.draw_rect_outline(rect, SLOT_BORDER_COLOR, 2.0);

            if let Some(stack) = stack {
                stack.draw(ui, center);
            }
        }
    }
}

/// State of the inventory UI
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InventoryUIState {
    Closed,
    Open,
}

/// Screen placement and open/closed state of an inventory window
#[derive(Debug, Clone)]
pub struct InventoryUI {
    state: InventoryUIState,
    /// Screen position of the grid's top-left corner
    position: Vec2,
}

impl InventoryUI {
    pub fn new(position: Vec2) -> Self {
        Self {
            state: InventoryUIState::Closed,
            position,
        }
    }

    /// UI with the grid centred on screen
    pub fn centered(screen_width: f32, screen_height: f32, layout: &GridLayout) -> Self {
        let mut ui = Self::new(Vec2::ZERO);
        ui.resize(screen_width, screen_height, layout);
        ui
    }

    /// Update screen dimensions
    pub fn resize(&mut self, screen_width: f32, screen_height: f32, layout: &GridLayout) {
        let screen = Vec2::new(screen_width, screen_height);
        self.position = ((screen - layout.bounds()) * 0.5).max(Vec2::ZERO);
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn open(&mut self) {
        self.state = InventoryUIState::Open;
    }

    /// Close the window, returning the held stack to the inventory
    pub fn close(&mut self, inventory: &mut Inventory<'_>) {
        if self.state == InventoryUIState::Open {
            inventory.close();
        }
        self.state = InventoryUIState::Closed;
    }

    pub fn toggle(&mut self, inventory: &mut Inventory<'_>) {
        match self.state {
            InventoryUIState::Open => self.close(inventory),
            InventoryUIState::Closed => self.open(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.state == InventoryUIState::Open
    }

    /// Handle a mouse press at a screen position. Ignored while closed.
    pub fn handle_click(
        &mut self,
        inventory: &mut Inventory<'_>,
        screen_position: Vec2,
        button: PointerButton,
    ) -> bool {
        if self.state != InventoryUIState::Open {
            return false;
        }

        inventory.handle_pointer_input(screen_position - self.position, button)
    }

    /// Render the inventory window and the held stack under the cursor
    pub fn render(&self, ui: &mut UIRenderer, inventory: &Inventory<'_>, cursor: Vec2) {
        if self.state != InventoryUIState::Open {
            return;
        }

        inventory.draw(ui, self.position);
        if let Some(held) = inventory.held() {
            held.draw(ui, cursor);
        }
    }
}
