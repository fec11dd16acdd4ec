pub mod grid;
pub mod grid_inventory;
pub mod item;
pub mod slot;

pub use grid::{GridLayout, InventoryError};
pub use grid_inventory::{InteractionState, Inventory, SlotAction};
pub use item::ItemStack;
pub use slot::SlotArena;
