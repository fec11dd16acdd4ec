pub mod inventory_input;
pub mod inventory_ui;

pub use inventory_input::InventoryInputHandler;
pub use inventory_ui::{InventoryUI, InventoryUIState};
