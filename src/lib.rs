pub mod config;
pub mod input;
pub mod inventory;
pub mod item;
pub mod pathfinding;
pub mod renderer;
pub mod ui;

pub use config::{ConfigError, GameConfig, InventoryConfig};
pub use input::PointerButton;
pub use inventory::{InteractionState, Inventory, InventoryError, ItemStack, SlotAction};
pub use item::{ItemDefinition, ItemId, ItemKind, ItemRegistry, UnknownItemError};
pub use pathfinding::{PassabilityGrid, Pathfinder, PathfindingError};
pub use renderer::{Draw, UIRenderer};
pub use ui::{InventoryInputHandler, InventoryUI};
