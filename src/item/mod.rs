pub mod item_registry;
pub mod item_type;

pub use item_registry::{ItemRegistry, RegistryError, UnknownItemError};
pub use item_type::{
    ActionTarget, ItemActions, ItemCommand, ItemDefinition, ItemId, ItemKind, TileId, ToolKind,
};
