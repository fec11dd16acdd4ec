use crate::input::PointerButton;
use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Unique identifier for an item type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Identifier of a world tile that an item can place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TileId(pub u16);

/// Kinds of tool an item can be
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolKind {
    Pickaxe,
    Axe,
    Shovel,
}

/// Different kinds of items in the game
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ItemKind {
    /// A raw material with no actions of its own
    #[default]
    Material,
    /// An item that places a tile in the world
    Placeable { tile: TileId },
    /// A tool that breaks tiles
    Tool { tool: ToolKind },
}

/// The tile an item action is aimed at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionTarget {
    pub tile_pos: IVec2,
    /// Tile currently occupying `tile_pos`, `None` when empty
    pub tile: Option<TileId>,
}

/// World change requested by an item action. Applying it is up to the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemCommand {
    PlaceTile { pos: IVec2, tile: TileId },
    BreakTile { pos: IVec2 },
}

/// Pointer-driven item actions. Every hook is a no-op unless overridden.
pub trait ItemActions {
    fn on_primary_action(&self, _target: &ActionTarget) -> Option<ItemCommand> {
        None
    }

    fn on_secondary_action(&self, _target: &ActionTarget) -> Option<ItemCommand> {
        None
    }

    fn on_tertiary_action(&self, _target: &ActionTarget) -> Option<ItemCommand> {
        None
    }
}

impl ItemActions for ItemKind {
    fn on_primary_action(&self, target: &ActionTarget) -> Option<ItemCommand> {
        match self {
            ItemKind::Tool { .. } => target
                .tile
                .map(|_| ItemCommand::BreakTile { pos: target.tile_pos }),
            _ => None,
        }
    }

    fn on_secondary_action(&self, target: &ActionTarget) -> Option<ItemCommand> {
        match self {
            ItemKind::Placeable { tile } if target.tile.is_none() => Some(ItemCommand::PlaceTile {
                pos: target.tile_pos,
                tile: *tile,
            }),
            _ => None,
        }
    }
}

fn default_stackable() -> bool {
    true
}

/// Immutable description of one kind of item.
///
/// Definitions are created while populating an [`ItemRegistry`](super::ItemRegistry)
/// and live as long as the registry. Stacks borrow them, never own them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDefinition {
    pub id: ItemId,
    /// Key of the item's texture in the atlas
    pub texture: String,
    #[serde(default = "default_stackable")]
    pub stackable: bool,
    #[serde(default)]
    pub kind: ItemKind,
}

impl ItemDefinition {
    pub fn new(id: ItemId, texture: impl Into<String>, stackable: bool, kind: ItemKind) -> Self {
        Self {
            id,
            texture: texture.into(),
            stackable,
            kind,
        }
    }

    /// Stackable material with no actions
    pub fn material(id: ItemId, texture: impl Into<String>) -> Self {
        Self::new(id, texture, true, ItemKind::Material)
    }

    pub fn is_stackable(&self) -> bool {
        self.stackable
    }

    /// Dispatch a pointer button to the matching action hook
    pub fn act(&self, button: PointerButton, target: &ActionTarget) -> Option<ItemCommand> {
        let command = match button {
            PointerButton::Primary => self.kind.on_primary_action(target),
            PointerButton::Secondary => self.kind.on_secondary_action(target),
            PointerButton::Tertiary => self.kind.on_tertiary_action(target),
            PointerButton::Other(_) => None,
        };

        if let Some(command) = &command {
            log::debug!("Item {} ({:?}) issued {:?}", self.id, button, command);
        }
        command
    }
}
