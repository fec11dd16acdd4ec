use crate::item::{ItemDefinition, ItemId, ItemKind, TileId, ToolKind};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Lookup of an item id that was never registered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Unknown item id {item_id}")]
pub struct UnknownItemError {
    pub item_id: ItemId,
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Item {0} is already registered")]
    DuplicateItem(ItemId),

    #[error("Failed to read item definitions from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML item definitions: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid JSON item definitions: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported item definition format: {0}")]
    UnsupportedFormat(String),
}

/// On-disk layout of an item definition file
#[derive(Debug, Deserialize)]
struct ItemFile {
    #[serde(default, rename = "item")]
    items: Vec<ItemDefinition>,
}

/// Registry for all item definitions.
///
/// Must be fully populated before any stack is created. Stacks borrow their
/// definitions from here, so the registry outlives every inventory built on it.
#[derive(Debug, Default)]
pub struct ItemRegistry {
    items: HashMap<ItemId, ItemDefinition>,
}

impl ItemRegistry {
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
        }
    }

    /// Registry holding the built-in item set
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.init_default_items();
        registry
    }

    /// Build a registry from a list of definitions, rejecting duplicate ids
    pub fn from_definitions(
        definitions: impl IntoIterator<Item = ItemDefinition>,
    ) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for definition in definitions {
            registry.register(definition)?;
        }
        Ok(registry)
    }

    /// Parse definitions from a TOML document with an `[[item]]` array
    pub fn from_toml_str(source: &str) -> Result<Self, RegistryError> {
        let file: ItemFile = toml::from_str(source)?;
        Self::from_definitions(file.items)
    }

    /// Parse definitions from a JSON document of the form `{ "item": [...] }`
    pub fn from_json_str(source: &str) -> Result<Self, RegistryError> {
        let file: ItemFile = serde_json::from_str(source)?;
        Self::from_definitions(file.items)
    }

    /// Load definitions from a `.toml` or `.json` file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let source = std::fs::read_to_string(path).map_err(|source| RegistryError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let registry = match extension.as_str() {
            "toml" => Self::from_toml_str(&source)?,
            "json" => Self::from_json_str(&source)?,
            _ => return Err(RegistryError::UnsupportedFormat(path.display().to_string())),
        };

        log::info!(
            "Loaded {} item definitions from {}",
            registry.len(),
            path.display()
        );
        Ok(registry)
    }

    /// Register a new item definition
    pub fn register(&mut self, definition: ItemDefinition) -> Result<(), RegistryError> {
        if self.items.contains_key(&definition.id) {
            return Err(RegistryError::DuplicateItem(definition.id));
        }

        log::debug!("Registered item {} ({})", definition.id, definition.texture);
        self.items.insert(definition.id, definition);
        Ok(())
    }

    /// Resolve an item id to its definition
    pub fn lookup(&self, id: ItemId) -> Result<&ItemDefinition, UnknownItemError> {
        self.items.get(&id).ok_or(UnknownItemError { item_id: id })
    }

    pub fn get(&self, id: ItemId) -> Option<&ItemDefinition> {
        self.items.get(&id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.items.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemDefinition> {
        self.items.values()
    }

    /// Initialize with default items
    fn init_default_items(&mut self) {
        let defaults = [
            ItemDefinition::new(
                ItemId::STONE,
                "stone",
                true,
                ItemKind::Placeable { tile: TileId(1) },
            ),
            ItemDefinition::new(
                ItemId::DIRT,
                "dirt",
                true,
                ItemKind::Placeable { tile: TileId(2) },
            ),
            ItemDefinition::material(ItemId::WOOD, "wood"),
            ItemDefinition::material(ItemId::CRYSTAL, "crystal"),
            ItemDefinition::new(
                ItemId::PICKAXE,
                "pickaxe",
                false,
                ItemKind::Tool {
                    tool: ToolKind::Pickaxe,
                },
            ),
            ItemDefinition::new(
                ItemId::AXE,
                "axe",
                false,
                ItemKind::Tool { tool: ToolKind::Axe },
            ),
        ];

        for definition in defaults {
            self.items.insert(definition.id, definition);
        }
    }
}

/// Built-in item ids
impl ItemId {
    pub const STONE: ItemId = ItemId(1);
    pub const DIRT: ItemId = ItemId(2);
    pub const WOOD: ItemId = ItemId(3);
    pub const CRYSTAL: ItemId = ItemId(4);

    pub const PICKAXE: ItemId = ItemId(100);
    pub const AXE: ItemId = ItemId(101);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_unknown_item() {
        let registry = ItemRegistry::with_defaults();
        let err = registry.lookup(ItemId(9999)).unwrap_err();
        assert_eq!(err.item_id, ItemId(9999));
        assert_eq!(err.to_string(), "Unknown item id #9999");
    }

    #[test]
    fn test_defaults_contain_tools_that_do_not_stack() {
        let registry = ItemRegistry::with_defaults();
        assert!(!registry.lookup(ItemId::PICKAXE).unwrap().is_stackable());
        assert!(registry.lookup(ItemId::STONE).unwrap().is_stackable());
        assert_eq!(registry.len(), 6);
    }

    #[test]
    fn test_register_duplicate_is_rejected() {
        let mut registry = ItemRegistry::new();
        registry
            .register(ItemDefinition::material(ItemId(1), "a"))
            .unwrap();
        let result = registry.register(ItemDefinition::material(ItemId(1), "b"));
        assert!(matches!(result, Err(RegistryError::DuplicateItem(ItemId(1)))));
        assert_eq!(registry.lookup(ItemId(1)).unwrap().texture, "a");
    }

    #[test]
    fn test_from_toml_str() {
        let registry = ItemRegistry::from_toml_str(
            r#"
            [[item]]
            id = 10
            texture = "torch"
            kind = { type = "placeable", tile = 8 }

            [[item]]
            id = 11
            texture = "sword"
            stackable = false
            "#,
        )
        .unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.lookup(ItemId(10)).unwrap().kind,
            ItemKind::Placeable { tile: TileId(8) }
        );
        assert!(!registry.lookup(ItemId(11)).unwrap().stackable);
    }

    #[test]
    fn test_from_json_str() {
        let registry = ItemRegistry::from_json_str(
            r#"{ "item": [ { "id": 3, "texture": "coal", "kind": { "type": "material" } } ] }"#,
        )
        .unwrap();
        assert!(registry.contains(ItemId(3)));
    }

    #[test]
    fn test_empty_document_gives_empty_registry() {
        let registry = ItemRegistry::from_toml_str("").unwrap();
        assert!(registry.is_empty());
    }
}
