use crate::item::{ItemDefinition, ItemId, ItemRegistry, UnknownItemError};

/// A quantity of one item definition.
///
/// The definition is borrowed from the registry that created the stack. A
/// stack is never kept around with a count of zero: operations that would
/// empty it discard it instead.
#[derive(Debug, PartialEq, Eq)]
pub struct ItemStack<'r> {
    item: &'r ItemDefinition,
    count: u32,
}

impl<'r> ItemStack<'r> {
    /// Create a new item stack from a registered item id
    pub fn new(registry: &'r ItemRegistry, item_id: ItemId, count: u32) -> Result<Self, UnknownItemError> {
        let item = registry.lookup(item_id)?;
        Ok(Self::from_definition(item, count))
    }

    /// Create a stack directly from a definition
    pub fn from_definition(item: &'r ItemDefinition, count: u32) -> Self {
        debug_assert!(count > 0, "item stacks are created with a positive count");
        Self { item, count }
    }

    pub fn item_id(&self) -> ItemId {
        self.item.id
    }

    pub fn definition(&self) -> &'r ItemDefinition {
        self.item
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub(crate) fn set_count(&mut self, count: u32) {
        self.count = count;
    }

    /// Check if this stack can merge with another
    pub fn can_merge_with(&self, other: Option<&ItemStack<'_>>) -> bool {
        match other {
            Some(other) => {
                self.item.is_stackable()
                    && other.item.is_stackable()
                    && self.item_id() == other.item_id()
            }
            None => false,
        }
    }

    /// Merge `other` into this stack.
    ///
    /// On success `other` is consumed and its count added to this one. On
    /// failure it is handed back untouched, including when the combined count
    /// would not fit in a `u32`.
    pub fn merge_with(&mut self, other: ItemStack<'r>) -> Result<(), ItemStack<'r>> {
        if !self.can_merge_with(Some(&other)) {
            return Err(other);
        }

        match self.count.checked_add(other.count) {
            Some(total) => {
                self.count = total;
                Ok(())
            }
            None => Err(other),
        }
    }

    /// New stack of the same item with the given count
    pub fn clone_with_count(&self, count: u32) -> ItemStack<'r> {
        ItemStack::from_definition(self.item, count)
    }
}
