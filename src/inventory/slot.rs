use super::ItemStack;

/// Fixed-capacity storage for inventory slots, addressed by index.
///
/// The number of slots is set at construction and never changes. An empty
/// slot is `None`. Indexing out of range panics: callers resolve indices
/// through hit testing first.
#[derive(Debug)]
pub struct SlotArena<'r> {
    slots: Box<[Option<ItemStack<'r>>]>,
}

impl<'r> SlotArena<'r> {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: std::iter::repeat_with(|| None).take(capacity).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ItemStack<'r>> {
        self.slots[index].as_ref()
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut ItemStack<'r>> {
        self.slots[index].as_mut()
    }

    pub fn is_clear(&self, index: usize) -> bool {
        self.slots[index].is_none()
    }

    /// Put `stack` in a slot, returning whatever was there before
    pub fn replace(&mut self, index: usize, stack: Option<ItemStack<'r>>) -> Option<ItemStack<'r>> {
        std::mem::replace(&mut self.slots[index], stack)
    }

    pub fn take(&mut self, index: usize) -> Option<ItemStack<'r>> {
        self.slots[index].take()
    }

    /// Index of the first empty slot in ascending order
    pub fn first_empty(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<&ItemStack<'r>>> {
        self.slots.iter().map(Option::as_ref)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{ItemId, ItemRegistry};

    #[test]
    fn test_arena_has_fixed_length() {
        let arena = SlotArena::new(6);
        assert_eq!(arena.len(), 6);
        assert!(arena.iter().all(|slot| slot.is_none()));
        assert_eq!(arena.first_empty(), Some(0));
    }

    #[test]
    fn test_replace_and_first_empty() {
        let registry = ItemRegistry::with_defaults();
        let mut arena = SlotArena::new(3);

        let previous = arena.replace(0, Some(ItemStack::new(&registry, ItemId::STONE, 4).unwrap()));
        assert!(previous.is_none());
        assert_eq!(arena.first_empty(), Some(1));

        arena.replace(1, Some(ItemStack::new(&registry, ItemId::DIRT, 1).unwrap()));
        arena.replace(2, Some(ItemStack::new(&registry, ItemId::WOOD, 1).unwrap()));
        assert_eq!(arena.first_empty(), None);

        let taken = arena.take(1).unwrap();
        assert_eq!(taken.item_id(), ItemId::DIRT);
        assert!(arena.is_clear(1));
        assert_eq!(arena.first_empty(), Some(1));
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_index_panics() {
        let arena = SlotArena::new(2);
        let _ = arena.get(2);
    }
}
