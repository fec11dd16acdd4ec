use super::grid::{GridLayout, InventoryError};
use super::slot::SlotArena;
use super::ItemStack;
use crate::config::InventoryConfig;
use crate::input::PointerButton;
use glam::Vec2;

/// Whether the player currently holds a stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionState {
    Idle,
    Holding,
}

/// What a slot interaction did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotAction {
    /// Held stack moved into an empty slot
    Deposited,
    /// Slot stack moved into the empty held position
    PickedUp,
    /// Held stack merged into the slot stack
    Merged,
    /// Held and slot stacks exchanged places
    Swapped,
    /// Part of the slot stack moved into the held position
    Split,
    Nothing,
}

impl SlotAction {
    pub fn changed(self) -> bool {
        self != SlotAction::Nothing
    }
}

/// Fixed-size grid of slots plus the stack the player is holding.
///
/// Every stack lives in exactly one place, a slot or the held position.
/// Transfers move stacks, they never copy them.
#[derive(Debug)]
pub struct Inventory<'r> {
    slots: SlotArena<'r>,
    layout: GridLayout,
    held: Option<ItemStack<'r>>,
}

impl<'r> Inventory<'r> {
    pub fn new(size: usize, width: usize, cell_size: Vec2) -> Result<Self, InventoryError> {
        let layout = GridLayout::new(size, width, cell_size)?;
        Ok(Self {
            slots: SlotArena::new(size),
            layout,
            held: None,
        })
    }

    pub fn from_config(config: &InventoryConfig) -> Result<Self, InventoryError> {
        Self::new(
            config.size,
            config.width,
            Vec2::new(config.cell_width, config.cell_height),
        )
    }

    pub fn size(&self) -> usize {
        self.slots.len()
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn state(&self) -> InteractionState {
        if self.held.is_some() {
            InteractionState::Holding
        } else {
            InteractionState::Idle
        }
    }

    /// Stack in a slot. Panics if `index` is out of range.
    pub fn slot(&self, index: usize) -> Option<&ItemStack<'r>> {
        self.slots.get(index)
    }

    /// Replace a slot's contents, dropping what was there
    pub fn set_slot(&mut self, index: usize, stack: Option<ItemStack<'r>>) {
        self.slots.replace(index, stack);
    }

    pub fn slots(&self) -> impl Iterator<Item = Option<&ItemStack<'r>>> {
        self.slots.iter()
    }

    pub fn is_slot_clear(&self, index: usize) -> bool {
        self.slots.is_clear(index)
    }

    pub fn held(&self) -> Option<&ItemStack<'r>> {
        self.held.as_ref()
    }

    pub fn set_held(&mut self, stack: Option<ItemStack<'r>>) {
        self.held = stack;
    }

    pub fn is_held_clear(&self) -> bool {
        self.held.is_none()
    }

    /// Put a stack in the first empty slot.
    ///
    /// When every slot is occupied the stack becomes the held stack, replacing
    /// any stack already held.
    pub fn add_stack(&mut self, stack: ItemStack<'r>) {
        match self.slots.first_empty() {
            Some(index) => {
                log::debug!("Added {} x{} to slot {}", stack.item_id(), stack.count(), index);
                self.slots.replace(index, Some(stack));
            }
            None => {
                if let Some(previous) = &self.held {
                    log::warn!(
                        "Inventory full, held stack {} x{} replaced",
                        previous.item_id(),
                        previous.count()
                    );
                }
                self.held = Some(stack);
            }
        }
    }

    /// Deposit, merge or swap the held stack with a slot
    pub fn transfer_held_to_slot(&mut self, index: usize) -> SlotAction {
        let held = self.held.take();

        let action = match held {
            None if self.slots.is_clear(index) => SlotAction::Nothing,
            None => {
                self.held = self.slots.take(index);
                SlotAction::PickedUp
            }
            Some(held) => match self.slots.get_mut(index) {
                None => {
                    self.slots.replace(index, Some(held));
                    SlotAction::Deposited
                }
                Some(slot) => match slot.merge_with(held) {
                    Ok(()) => SlotAction::Merged,
                    Err(held) => {
                        self.held = self.slots.replace(index, Some(held));
                        SlotAction::Swapped
                    }
                },
            },
        };

        log::debug!("Slot {} transfer: {:?}", index, action);
        action
    }

    /// Move the larger half of a slot's stack into the held position.
    ///
    /// A stack of `c` leaves `c / 2` behind and the slot is cleared when
    /// nothing remains. Any stack already held is replaced.
    pub fn split_into_held(&mut self, index: usize) -> SlotAction {
        let Some(stack) = self.slots.get_mut(index) else {
            return SlotAction::Nothing;
        };

        let total = stack.count();
        let remaining = total / 2;
        let portion = total - remaining;

        if portion > 0 {
            if let Some(previous) = &self.held {
                log::warn!(
                    "Split replaced held stack {} x{}",
                    previous.item_id(),
                    previous.count()
                );
            }
            self.held = Some(stack.clone_with_count(portion));
        }

        if remaining > 0 {
            stack.set_count(remaining);
        } else {
            self.slots.take(index);
        }

        log::debug!("Slot {} split: {} held, {} left", index, portion, remaining);
        SlotAction::Split
    }

    /// Handle a pointer press at a position local to the grid's top-left.
    ///
    /// Returns `false` without touching anything when the position does not
    /// resolve to a slot.
    pub fn handle_pointer_input(&mut self, local: Vec2, button: PointerButton) -> bool {
        let Some(index) = self.layout.slot_at(local) else {
            return false;
        };

        if button == PointerButton::Secondary && self.is_held_clear() && !self.is_slot_clear(index) {
            self.split_into_held(index);
        } else {
            self.transfer_held_to_slot(index);
        }

        true
    }

    /// Return the held stack to storage.
    ///
    /// The stack goes to the first empty slot. If there is none it is lost.
    pub fn close(&mut self) {
        if let Some(held) = self.held.take() {
            let (id, count) = (held.item_id(), held.count());
            self.add_stack(held);
            if self.held.take().is_some() {
                log::warn!("Inventory full on close, discarded {} x{}", id, count);
            }
        }
        self.held = None;
    }
}
