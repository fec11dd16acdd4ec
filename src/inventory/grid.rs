//! Slot layout geometry for pointer hit testing and drawing.
//!
//! Slots are laid out row-major, `width` slots per row. The layout never
//! affects storage order.

use glam::Vec2;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InventoryError {
    #[error("Inventory must have at least one slot")]
    NoSlots,

    #[error("Inventory row width must be at least 1")]
    ZeroWidth,

    #[error("Invalid cell size {0:?}: both dimensions must be positive")]
    InvalidCellSize(Vec2),
}

/// Grid geometry of an inventory
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    size: usize,
    width: usize,
    height: usize,
    cell_size: Vec2,
}

impl GridLayout {
    pub fn new(size: usize, width: usize, cell_size: Vec2) -> Result<Self, InventoryError> {
        if size == 0 {
            return Err(InventoryError::NoSlots);
        }
        if width == 0 {
            return Err(InventoryError::ZeroWidth);
        }
        if !(cell_size.x > 0.0 && cell_size.y > 0.0) || !cell_size.is_finite() {
            return Err(InventoryError::InvalidCellSize(cell_size));
        }

        Ok(Self {
            size,
            width,
            height: size.div_ceil(width),
            cell_size,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows, the last one possibly partial
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell_size(&self) -> Vec2 {
        self.cell_size
    }

    /// Pixel extent of the full grid
    pub fn bounds(&self) -> Vec2 {
        Vec2::new(
            self.width as f32 * self.cell_size.x,
            self.height as f32 * self.cell_size.y,
        )
    }

    /// (column, row) of a slot
    pub fn slot_position(&self, index: usize) -> (usize, usize) {
        (index % self.width, index / self.width)
    }

    /// Top-left corner of a slot cell relative to `topleft`
    pub fn slot_origin(&self, index: usize, topleft: Vec2) -> Vec2 {
        let (column, row) = self.slot_position(index);
        topleft + Vec2::new(column as f32, row as f32) * self.cell_size
    }

    /// Centre of a slot cell relative to `topleft`
    pub fn slot_center(&self, index: usize, topleft: Vec2) -> Vec2 {
        self.slot_origin(index, topleft) + self.cell_size * 0.5
    }

    /// Slot under a position local to the grid's top-left corner.
    ///
    /// Returns `None` outside the grid rectangle and on the unused cells of a
    /// partial last row.
    pub fn slot_at(&self, local: Vec2) -> Option<usize> {
        if !local.is_finite() || local.x < 0.0 || local.y < 0.0 {
            return None;
        }

        let bounds = self.bounds();
        if local.x >= bounds.x || local.y >= bounds.y {
            return None;
        }

        let column = ((local.x / self.cell_size.x) as usize).min(self.width - 1);
        let row = ((local.y / self.cell_size.y) as usize).min(self.height - 1);
        let index = column + self.width * row;

        (index < self.size).then_some(index)
    }
}
