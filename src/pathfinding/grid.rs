use super::PathfindingError;
use glam::IVec2;
use std::os::raw::c_int;

/// Walkable cell
pub const OPEN: c_int = 0;
/// Impassable cell
pub const BLOCKED: c_int = 1;
/// Cell marked by the native search as part of the found path
pub const PATH: c_int = 2;

/// Row-major passability codes with dimensions checked against the cell count.
///
/// The native search trusts `width * height` to match the buffer it is given,
/// so the check happens here, before anything crosses the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassabilityGrid {
    cells: Vec<c_int>,
    width: usize,
    height: usize,
}

impl PassabilityGrid {
    pub fn new(cells: Vec<c_int>, width: usize, height: usize) -> Result<Self, PathfindingError> {
        if c_int::try_from(width).is_err() || c_int::try_from(height).is_err() {
            return Err(PathfindingError::GridTooLarge { width, height });
        }

        let expected = width.checked_mul(height);
        if expected != Some(cells.len()) {
            return Err(PathfindingError::GridSizeMismatch {
                width,
                height,
                actual: cells.len(),
            });
        }

        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Fully open grid
    pub fn open(width: usize, height: usize) -> Result<Self, PathfindingError> {
        Self::new(vec![OPEN; width.saturating_mul(height)], width, height)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cells(&self) -> &[c_int] {
        &self.cells
    }

    pub fn contains(&self, cell: IVec2) -> bool {
        cell.x >= 0 && cell.y >= 0 && (cell.x as usize) < self.width && (cell.y as usize) < self.height
    }

    pub(crate) fn ensure_contains(&self, cell: IVec2) -> Result<(), PathfindingError> {
        if self.contains(cell) {
            Ok(())
        } else {
            Err(PathfindingError::OutOfBounds(cell))
        }
    }

    pub fn index_of(&self, cell: IVec2) -> Option<usize> {
        self.contains(cell)
            .then(|| cell.y as usize * self.width + cell.x as usize)
    }

    pub fn get(&self, cell: IVec2) -> Option<c_int> {
        self.index_of(cell).map(|index| self.cells[index])
    }

    pub fn set(&mut self, cell: IVec2, code: c_int) {
        if let Some(index) = self.index_of(cell) {
            self.cells[index] = code;
        }
    }
}
