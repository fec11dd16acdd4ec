//! Boundary to the native A* pathfinding library.
//!
//! The library is optional at runtime. Callers check [`Pathfinder::is_available`]
//! and get an empty path from [`Pathfinder::search`] when it is missing.
//! The search is synchronous and cannot be cancelled; run it off the update
//! loop if it needs to stay responsive.

pub mod grid;
pub mod native;

pub use grid::{PassabilityGrid, BLOCKED, OPEN, PATH};
pub use native::{AStarSearchFn, NativePathfinder};

use crate::config::PathfindingConfig;
use glam::IVec2;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PathfindingError {
    #[error("Failed to load pathfinding library {path}: {error}")]
    LoadError { path: String, error: String },

    #[error("Pathfinding library has no symbol {symbol}: {error}")]
    SymbolError { symbol: &'static str, error: String },

    #[error("Grid of {width}x{height} does not match {actual} cells")]
    GridSizeMismatch {
        width: usize,
        height: usize,
        actual: usize,
    },

    #[error("Grid of {width}x{height} is too large for the native search")]
    GridTooLarge { width: usize, height: usize },

    #[error("Cell {0} is outside the grid")]
    OutOfBounds(IVec2),
}

/// Pathfinding capability, possibly absent
#[derive(Debug)]
pub enum Pathfinder {
    Native(NativePathfinder),
    Unavailable,
}

impl Pathfinder {
    /// Load the native library, reporting why it could not be used
    pub fn try_load(path: impl AsRef<Path>) -> Result<Self, PathfindingError> {
        NativePathfinder::load(path).map(Pathfinder::Native)
    }

    /// Load the native library, falling back to [`Pathfinder::Unavailable`]
    pub fn load(path: impl AsRef<Path>) -> Self {
        match Self::try_load(path) {
            Ok(pathfinder) => pathfinder,
            Err(e) => {
                log::warn!("Native pathfinding unavailable: {}", e);
                Pathfinder::Unavailable
            }
        }
    }

    pub fn from_config(config: &PathfindingConfig) -> Self {
        if !config.enabled {
            log::info!("Native pathfinding disabled by config");
            return Pathfinder::Unavailable;
        }
        Self::load(&config.library_path)
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Pathfinder::Native(_))
    }

    /// Path from `start` to `goal`, inclusive of both ends.
    ///
    /// Empty when no path exists or the native library is unavailable.
    pub fn search(
        &self,
        grid: &PassabilityGrid,
        start: IVec2,
        goal: IVec2,
    ) -> Result<Vec<IVec2>, PathfindingError> {
        match self {
            Pathfinder::Native(native) => native.search(grid, start, goal),
            Pathfinder::Unavailable => {
                grid.ensure_contains(start)?;
                grid.ensure_contains(goal)?;
                log::debug!("Pathfinding unavailable, no path {} -> {}", start, goal);
                Ok(Vec::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_gives_empty_path() {
        let pathfinder = Pathfinder::Unavailable;
        let grid = PassabilityGrid::open(3, 3).unwrap();

        assert!(!pathfinder.is_available());
        let path = pathfinder
            .search(&grid, IVec2::ZERO, IVec2::new(2, 2))
            .unwrap();
        assert!(path.is_empty());
    }

    #[test]
    fn test_unavailable_still_validates_cells() {
        let grid = PassabilityGrid::open(3, 3).unwrap();
        let result = Pathfinder::Unavailable.search(&grid, IVec2::new(-1, 0), IVec2::ZERO);
        assert!(matches!(result, Err(PathfindingError::OutOfBounds(_))));
    }

    #[test]
    fn test_try_load_reports_missing_library() {
        let result = Pathfinder::try_load("/definitely/not/here/libastar.so");
        assert!(matches!(result, Err(PathfindingError::LoadError { .. })));
        assert!(!Pathfinder::load("/definitely/not/here/libastar.so").is_available());
    }

    #[test]
    fn test_disabled_config_is_unavailable() {
        let config = PathfindingConfig {
            enabled: false,
            ..PathfindingConfig::default()
        };
        assert!(!Pathfinder::from_config(&config).is_available());
    }
}
