use super::grid::{PassabilityGrid, BLOCKED, PATH};
use super::PathfindingError;
use glam::IVec2;
use libloading::{Library, Symbol};
use std::collections::VecDeque;
use std::os::raw::c_int;
use std::path::Path;

/// Exported name of the native search
pub const SEARCH_SYMBOL: &[u8] = b"aStarSearch\0";

/// `void aStarSearch(int *grid, int width, int height, int sx, int sy, int gx, int gy)`
///
/// Marks the cells of the found path with [`PATH`] in place. Blocks until the
/// search finishes and performs no validation of its own.
pub type AStarSearchFn = unsafe extern "C" fn(
    grid: *mut c_int,
    width: c_int,
    height: c_int,
    start_x: c_int,
    start_y: c_int,
    goal_x: c_int,
    goal_y: c_int,
);

/// Handle to a native A* implementation
pub struct NativePathfinder {
    search_fn: AStarSearchFn,
    /// Keeps the symbol's code mapped. `None` for statically linked functions.
    _library: Option<Library>,
}

impl std::fmt::Debug for NativePathfinder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativePathfinder")
            .field("dynamic", &self._library.is_some())
            .finish()
    }
}

impl NativePathfinder {
    /// Open a shared library and resolve its search function
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PathfindingError> {
        let path = path.as_ref();

        let library = unsafe {
            Library::new(path).map_err(|e| PathfindingError::LoadError {
                path: path.display().to_string(),
                error: e.to_string(),
            })?
        };

        let search_fn = unsafe {
            let symbol: Symbol<AStarSearchFn> =
                library
                    .get(SEARCH_SYMBOL)
                    .map_err(|e| PathfindingError::SymbolError {
                        symbol: "aStarSearch",
                        error: e.to_string(),
                    })?;
            *symbol
        };

        log::info!("Loaded native pathfinding from {}", path.display());
        Ok(Self {
            search_fn,
            _library: Some(library),
        })
    }

    /// Wrap a search function that is already linked into the process.
    ///
    /// # Safety
    ///
    /// `search_fn` must only write inside the `width * height` buffer it is
    /// given and must not keep the pointer after returning.
    pub unsafe fn from_fn(search_fn: AStarSearchFn) -> Self {
        Self {
            search_fn,
            _library: None,
        }
    }

    /// Run the native search and return the path cells from `start` to `goal`.
    ///
    /// An empty path means no path was found.
    pub fn search(
        &self,
        grid: &PassabilityGrid,
        start: IVec2,
        goal: IVec2,
    ) -> Result<Vec<IVec2>, PathfindingError> {
        grid.ensure_contains(start)?;
        grid.ensure_contains(goal)?;

        let mut scratch = grid.cells().to_vec();
        // Dimensions were checked to fit c_int when the grid was built.
        unsafe {
            (self.search_fn)(
                scratch.as_mut_ptr(),
                grid.width() as c_int,
                grid.height() as c_int,
                start.x,
                start.y,
                goal.x,
                goal.y,
            );
        }

        let marked = PassabilityGrid::new(scratch, grid.width(), grid.height())?;
        let path = trace_marked_path(&marked, start, goal);
        log::debug!(
            "Native search {} -> {} found {} cells",
            start,
            goal,
            path.len()
        );
        Ok(path)
    }
}

/// Order the cells the native search marked into a walk from `start` to `goal`.
///
/// Breadth-first over the 4-neighbourhood, stepping only on marked cells and
/// the goal. Returns an empty path when the marks do not connect.
fn trace_marked_path(marked: &PassabilityGrid, start: IVec2, goal: IVec2) -> Vec<IVec2> {
    if marked.get(goal) == Some(BLOCKED) {
        return Vec::new();
    }
    if start == goal {
        return vec![start];
    }

    let mut came_from: Vec<Option<IVec2>> = vec![None; marked.cells().len()];
    let mut queue = VecDeque::from([start]);
    let Some(start_index) = marked.index_of(start) else {
        return Vec::new();
    };
    came_from[start_index] = Some(start);

    while let Some(cell) = queue.pop_front() {
        if cell == goal {
            let mut path = vec![goal];
            let mut current = goal;
            while current != start {
                let Some(previous) = marked.index_of(current).and_then(|i| came_from[i]) else {
                    return Vec::new();
                };
                path.push(previous);
                current = previous;
            }
            path.reverse();
            return path;
        }

        for step in [IVec2::X, IVec2::NEG_X, IVec2::Y, IVec2::NEG_Y] {
            let next = cell + step;
            let Some(index) = marked.index_of(next) else {
                continue;
            };
            let walkable = next == goal || marked.cells()[index] == PATH;
            if walkable && came_from[index].is_none() {
                came_from[index] = Some(cell);
                queue.push_back(next);
            }
        }
    }

    Vec::new()
}
