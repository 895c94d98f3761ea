//! grid_pathfinder - A* search over power-of-two weighted grids.
//!
//! A [`GridPathFinder`] owns a [`WeightGrid`] and reusable per-cell scratch
//! state. Each [`find_path`](GridPathFinder::find_path) call runs a bounded
//! best-first search and returns the path goal-first, or `None`.
//!
//! # Grid Convention
//!
//! ```text
//! weight 0      impassable
//! weight 1..255 cost of entering the cell
//! location      (y << log2(width)) | x
//! ```
//!
//! # Example
//!
//! ```
//! use grid_pathfinder::{GridPathFinder, Point, WeightGrid};
//!
//! let mut grid = WeightGrid::for_tileset(4, 4);
//! grid.mark_tile(1, 0, true);
//! grid.mark_tile(1, 1, true);
//!
//! let finder = GridPathFinder::new(grid).unwrap();
//! let path = finder.find_path(Point::new(0, 0), Point::new(2, 0)).unwrap();
//!
//! assert_eq!(path.first().map(|n| n.point()), Some(Point::new(2, 0)));
//! assert_eq!(path.last().map(|n| n.point()), Some(Point::new(0, 0)));
//! ```

pub mod config;
pub mod debug;
pub mod error;
pub mod finder;
pub mod grid;
pub mod heuristic;
pub mod open_set;

pub use config::{PathFinderConfig, HEAVY_DIAGONAL_FACTOR};
pub use debug::{DebugEvent, DebugHandler, DebugKind};
pub use error::{PathFinderError, PathFinderResult};
pub use finder::{GridPathFinder, PathNode, SearchOutcome, SearchStats};
pub use grid::{round_to_power_of_two, Point, WeightGrid, BLOCKED_TILE, EMPTY_TILE};
pub use heuristic::{tie_break, HeuristicFormula};
pub use open_set::OpenSet;
