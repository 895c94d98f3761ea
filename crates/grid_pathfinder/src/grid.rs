//! WeightGrid - row-major byte weights plus the tile helpers used by levels.
//!
//! A weight of `0` is impassable; any other value is the cost of entering
//! the cell.

use crate::error::{PathFinderError, PathFinderResult};

/// Weight of a walkable tile in grids built by [`WeightGrid::for_tileset`].
pub const EMPTY_TILE: u8 = 1;

/// Weight of an impassable tile.
pub const BLOCKED_TILE: u8 = 0;

/// Smallest power of two that is `>= n` (minimum 1).
#[inline]
pub fn round_to_power_of_two(n: usize) -> usize {
  n.max(1).next_power_of_two()
}

/// Integer cell coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
  pub x: i32,
  pub y: i32,
}

impl Point {
  #[inline]
  pub const fn new(x: i32, y: i32) -> Self {
    Self { x, y }
  }

  /// |dx| + |dy|.
  #[inline]
  pub fn manhattan(self, other: Point) -> i32 {
    (self.x - other.x).abs() + (self.y - other.y).abs()
  }
}

impl From<(i32, i32)> for Point {
  fn from((x, y): (i32, i32)) -> Self {
    Self { x, y }
  }
}

/// Byte weights for a `width x height` grid, stored row by row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeightGrid {
  width: usize,
  height: usize,
  cells: Vec<u8>,
}

impl WeightGrid {
  /// Wrap an existing row-major buffer.
  ///
  /// Only the buffer length is checked here; dimension rules are enforced
  /// by [`GridPathFinder::new`](crate::GridPathFinder::new).
  pub fn from_cells(width: usize, height: usize, cells: Vec<u8>) -> PathFinderResult<Self> {
    let expected = width * height;
    if cells.len() != expected {
      return Err(PathFinderError::SizeMismatch {
        expected,
        actual: cells.len(),
      });
    }
    Ok(Self {
      width,
      height,
      cells,
    })
  }

  /// Grid with every cell set to `weight`.
  pub fn filled(width: usize, height: usize, weight: u8) -> Self {
    Self {
      width,
      height,
      cells: vec![weight; width * height],
    }
  }

  /// Walkable grid large enough for a `width x height` tileset, with both
  /// dimensions rounded up to powers of two.
  pub fn for_tileset(width: usize, height: usize) -> Self {
    Self::filled(
      round_to_power_of_two(width),
      round_to_power_of_two(height),
      EMPTY_TILE,
    )
  }

  #[inline]
  pub fn width(&self) -> usize {
    self.width
  }

  #[inline]
  pub fn height(&self) -> usize {
    self.height
  }

  /// Raw row-major weights.
  #[inline]
  pub fn cells(&self) -> &[u8] {
    &self.cells
  }

  /// True if `p` lies inside the grid.
  #[inline]
  pub fn contains(&self, p: Point) -> bool {
    p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height
  }

  /// Row-major index of an in-bounds point.
  #[inline]
  pub(crate) fn index_of(&self, p: Point) -> usize {
    p.y as usize * self.width + p.x as usize
  }

  /// Weight at `p`, or `None` outside the grid.
  #[inline]
  pub fn weight(&self, p: Point) -> Option<u8> {
    self.contains(p).then(|| self.cells[self.index_of(p)])
  }

  /// Set the weight at `p`. Returns false (and does nothing) outside the grid.
  pub fn set_weight(&mut self, p: Point, weight: u8) -> bool {
    if !self.contains(p) {
      return false;
    }
    let index = self.index_of(p);
    self.cells[index] = weight;
    true
  }

  /// Mark a tile as blocked or walkable.
  pub fn mark_tile(&mut self, x: i32, y: i32, blocked: bool) -> bool {
    let weight = if blocked { BLOCKED_TILE } else { EMPTY_TILE };
    self.set_weight(Point::new(x, y), weight)
  }

  /// True if `p` is inside the grid and passable.
  #[inline]
  pub fn is_walkable(&self, p: Point) -> bool {
    self.weight(p).is_some_and(|w| w != BLOCKED_TILE)
  }
}

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;
