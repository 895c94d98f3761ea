//! Error types for grid and pathfinder construction.

/// Fatal construction errors. Search failures are not errors; they surface
/// as `None` from [`GridPathFinder::find_path`](crate::GridPathFinder::find_path).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PathFinderError {
  /// Grid has no cells.
  #[error("Grid cannot be null")]
  EmptyGrid,

  /// Width or height is not a power of two.
  #[error("Invalid Grid, size in X and Y must be power of 2 (got {width}x{height})")]
  NotPowerOfTwo { width: usize, height: usize },

  /// Cell buffer length disagrees with the declared dimensions.
  #[error("grid data has {actual} cells, expected {expected}")]
  SizeMismatch { expected: usize, actual: usize },
}

/// Result alias for pathfinder construction.
pub type PathFinderResult<T> = Result<T, PathFinderError>;
