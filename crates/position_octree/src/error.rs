//! Error types for octree construction.

/// Errors raised when configuring a [`PositionOctree`](crate::PositionOctree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum OctreeError {
  /// Requested maximal depth is zero or wider than an `i64` coordinate.
  #[error("octree depth {depth} is out of range (expected 1..={max})")]
  DepthOutOfRange { depth: u32, max: u32 },
}

/// Result alias for octree operations.
pub type OctreeResult<T> = Result<T, OctreeError>;
