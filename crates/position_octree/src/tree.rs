//! PositionOctree - point storage keyed by `(x, y, z)`.

use glam::I64Vec3;

use crate::error::{OctreeError, OctreeResult};
use crate::node::OctreeNode;

/// Deepest supported tree: one level per bit of an `i64` coordinate.
pub const MAX_DEPTH: u32 = 64;

/// Sparse octree mapping exact integer positions to payloads.
///
/// Every insert and lookup walks `max_depth` levels. With a depth below 64
/// only the low `max_depth` bits of each coordinate are significant, so
/// positions that differ only in higher bits share a leaf.
///
/// The tree has no internal synchronization; wrap it in a lock to share
/// it between threads that mutate it.
#[derive(Clone, Debug)]
pub struct PositionOctree<T> {
  root: OctreeNode<T>,
  len: usize,
}

impl<T> PositionOctree<T> {
  /// Create an empty depth-64 tree.
  pub fn new() -> Self {
    Self {
      root: OctreeNode::new(0, MAX_DEPTH),
      len: 0,
    }
  }

  /// Create an empty tree of the given maximal depth (1..=64).
  pub fn with_max_depth(max_depth: u32) -> OctreeResult<Self> {
    if max_depth == 0 || max_depth > MAX_DEPTH {
      return Err(OctreeError::DepthOutOfRange {
        depth: max_depth,
        max: MAX_DEPTH,
      });
    }
    Ok(Self {
      root: OctreeNode::new(0, max_depth),
      len: 0,
    })
  }

  /// Maximal depth; leaves live at this depth.
  #[inline]
  pub fn max_depth(&self) -> u32 {
    self.root.maximal_depth()
  }

  /// Root node, for read-only traversal.
  #[inline]
  pub fn root(&self) -> &OctreeNode<T> {
    &self.root
  }

  /// Number of positions holding a payload.
  #[inline]
  pub fn len(&self) -> usize {
    self.len
  }

  /// True when nothing was ever inserted.
  #[inline]
  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Store `value` at `(x, y, z)`, returning the payload it replaces.
  ///
  /// Missing nodes along the path are created.
  pub fn insert(&mut self, value: T, x: i64, y: i64, z: i64) -> Option<T> {
    let mut current = &mut self.root;
    while !current.is_leaf() {
      let octant = current.octant_index(x, y, z);
      current = current.child_or_insert(octant);
    }

    let previous = current.replace_value(value);
    if previous.is_none() {
      self.len += 1;
    }
    previous
  }

  /// Payload stored at `(x, y, z)`.
  ///
  /// Returns `None` at the first missing node; never allocates.
  pub fn find(&self, x: i64, y: i64, z: i64) -> Option<&T> {
    let mut current = &self.root;
    while !current.is_leaf() {
      current = current.child(current.octant_index(x, y, z))?;
    }
    current.value()
  }

  /// Mutable payload stored at `(x, y, z)`.
  pub fn find_mut(&mut self, x: i64, y: i64, z: i64) -> Option<&mut T> {
    let mut current = &mut self.root;
    while !current.is_leaf() {
      let octant = current.octant_index(x, y, z);
      current = current.child_mut(octant)?;
    }
    current.value_mut()
  }

  /// [`insert`](Self::insert) taking a vector position.
  #[inline]
  pub fn insert_at(&mut self, value: T, pos: I64Vec3) -> Option<T> {
    self.insert(value, pos.x, pos.y, pos.z)
  }

  /// [`find`](Self::find) taking a vector position.
  #[inline]
  pub fn find_at(&self, pos: I64Vec3) -> Option<&T> {
    self.find(pos.x, pos.y, pos.z)
  }

  /// Total number of allocated nodes, root included.
  pub fn node_count(&self) -> usize {
    let mut count = 0;
    let mut stack = vec![&self.root];
    while let Some(node) = stack.pop() {
      count += 1;
      stack.extend(node.children().map(|(_, child)| child));
    }
    count
  }
}

impl<T> Default for PositionOctree<T> {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
#[path = "tree_test.rs"]
mod tree_test;
