//! OctreeNode - one cube of the position octree.
//!
//! A node at depth `d` in a tree of maximal depth `D` splits its cube on bit
//! `D - d - 1` of every axis. Leaves sit at depth `D` and are the only nodes
//! that ever carry a payload.

/// Number of children per node.
pub const OCTANT_COUNT: usize = 8;

/// Octree node owning up to 8 children and, at leaf depth, one payload.
///
/// Children are allocated lazily by [`PositionOctree::insert`] and are
/// exclusively owned; dropping a node drops its whole subtree.
///
/// [`PositionOctree::insert`]: crate::PositionOctree::insert
#[derive(Clone, Debug)]
pub struct OctreeNode<T> {
  children: [Option<Box<OctreeNode<T>>>; OCTANT_COUNT],
  value: Option<T>,
  current_depth: u32,
  maximal_depth: u32,
  /// Coordinate bit tested at this depth (0 for leaves).
  mask_at_depth: u64,
}

impl<T> OctreeNode<T> {
  /// Create an empty node at `current_depth` of a tree of `maximal_depth`.
  pub(crate) fn new(current_depth: u32, maximal_depth: u32) -> Self {
    debug_assert!(current_depth <= maximal_depth);
    let mask_at_depth = if current_depth < maximal_depth {
      1u64 << (maximal_depth - current_depth - 1)
    } else {
      0
    };
    Self {
      children: Default::default(),
      value: None,
      current_depth,
      maximal_depth,
      mask_at_depth,
    }
  }

  /// Depth of this node (0 = root).
  #[inline]
  pub fn current_depth(&self) -> u32 {
    self.current_depth
  }

  /// Maximal depth of the tree this node belongs to.
  #[inline]
  pub fn maximal_depth(&self) -> u32 {
    self.maximal_depth
  }

  /// Bit mask tested against each coordinate at this depth.
  #[inline]
  pub fn mask_at_depth(&self) -> u64 {
    self.mask_at_depth
  }

  /// True for nodes at leaf depth.
  #[inline]
  pub fn is_leaf(&self) -> bool {
    self.current_depth == self.maximal_depth
  }

  /// Octant index of the child containing `(x, y, z)`.
  ///
  /// Bit layout: x is bit 2, y is bit 1, z is bit 0.
  #[inline]
  pub fn octant_index(&self, x: i64, y: i64, z: i64) -> usize {
    let mask = self.mask_at_depth;
    let x_bit = ((x as u64 & mask) != 0) as usize;
    let y_bit = ((y as u64 & mask) != 0) as usize;
    let z_bit = ((z as u64 & mask) != 0) as usize;
    (x_bit << 2) | (y_bit << 1) | z_bit
  }

  /// Child at `octant`, if it was ever created.
  #[inline]
  pub fn child(&self, octant: usize) -> Option<&OctreeNode<T>> {
    self.children[octant].as_deref()
  }

  #[inline]
  pub(crate) fn child_mut(&mut self, octant: usize) -> Option<&mut OctreeNode<T>> {
    self.children[octant].as_deref_mut()
  }

  /// Child at `octant`, allocating it one level deeper when absent.
  pub(crate) fn child_or_insert(&mut self, octant: usize) -> &mut OctreeNode<T> {
    let depth = self.current_depth + 1;
    let maximal_depth = self.maximal_depth;
    self.children[octant].get_or_insert_with(|| {
      #[cfg(feature = "tracing")]
      tracing::trace!(depth, octant, "allocating octree node");
      Box::new(OctreeNode::new(depth, maximal_depth))
    })
  }

  /// Existing children with their octant index.
  pub fn children(&self) -> impl Iterator<Item = (usize, &OctreeNode<T>)> {
    self
      .children
      .iter()
      .enumerate()
      .filter_map(|(octant, child)| child.as_deref().map(|node| (octant, node)))
  }

  /// Number of allocated children.
  pub fn child_count(&self) -> usize {
    self.children.iter().filter(|child| child.is_some()).count()
  }

  /// Stored payload (only ever present on leaves).
  #[inline]
  pub fn value(&self) -> Option<&T> {
    self.value.as_ref()
  }

  #[inline]
  pub(crate) fn value_mut(&mut self) -> Option<&mut T> {
    self.value.as_mut()
  }

  /// Store `value` on this leaf, returning the payload it replaces.
  pub(crate) fn replace_value(&mut self, value: T) -> Option<T> {
    debug_assert!(self.is_leaf(), "payloads are only stored at leaf depth");
    self.value.replace(value)
  }
}

#[cfg(test)]
#[path = "node_test.rs"]
mod node_test;
