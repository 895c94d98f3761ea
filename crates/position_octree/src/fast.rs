//! Direct-index lookup for full-depth (64 level) trees.
//!
//! All 64 octant indices are derived from the coordinate bits up front,
//! then a single loop chains through the child arrays. The index math has
//! no branches; the walk exits at the first absent child.

use crate::tree::PositionOctree;

/// Only trees of this depth are accepted by [`find_fast64`].
pub const FAST_DEPTH: u32 = 64;

/// Octant index for every level of a depth-64 walk, root first.
///
/// Entry `i` combines bit `63 - i` of each coordinate using the same layout
/// as [`OctreeNode::octant_index`](crate::OctreeNode::octant_index).
#[inline]
pub fn octant_path64(x: i64, y: i64, z: i64) -> [u8; FAST_DEPTH as usize] {
  let (x, y, z) = (x as u64, y as u64, z as u64);
  let mut path = [0u8; FAST_DEPTH as usize];
  for (level, octant) in path.iter_mut().enumerate() {
    let shift = 63 - level as u32;
    *octant = ((((x >> shift) & 1) << 2) | (((y >> shift) & 1) << 1) | ((z >> shift) & 1)) as u8;
  }
  path
}

/// Same answer as [`PositionOctree::find`] for depth-64 trees.
///
/// # Panics
///
/// Panics if `tree` was not built with a maximal depth of 64.
pub fn find_fast64<T>(tree: &PositionOctree<T>, x: i64, y: i64, z: i64) -> Option<&T> {
  assert_eq!(
    tree.max_depth(),
    FAST_DEPTH,
    "find_fast64 requires a tree of depth {}",
    FAST_DEPTH
  );

  let path = octant_path64(x, y, z);
  let mut current = tree.root();
  for &octant in &path {
    current = current.child(octant as usize)?;
  }
  current.value()
}

#[cfg(test)]
#[path = "fast_test.rs"]
mod fast_test;
