use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::*;
use crate::OctreeNode;

// =========================================================================
// octant_path64
// =========================================================================

/// The precomputed path matches per-node octant tests at every depth.
#[test]
fn test_path_matches_node_octants() {
  let samples = [
    (0i64, 0i64, 0i64),
    (-1, 0, 1),
    (i64::MIN, i64::MAX, 12345),
    (0x5555_5555_5555_5555, -0x2222_2222_2222_2222, 7),
  ];

  for (x, y, z) in samples {
    let path = octant_path64(x, y, z);
    for depth in 0..FAST_DEPTH {
      let node: OctreeNode<()> = OctreeNode::new(depth, FAST_DEPTH);
      assert_eq!(
        path[depth as usize] as usize,
        node.octant_index(x, y, z),
        "level {} differs for ({}, {}, {})",
        depth,
        x,
        y,
        z
      );
    }
  }
}

/// -1 sets every bit on its axis.
#[test]
fn test_path_all_ones() {
  assert!(octant_path64(-1, 0, 0).iter().all(|&o| o == 4));
  assert!(octant_path64(0, -1, 0).iter().all(|&o| o == 2));
  assert!(octant_path64(0, 0, -1).iter().all(|&o| o == 1));
  assert!(octant_path64(0, 0, 0).iter().all(|&o| o == 0));
}

// =========================================================================
// find_fast64
// =========================================================================

/// Empty tree: absent everywhere, no panic.
#[test]
fn test_fast_lookup_on_empty_tree() {
  let tree: PositionOctree<u8> = PositionOctree::new();
  assert_eq!(find_fast64(&tree, 0, 0, 0), None);
  assert_eq!(find_fast64(&tree, i64::MIN, i64::MAX, -1), None);
}

/// Agrees with find for inserted and absent coordinates.
#[test]
fn test_fast_lookup_matches_find() {
  let mut rng = StdRng::seed_from_u64(64);
  let mut tree = PositionOctree::new();
  let mut inserted = Vec::new();

  for i in 0..500u32 {
    let pos: (i64, i64, i64) = (rng.random(), rng.random(), rng.random());
    tree.insert(i, pos.0, pos.1, pos.2);
    inserted.push(pos);
  }

  for &(x, y, z) in &inserted {
    assert!(find_fast64(&tree, x, y, z).is_some());
    assert_eq!(find_fast64(&tree, x, y, z), tree.find(x, y, z));
  }

  // Neighbours of inserted points share a long prefix but usually miss.
  for &(x, y, z) in &inserted {
    let neighbour = (x ^ 1, y, z);
    assert_eq!(
      find_fast64(&tree, neighbour.0, neighbour.1, neighbour.2),
      tree.find(neighbour.0, neighbour.1, neighbour.2)
    );
  }
}

/// Extremes resolve through the fast path.
#[test]
fn test_fast_lookup_extremes() {
  let mut tree = PositionOctree::new();
  tree.insert("min", i64::MIN, i64::MIN, i64::MIN);
  tree.insert("max", i64::MAX, i64::MAX, i64::MAX);

  assert_eq!(find_fast64(&tree, i64::MIN, i64::MIN, i64::MIN), Some(&"min"));
  assert_eq!(find_fast64(&tree, i64::MAX, i64::MAX, i64::MAX), Some(&"max"));
  assert_eq!(find_fast64(&tree, i64::MAX, i64::MIN, i64::MAX), None);
}

/// Shallow trees are rejected.
#[test]
#[should_panic(expected = "requires a tree of depth 64")]
fn test_fast_lookup_rejects_shallow_tree() {
  let tree: PositionOctree<u8> = PositionOctree::with_max_depth(32).unwrap();
  let _ = find_fast64(&tree, 0, 0, 0);
}
