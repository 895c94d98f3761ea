//! position_octree - sparse storage of one payload per integer 3D position.
//!
//! The tree has a fixed maximal depth (64 by default, which covers the full
//! `i64` range on every axis). Each level consumes one bit of each
//! coordinate, most significant bit first, so a lookup or insert always
//! walks exactly `max_depth` levels. Nodes are created lazily on insert and
//! never removed.
//!
//! # Octant Convention
//!
//! ```text
//! octant = (x_bit << 2) | (y_bit << 1) | z_bit
//! ```
//!
//! where `*_bit` is the coordinate bit tested at the node's depth.
//!
//! # Example
//!
//! ```
//! use position_octree::{find_fast64, PositionOctree};
//!
//! let mut tree = PositionOctree::new();
//! tree.insert("spawn", 10, -4, 7);
//!
//! assert_eq!(tree.find(10, -4, 7), Some(&"spawn"));
//! assert_eq!(find_fast64(&tree, 10, -4, 7), Some(&"spawn"));
//! assert_eq!(tree.find(0, 0, 0), None);
//! ```

pub mod error;
pub mod fast;
pub mod node;
pub mod tree;

pub use error::{OctreeError, OctreeResult};
pub use fast::{find_fast64, octant_path64, FAST_DEPTH};
pub use node::{OctreeNode, OCTANT_COUNT};
pub use tree::{PositionOctree, MAX_DEPTH};
