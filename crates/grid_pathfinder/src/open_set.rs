//! OpenSet - binary min-heap of cell locations keyed by F.
//!
//! Entries carry the F value they were pushed with. A cell pushed again
//! with a better F leaves its old entry behind; the search discards such
//! stale entries when they surface (their cell is already closed).

use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct OpenEntry {
  f: i32,
  seq: u64,
  location: usize,
}

impl Ord for OpenEntry {
  fn cmp(&self, other: &Self) -> Ordering {
    // BinaryHeap is a max-heap: reverse F for lowest-first, and among equal
    // F the most recent push wins.
    other
      .f
      .cmp(&self.f)
      .then_with(|| self.seq.cmp(&other.seq))
  }
}

impl PartialOrd for OpenEntry {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

/// Priority queue of grid locations, lowest F first.
#[derive(Clone, Debug, Default)]
pub struct OpenSet {
  heap: BinaryHeap<OpenEntry>,
  next_seq: u64,
}

impl OpenSet {
  pub fn new() -> Self {
    Self::default()
  }

  /// Queue `location` with priority `f`.
  #[inline]
  pub fn push(&mut self, location: usize, f: i32) {
    let seq = self.next_seq;
    self.next_seq += 1;
    self.heap.push(OpenEntry { f, seq, location });
  }

  /// Remove and return the location with the lowest F.
  #[inline]
  pub fn pop(&mut self) -> Option<usize> {
    self.heap.pop().map(|entry| entry.location)
  }

  /// Lowest queued F without removing it.
  pub fn peek_f(&self) -> Option<i32> {
    self.heap.peek().map(|entry| entry.f)
  }

  #[inline]
  pub fn len(&self) -> usize {
    self.heap.len()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.heap.is_empty()
  }

  /// Drop every entry, keeping the allocation.
  pub fn clear(&mut self) {
    self.heap.clear();
    self.next_seq = 0;
  }
}

#[cfg(test)]
#[path = "open_set_test.rs"]
mod open_set_test;
