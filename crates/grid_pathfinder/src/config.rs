//! PathFinderConfig - search tuning knobs.

use crate::heuristic::HeuristicFormula;

/// Cost multiplier applied to diagonal steps in heavy-diagonal mode.
pub const HEAVY_DIAGONAL_FACTOR: f64 = 2.41;

/// Tuning for [`GridPathFinder`](crate::GridPathFinder).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PathFinderConfig {
  /// Distance estimate used for H.
  pub formula: HeuristicFormula,

  /// Expand 8 neighbours instead of 4.
  pub diagonals: bool,

  /// Diagonal steps cost `trunc(weight * 2.41)` instead of `weight`.
  pub heavy_diagonals: bool,

  /// Multiplier applied to every heuristic.
  pub heuristic_estimate: i32,

  /// Penalise steps that turn relative to the previous move.
  pub punish_change_direction: bool,

  /// Prefer cells near the straight start-goal line on F ties.
  pub tie_breaker: bool,

  /// Abort once more than this many cells have been closed.
  pub search_limit: usize,

  /// Report start/end/current/open/close debug events.
  pub debug_progress: bool,

  /// Report path debug events after a successful search.
  pub debug_found_path: bool,
}

impl PathFinderConfig {
  /// Number of neighbour directions searched.
  #[inline]
  pub fn direction_count(&self) -> usize {
    if self.diagonals {
      8
    } else {
      4
    }
  }
}

impl Default for PathFinderConfig {
  fn default() -> Self {
    Self {
      formula: HeuristicFormula::Manhattan,
      diagonals: true,
      heavy_diagonals: false,
      heuristic_estimate: 2,
      punish_change_direction: false,
      tie_breaker: false,
      search_limit: 2000,
      debug_progress: false,
      debug_found_path: false,
    }
  }
}
