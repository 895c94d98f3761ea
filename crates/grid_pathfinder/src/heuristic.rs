//! Heuristic formulas for estimating the remaining cost to the goal.
//!
//! Every formula is scaled by the integer `heuristic_estimate` multiplier
//! from [`PathFinderConfig`](crate::PathFinderConfig). Fractional results
//! are truncated toward zero.

use crate::grid::Point;

/// Selectable distance estimate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HeuristicFormula {
  /// `dx + dy`
  #[default]
  Manhattan,
  /// `max(dx, dy)` (Chebyshev)
  #[cfg_attr(feature = "serde", serde(rename = "max_dxdy"))]
  MaxDxDy,
  /// Octile-like split: diagonal part costs double, the rest single.
  DiagonalShortCut,
  /// `sqrt(dx² + dy²)`
  Euclidean,
  /// `dx² + dy²`
  EuclideanNoSqr,
  /// Orthogonal/diagonal decomposition summed with `dx + dy`.
  Custom1,
}

impl HeuristicFormula {
  /// All formulas, in declaration order.
  pub const ALL: [HeuristicFormula; 6] = [
    HeuristicFormula::Manhattan,
    HeuristicFormula::MaxDxDy,
    HeuristicFormula::DiagonalShortCut,
    HeuristicFormula::Euclidean,
    HeuristicFormula::EuclideanNoSqr,
    HeuristicFormula::Custom1,
  ];

  /// Estimated cost from `from` to `goal`, scaled by `estimate`.
  ///
  /// Computed in `i64` and saturated into the `i32` range.
  pub fn estimate(self, estimate: i32, from: Point, goal: Point) -> i32 {
    let estimate = estimate as i64;
    let dx = (from.x as i64 - goal.x as i64).abs();
    let dy = (from.y as i64 - goal.y as i64).abs();

    let h = match self {
      HeuristicFormula::Manhattan => estimate.saturating_mul(dx + dy),
      HeuristicFormula::MaxDxDy => estimate.saturating_mul(dx.max(dy)),
      HeuristicFormula::DiagonalShortCut => {
        let diagonal = dx.min(dy);
        let straight = dx + dy;
        estimate
          .saturating_mul(2 * diagonal)
          .saturating_add(estimate.saturating_mul(straight - 2 * diagonal))
      }
      HeuristicFormula::Euclidean => {
        let length = ((dx as f64).powi(2) + (dy as f64).powi(2)).sqrt();
        (estimate as f64 * length) as i64
      }
      HeuristicFormula::EuclideanNoSqr => {
        let squared = dx.saturating_mul(dx).saturating_add(dy.saturating_mul(dy));
        estimate.saturating_mul(squared)
      }
      HeuristicFormula::Custom1 => {
        let orthogonal = (dx - dy).abs();
        let diagonal = ((dx + dy - orthogonal) / 2).abs();
        estimate.saturating_mul(diagonal + orthogonal + dx + dy)
      }
    };
    saturate(h)
  }
}

/// Clamp a wide cost into the `i32` range.
#[inline]
fn saturate(value: i64) -> i32 {
  value.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

/// Nudge `h` by the cross product of `start -> goal` and `current -> goal`
/// so cells near the straight line win ties.
#[inline]
pub fn tie_break(h: i32, current: Point, start: Point, goal: Point) -> i32 {
  let (dx1, dy1) = (current.x as i64 - goal.x as i64, current.y as i64 - goal.y as i64);
  let (dx2, dy2) = (start.x as i64 - goal.x as i64, start.y as i64 - goal.y as i64);
  let cross = (dx1 * dy2 - dx2 * dy1).abs();
  // Float to int casts saturate.
  (h as f64 + cross as f64 * 0.001) as i32
}

#[cfg(test)]
#[path = "heuristic_test.rs"]
mod heuristic_test;
