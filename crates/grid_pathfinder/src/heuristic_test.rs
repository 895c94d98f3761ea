use super::*;

const ORIGIN: Point = Point::new(0, 0);

// =========================================================================
// Formulas
// =========================================================================

/// Every formula is zero at the goal.
#[test]
fn test_zero_at_goal() {
  for formula in HeuristicFormula::ALL {
    assert_eq!(
      formula.estimate(3, Point::new(5, 7), Point::new(5, 7)),
      0,
      "{:?} should be zero at the goal",
      formula
    );
  }
}

/// Values for a (3, 4) offset with estimate 1 and 2.
#[test]
fn test_formula_values() {
  let from = Point::new(3, -4);

  assert_eq!(HeuristicFormula::Manhattan.estimate(1, from, ORIGIN), 7);
  assert_eq!(HeuristicFormula::MaxDxDy.estimate(1, from, ORIGIN), 4);
  // diagonal = 3, straight = 7: 2*3 + (7 - 6)
  assert_eq!(HeuristicFormula::DiagonalShortCut.estimate(1, from, ORIGIN), 7);
  assert_eq!(HeuristicFormula::Euclidean.estimate(1, from, ORIGIN), 5);
  assert_eq!(HeuristicFormula::EuclideanNoSqr.estimate(1, from, ORIGIN), 25);
  // orthogonal = 1, diagonal = 3: 3 + 1 + 3 + 4
  assert_eq!(HeuristicFormula::Custom1.estimate(1, from, ORIGIN), 11);

  assert_eq!(HeuristicFormula::Manhattan.estimate(2, from, ORIGIN), 14);
  assert_eq!(HeuristicFormula::Euclidean.estimate(2, from, ORIGIN), 10);
}

/// Euclidean uses dx on the x axis (not a mixed-up axis) and truncates.
#[test]
fn test_euclidean_axes_and_truncation() {
  // sqrt(1 + 1) * 1 = 1.414 -> 1
  assert_eq!(
    HeuristicFormula::Euclidean.estimate(1, Point::new(1, 1), ORIGIN),
    1
  );
  // Pure x offset: only dx contributes.
  assert_eq!(
    HeuristicFormula::Euclidean.estimate(1, Point::new(6, 2), Point::new(0, 2)),
    6
  );
}

/// Heuristics are symmetric in direction.
#[test]
fn test_symmetric() {
  let a = Point::new(-3, 9);
  let b = Point::new(4, 1);
  for formula in HeuristicFormula::ALL {
    assert_eq!(formula.estimate(2, a, b), formula.estimate(2, b, a));
  }
}

/// Results past i32 saturate at i32::MAX instead of wrapping.
#[test]
fn test_saturates_large_values() {
  let far = Point::new(65535, 0);
  assert_eq!(HeuristicFormula::EuclideanNoSqr.estimate(1, far, ORIGIN), i32::MAX);
  assert_eq!(HeuristicFormula::EuclideanNoSqr.estimate(2, Point::new(32768, 0), ORIGIN), i32::MAX);
  // Just below the limit stays exact.
  assert_eq!(
    HeuristicFormula::EuclideanNoSqr.estimate(1, Point::new(46340, 0), ORIGIN),
    46340 * 46340
  );

  let wide = Point::new(i32::MAX, i32::MAX);
  let corner = Point::new(i32::MIN, i32::MIN);
  for formula in HeuristicFormula::ALL {
    assert_eq!(formula.estimate(i32::MAX, far, ORIGIN), i32::MAX, "{:?}", formula);
    assert_eq!(formula.estimate(1, wide, corner), i32::MAX, "{:?}", formula);
  }
}

// =========================================================================
// Tie breaker
// =========================================================================

/// Cells on the start-goal line get no nudge; small offsets truncate away.
#[test]
fn test_tie_break() {
  let start = Point::new(0, 0);
  let goal = Point::new(10, 10);

  assert_eq!(tie_break(12, Point::new(5, 5), start, goal), 12);
  // cross = |(-5)(-10) - (-10)(-4)| = 10 -> +0.01 -> truncated
  assert_eq!(tie_break(12, Point::new(5, 6), start, goal), 12);
  // cross = 1000 -> +1
  assert_eq!(tie_break(12, Point::new(-90, 10), start, goal), 13);
}

/// Cross products of far-apart points do not overflow.
#[test]
fn test_tie_break_large_cross() {
  let start = Point::new(0, 0);
  let goal = Point::new(65535, 0);
  // cross = 65535 * 65535 -> +4294836 on top of h, saturated.
  assert_eq!(tie_break(i32::MAX, Point::new(0, 65535), start, goal), i32::MAX);
  assert_eq!(tie_break(0, Point::new(0, 65535), start, goal), 4_294_836);
}
