use gridstar_core::Point;

use crate::traits::CostModel;

/// Euclidean (L2) distance between two points.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    f64::from(a.x - b.x).hypot(f64::from(a.y - b.y))
}

/// Sum of the Euclidean lengths of consecutive steps of `path`.
///
/// The direction of the path does not matter.
pub fn path_cost(path: &[Point]) -> f64 {
    path.windows(2).map(|w| euclidean(w[0], w[1])).sum()
}

/// Euclidean edge costs with the Euclidean distance as heuristic: 1 for an
/// orthogonal step, √2 for a diagonal one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Euclidean;

impl CostModel for Euclidean {
    #[inline]
    fn cost(&self, from: Point, to: Point) -> f64 {
        euclidean(from, to)
    }

    #[inline]
    fn estimate(&self, from: Point, to: Point) -> f64 {
        euclidean(from, to)
    }
}
