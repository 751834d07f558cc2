use gridstar_core::Point;

/// Edge costs and heuristic used by the A* search.
///
/// `estimate` must be admissible (never above the true remaining cost) and
/// consistent (`estimate(a, t) <= cost(a, b) + estimate(b, t)` for adjacent
/// `a`, `b`). Closed cells are never reopened, so an inconsistent model
/// loses the optimality guarantee.
pub trait CostModel {
    /// Cost of moving from `from` to the adjacent cell `to`. Must be > 0.
    fn cost(&self, from: Point, to: Point) -> f64;

    /// Estimated cost from `from` to `to`.
    fn estimate(&self, from: Point, to: Point) -> f64;
}
