use gridstar_core::{Grid, Point};

use crate::error::{Endpoint, SearchError};
use crate::interrupt::{Interrupt, Never};
use crate::result::{PathResult, SearchStats, SearchStatus};
use crate::space::{NO_PARENT, SearchSpace, fresh};
use crate::traits::CostModel;

/// Flat index of an in-bounds endpoint.
pub(crate) fn endpoint_index(
    grid: &Grid,
    endpoint: Endpoint,
    p: Point,
) -> Result<usize, SearchError> {
    grid.index(p).ok_or(SearchError::OutOfBounds {
        endpoint,
        point: p,
        width: grid.width(),
        height: grid.height(),
    })
}

/// Bounds and passability checks for both endpoints.
fn validate(grid: &Grid, source: Point, target: Point) -> Result<(usize, usize), SearchError> {
    let start = endpoint_index(grid, Endpoint::Source, source)?;
    let goal = endpoint_index(grid, Endpoint::Target, target)?;
    for (endpoint, point, idx) in [
        (Endpoint::Source, source, start),
        (Endpoint::Target, target, goal),
    ] {
        if !grid.is_passable_index(idx) {
            return Err(SearchError::InvalidEndpoint { endpoint, point });
        }
    }
    Ok((start, goal))
}

impl SearchSpace {
    /// Find a least-cost path from `source` to `target` with A*.
    ///
    /// The returned path runs from `target` back to `source`. See
    /// [`astar_with`](Self::astar_with) for the details.
    pub fn astar<C: CostModel>(
        &mut self,
        grid: &Grid,
        source: Point,
        target: Point,
        model: &C,
    ) -> Result<PathResult, SearchError> {
        self.astar_with(grid, source, target, model, &mut Never, false)
    }

    /// Find a least-cost path from `source` to `target` with A*, consulting
    /// `interrupt` before every expansion.
    ///
    /// Both endpoints must be inside `grid` and passable; otherwise an error
    /// is returned and the scratch state of the previous search is left as
    /// it was. If `source == target` the path is `[source]`.
    ///
    /// The frontier is ordered by `f = g + h`, then `h`, then discovery
    /// order, and neighbors are visited in the grid's fixed order, so equal
    /// inputs always give the same path and the same expansion order. With
    /// `record_trace` the expansion order is returned in
    /// [`PathResult::trace`].
    pub fn astar_with<C, I>(
        &mut self,
        grid: &Grid,
        source: Point,
        target: Point,
        model: &C,
        interrupt: &mut I,
        record_trace: bool,
    ) -> Result<PathResult, SearchError>
    where
        C: CostModel,
        I: Interrupt + ?Sized,
    {
        let (start, goal) = validate(grid, source, target)?;
        let cur_gen = self.begin(grid);
        let mut stats = SearchStats::default();
        let mut trace = Vec::new();

        let h0 = model.estimate(source, target);
        {
            let n = fresh(&mut self.nodes, start, cur_gen);
            n.g = 0.0;
            n.h = h0;
        }

        if start == goal {
            self.nodes[start].closed = true;
            return Ok(PathResult::found(vec![source], 0.0, stats, trace));
        }

        self.open.push(start, h0, h0);
        stats.pushed += 1;

        let status = loop {
            let Some(ci) = self.open.peek() else {
                break SearchStatus::Exhausted;
            };
            if interrupt.should_stop(stats.expanded) {
                break SearchStatus::Interrupted;
            }
            self.open.pop();

            let cp = grid.point(ci);
            self.nodes[ci].closed = true;
            stats.expanded += 1;
            if record_trace {
                trace.push(cp);
            }
            if ci == goal {
                break SearchStatus::Found;
            }

            let cur_g = self.nodes[ci].g;
            for &ni in grid.neighbor_indices(ci) {
                if !grid.is_passable_index(ni) {
                    continue;
                }
                let n = fresh(&mut self.nodes, ni, cur_gen);
                if n.closed {
                    continue;
                }
                let np = grid.point(ni);
                let tentative_g = cur_g + model.cost(cp, np);
                if n.g.is_finite() {
                    if tentative_g >= n.g {
                        continue;
                    }
                } else {
                    n.h = model.estimate(np, target);
                }
                n.g = tentative_g;
                n.parent = ci;
                let (f, h) = (n.g + n.h, n.h);

                if self.open.decrease_key(ni, f, h) {
                    stats.decreased += 1;
                } else {
                    self.open.push(ni, f, h);
                    stats.pushed += 1;
                }
            }
        };

        log::debug!(
            "astar {source} -> {target}: {status:?} (expanded {}, pushed {}, decreased {})",
            stats.expanded,
            stats.pushed,
            stats.decreased
        );

        if status != SearchStatus::Found {
            return Ok(PathResult::not_found(status, stats, trace));
        }

        let mut path = Vec::new();
        let mut ci = goal;
        while ci != NO_PARENT {
            path.push(grid.point(ci));
            ci = self.nodes[ci].parent;
        }
        Ok(PathResult::found(path, self.nodes[goal].g, stats, trace))
    }
}
