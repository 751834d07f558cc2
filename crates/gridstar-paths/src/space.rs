use gridstar_core::{Grid, Point, Range};

use crate::heap::IndexedHeap;

pub(crate) const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Per-cell scratch state
// ---------------------------------------------------------------------------

/// Search-scoped state of one cell. Only meaningful while `generation`
/// matches the owning [`SearchSpace`]'s current generation; older nodes are
/// treated as undiscovered.
#[derive(Clone, Debug)]
pub(crate) struct Node {
    /// Best known cost from the source; infinite until discovered.
    pub(crate) g: f64,
    /// Heuristic cost to the target, set on discovery.
    pub(crate) h: f64,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) closed: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: f64::INFINITY,
            h: 0.0,
            parent: NO_PARENT,
            generation: 0,
            closed: false,
        }
    }
}

/// The node at `idx`, reset first if it belongs to an older search.
#[inline]
pub(crate) fn fresh(nodes: &mut [Node], idx: usize, cur_gen: u32) -> &mut Node {
    let n = &mut nodes[idx];
    if n.generation != cur_gen {
        *n = Node {
            generation: cur_gen,
            ..Node::default()
        };
    }
    n
}

// ---------------------------------------------------------------------------
// SearchSpace
// ---------------------------------------------------------------------------

/// Scratch memory for A* searches.
///
/// A `SearchSpace` owns one node per grid cell plus the frontier heap, and
/// reuses them across searches: starting a search only bumps a generation
/// counter, so cells the previous search never touched cost nothing to
/// reset. After a search the final per-cell costs stay readable through
/// [`g_at`](Self::g_at) and [`is_closed`](Self::is_closed) until the next one
/// starts.
///
/// A space may serve grids of different sizes; it grows as needed.
#[derive(Debug, Clone, Default)]
pub struct SearchSpace {
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    pub(crate) open: IndexedHeap,
    /// Bounds of the grid searched last.
    bounds: Range,
}

impl SearchSpace {
    /// Create an empty search space.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a search space pre-sized for `grid`.
    pub fn for_grid(grid: &Grid) -> Self {
        Self {
            nodes: vec![Node::default(); grid.len()],
            generation: 0,
            open: IndexedHeap::with_capacity(grid.len()),
            bounds: grid.bounds(),
        }
    }

    /// Start a new search over `grid` and return its generation.
    pub(crate) fn begin(&mut self, grid: &Grid) -> u32 {
        let len = grid.len();
        if self.nodes.len() < len {
            self.nodes.resize(len, Node::default());
        }
        self.open.reserve_indices(len);
        self.open.clear();
        self.bounds = grid.bounds();

        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Counter wrapped: stamps from 2^32 searches ago would look live.
            log::trace!("search generation wrapped, resetting {} nodes", self.nodes.len());
            self.nodes.fill(Node::default());
            self.generation = 1;
        }
        self.generation
    }

    /// The node of `p` if the last search discovered it.
    fn live(&self, p: Point) -> Option<&Node> {
        if self.generation == 0 || !self.bounds.contains(p) {
            return None;
        }
        let idx = p.y as usize * self.bounds.width() as usize + p.x as usize;
        self.nodes
            .get(idx)
            .filter(|n| n.generation == self.generation && n.g.is_finite())
    }

    /// Best cost from the source to `p` found by the last search, or `None`
    /// if the search never reached `p`.
    pub fn g_at(&self, p: Point) -> Option<f64> {
        self.live(p).map(|n| n.g)
    }

    /// Whether the last search expanded `p`.
    pub fn is_closed(&self, p: Point) -> bool {
        self.live(p).is_some_and(|n| n.closed)
    }

    /// Predecessor of `p` on the best path found by the last search.
    pub fn parent_of(&self, p: Point) -> Option<Point> {
        let parent = self.live(p)?.parent;
        if parent == NO_PARENT {
            return None;
        }
        let w = self.bounds.width() as usize;
        Some(Point::new((parent % w) as i32, (parent / w) as i32))
    }
}
