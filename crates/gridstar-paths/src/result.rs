use gridstar_core::Point;

/// How a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchStatus {
    /// The target was reached.
    Found,
    /// The frontier ran dry: no path exists.
    Exhausted,
    /// The caller's [`Interrupt`](crate::Interrupt) stopped the search.
    Interrupted,
}

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Cells popped from the frontier and closed.
    pub expanded: usize,
    /// Cells inserted into the frontier.
    pub pushed: usize,
    /// Frontier entries whose cost improved in place.
    pub decreased: usize,
}

/// Outcome of one search.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathResult {
    pub status: SearchStatus,
    /// Path from target back to source, both included. Empty unless
    /// `status` is [`SearchStatus::Found`].
    pub path: Vec<Point>,
    /// Total Euclidean length of `path`, if one was found.
    pub cost: Option<f64>,
    pub stats: SearchStats,
    /// Cells in the order they were expanded. Only filled when tracing was
    /// requested.
    pub trace: Vec<Point>,
}

impl PathResult {
    pub(crate) fn found(path: Vec<Point>, cost: f64, stats: SearchStats, trace: Vec<Point>) -> Self {
        Self {
            status: SearchStatus::Found,
            path,
            cost: Some(cost),
            stats,
            trace,
        }
    }

    pub(crate) fn not_found(status: SearchStatus, stats: SearchStats, trace: Vec<Point>) -> Self {
        Self {
            status,
            path: Vec::new(),
            cost: None,
            stats,
            trace,
        }
    }

    #[inline]
    pub fn is_found(&self) -> bool {
        self.status == SearchStatus::Found
    }

    /// The path in source-to-target order.
    pub fn forward(&self) -> Vec<Point> {
        self.path.iter().rev().copied().collect()
    }
}
