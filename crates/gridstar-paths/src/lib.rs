//! A* shortest-path search over [`gridstar_core::Grid`]s.
//!
//! The search runs on an 8-connected grid with Euclidean edge costs and a
//! Euclidean heuristic, so every path it returns is optimal. The pieces:
//!
//! - [`SearchSpace`] owns the per-search scratch state (costs, parents,
//!   closed flags and the frontier) and exposes [`SearchSpace::astar`].
//! - [`IndexedHeap`] is the frontier: a binary min-heap with O(1) membership
//!   and O(log n) decrease-key.
//! - [`Session`] bundles one grid, one search space and a [`SearchConfig`]
//!   into a context object for interactive callers.
//! - [`Interrupt`] lets callers bound the latency of a single search.
//!
//! # Result shape
//!
//! Paths are returned **target first**: `path[0]` is the target and the last
//! element is the source. Use [`PathResult::forward`] for source-to-target
//! order. An unreachable target is not an error: the result has status
//! [`SearchStatus::Exhausted`] and an empty path.

mod astar;
mod config;
mod distance;
mod error;
mod heap;
mod interrupt;
mod result;
mod session;
mod space;
mod traits;

pub use config::{EndpointPolicy, SearchConfig};
pub use distance::{Euclidean, euclidean, path_cost};
pub use error::{Endpoint, SearchError};
pub use heap::IndexedHeap;
pub use interrupt::{Deadline, ExpansionLimit, Interrupt, Limits, Never};
pub use result::{PathResult, SearchStats, SearchStatus};
pub use session::Session;
pub use space::SearchSpace;
pub use traits::CostModel;
