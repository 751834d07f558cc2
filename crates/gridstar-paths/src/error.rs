use std::fmt;

use gridstar_core::Point;
use thiserror::Error;

/// Which end of a search an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Endpoint {
    Source,
    Target,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source => f.write_str("source"),
            Self::Target => f.write_str("target"),
        }
    }
}

/// Malformed search input. Raised before any scratch state is touched.
///
/// An unreachable target is not an error; see
/// [`SearchStatus::Exhausted`](crate::SearchStatus::Exhausted).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The endpoint lies outside the grid.
    #[error("{endpoint} {point} is outside the {width}x{height} grid")]
    OutOfBounds {
        endpoint: Endpoint,
        point: Point,
        width: i32,
        height: i32,
    },
    /// The endpoint is an obstacle cell.
    #[error("{endpoint} {point} is an obstacle")]
    InvalidEndpoint { endpoint: Endpoint, point: Point },
}
