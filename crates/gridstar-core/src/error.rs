use thiserror::Error;

/// Errors raised while building a [`Grid`](crate::Grid) from external data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// A layout row does not have the same width as the first row. `line`
    /// is the zero-based line of the source text, blank lines included.
    #[error("layout line {line} has width {found}, expected {expected}")]
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// The layout contains no cells at all.
    #[error("layout is empty")]
    Empty,
    /// A serialized passability table does not match the grid dimensions.
    #[error("passability table has {found} cells, expected {expected}")]
    SizeMismatch { expected: usize, found: usize },
}
