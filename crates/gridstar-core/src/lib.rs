//! **gridstar-core** — the grid model used by the gridstar search engine.
//!
//! This crate provides the lattice a search runs over: integer geometry
//! ([`Point`], [`Range`]), a fixed-size [`Grid`] of passable/blocked cells
//! with a precomputed 8-neighbor topology, and a small ASCII [`Layout`]
//! format for describing grids in text.

pub mod error;
pub mod geom;
pub mod grid;
pub mod layout;

pub use error::GridError;
pub use geom::{Point, Range};
pub use grid::Grid;
pub use layout::Layout;
