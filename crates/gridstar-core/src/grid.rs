//! The [`Grid`] type — a fixed-size lattice of passable or blocked cells.
//!
//! Cells are stored in row-major order and addressed either by [`Point`]
//! or by their flat arena index (`row * width + col`). The 8-connected
//! neighborhood of every cell is computed once at construction: the shape of
//! a grid never changes, only passability does.

use std::fmt;

use crate::error::GridError;
use crate::geom::{Point, Range};

// ---------------------------------------------------------------------------
// Topology
// ---------------------------------------------------------------------------

/// Neighbor lists of every cell, packed into a single buffer.
///
/// The neighbors of cell `i` are `links[starts[i]..starts[i + 1]]`.
#[derive(Debug, Clone, Default)]
struct Topology {
    starts: Vec<usize>,
    links: Vec<usize>,
}

impl Topology {
    fn build(bounds: Range) -> Self {
        let w = bounds.width().max(0) as usize;
        let mut starts = Vec::with_capacity(bounds.len() + 1);
        let mut links = Vec::with_capacity(bounds.len() * 8);
        starts.push(0);
        for p in bounds.iter() {
            for n in p.neighbors_8() {
                if bounds.contains(n) {
                    links.push(n.y as usize * w + n.x as usize);
                }
            }
            starts.push(links.len());
        }
        Self { starts, links }
    }

    #[inline]
    fn get(&self, idx: usize) -> &[usize] {
        &self.links[self.starts[idx]..self.starts[idx + 1]]
    }
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A rectangular grid of cells, each either passable or an obstacle.
///
/// The grid owns its cells exclusively. Searches only read passability and
/// keep their scratch state elsewhere, so toggling obstacles between searches
/// is always safe.
#[derive(Debug, Clone)]
pub struct Grid {
    bounds: Range,
    passable: Vec<bool>,
    topology: Topology,
}

impl Grid {
    /// Create a `width × height` grid with every cell passable.
    ///
    /// Negative dimensions are clamped to 0.
    pub fn new(width: i32, height: i32) -> Self {
        Self::from_fn(width, height, |_| true)
    }

    /// Create a grid whose passability is decided per cell by `f`.
    pub fn from_fn(width: i32, height: i32, mut f: impl FnMut(Point) -> bool) -> Self {
        let bounds = Range::with_size(width, height);
        let passable = bounds.iter().map(&mut f).collect();
        Self {
            bounds,
            passable,
            topology: Topology::build(bounds),
        }
    }

    /// Build a grid from a row-major passability table.
    pub fn from_cells(width: i32, height: i32, passable: Vec<bool>) -> Result<Self, GridError> {
        let bounds = Range::with_size(width, height);
        if passable.len() != bounds.len() {
            return Err(GridError::SizeMismatch {
                expected: bounds.len(),
                found: passable.len(),
            });
        }
        Ok(Self {
            bounds,
            passable,
            topology: Topology::build(bounds),
        })
    }

    /// The bounding range `[0, width) × [0, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Size of the grid as a `Point`.
    #[inline]
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.passable.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.passable.is_empty()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Flat index of `p`, or `None` if `p` is outside the grid.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some(p.y as usize * self.bounds.width() as usize + p.x as usize)
    }

    /// Point at flat index `idx`. `idx` must be below [`len`](Self::len).
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        let w = self.bounds.width() as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }

    /// Whether the cell at `p` can be walked through. Cells outside the grid
    /// are never passable.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        self.index(p).is_some_and(|i| self.passable[i])
    }

    /// Passability by flat index.
    #[inline]
    pub fn is_passable_index(&self, idx: usize) -> bool {
        self.passable[idx]
    }

    /// Mark the cell at `p` passable or blocked. No-op if `p` is outside the
    /// grid.
    pub fn set_passable(&mut self, p: Point, value: bool) {
        if let Some(i) = self.index(p) {
            self.passable[i] = value;
        }
    }

    /// Set every cell to `value`.
    pub fn fill(&mut self, value: bool) {
        self.passable.fill(value);
    }

    /// Number of blocked cells.
    pub fn obstacle_count(&self) -> usize {
        self.passable.iter().filter(|&&v| !v).count()
    }

    /// The in-bounds neighbors of `p` in clockwise order starting north.
    /// Empty if `p` is outside the grid.
    pub fn neighbors(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        let links: &[usize] = match self.index(p) {
            Some(i) => self.topology.get(i),
            None => &[],
        };
        links.iter().map(|&i| self.point(i))
    }

    /// Flat indices of the in-bounds neighbors of cell `idx`.
    #[inline]
    pub fn neighbor_indices(&self, idx: usize) -> &[usize] {
        self.topology.get(idx)
    }

    /// Row-major iterator over `(Point, passable)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, bool)> + '_ {
        self.bounds.iter().zip(self.passable.iter().copied())
    }

    /// Row-major passability table.
    #[inline]
    pub fn cells(&self) -> &[bool] {
        &self.passable
    }
}

impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.bounds == other.bounds && self.passable == other.passable
    }
}

impl Eq for Grid {}

/// Renders `#` for obstacles and `.` for passable cells, one line per row.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = self.bounds.width().max(0) as usize;
        if w == 0 {
            return Ok(());
        }
        for (y, row) in self.passable.chunks(w).enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for &open in row {
                f.write_str(if open { "." } else { "#" })?;
            }
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct GridRepr {
    width: i32,
    height: i32,
    passable: Vec<bool>,
}

#[cfg(feature = "serde")]
impl serde::Serialize for Grid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        GridRepr {
            width: self.width(),
            height: self.height(),
            passable: self.passable.clone(),
        }
        .serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Grid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = GridRepr::deserialize(deserializer)?;
        Grid::from_cells(repr.width, repr.height, repr.passable).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_all_passable() {
        let g = Grid::new(4, 3);
        assert_eq!(g.size(), Point::new(4, 3));
        assert_eq!(g.len(), 12);
        assert_eq!(g.obstacle_count(), 0);
        assert!(g.iter().all(|(_, open)| open));
    }

    #[test]
    fn negative_dimensions_give_empty_grid() {
        let g = Grid::new(-2, 5);
        assert!(g.is_empty());
        assert_eq!(g.neighbors(Point::ZERO).count(), 0);
        assert_eq!(g.to_string(), "");
    }

    #[test]
    fn index_and_point_round_trip() {
        let g = Grid::new(5, 4);
        for p in g.bounds() {
            let i = g.index(p).unwrap();
            assert_eq!(g.point(i), p);
        }
        assert_eq!(g.index(Point::new(5, 0)), None);
        assert_eq!(g.index(Point::new(0, -1)), None);
    }

    #[test]
    fn set_passable_in_and_out_of_bounds() {
        let mut g = Grid::new(3, 3);
        g.set_passable(Point::new(1, 1), false);
        assert!(!g.is_passable(Point::new(1, 1)));
        assert_eq!(g.obstacle_count(), 1);
        // Out of bounds is ignored and never passable.
        g.set_passable(Point::new(9, 9), false);
        assert!(!g.is_passable(Point::new(9, 9)));
        assert_eq!(g.obstacle_count(), 1);
        g.set_passable(Point::new(1, 1), true);
        assert_eq!(g.obstacle_count(), 0);
    }

    #[test]
    fn neighbors_are_clipped_to_bounds() {
        let g = Grid::new(3, 3);
        assert_eq!(g.neighbors(Point::new(1, 1)).count(), 8);
        let corner: Vec<Point> = g.neighbors(Point::new(0, 0)).collect();
        assert_eq!(
            corner,
            vec![Point::new(1, 0), Point::new(1, 1), Point::new(0, 1)]
        );
        assert_eq!(g.neighbors(Point::new(1, 0)).count(), 5);
        assert_eq!(g.neighbors(Point::new(7, 7)).count(), 0);
    }

    #[test]
    fn neighbors_ignore_passability() {
        let mut g = Grid::new(3, 3);
        g.fill(false);
        assert_eq!(g.neighbors(Point::new(1, 1)).count(), 8);
    }

    #[test]
    fn neighbor_indices_match_points() {
        let g = Grid::new(4, 4);
        let p = Point::new(2, 1);
        let i = g.index(p).unwrap();
        let by_index: Vec<Point> = g.neighbor_indices(i).iter().map(|&n| g.point(n)).collect();
        let by_point: Vec<Point> = g.neighbors(p).collect();
        assert_eq!(by_index, by_point);
    }

    #[test]
    fn from_fn_assigns_each_cell() {
        let g = Grid::from_fn(4, 2, |p| p.x != 2);
        assert_eq!(g.obstacle_count(), 2);
        assert!(!g.is_passable(Point::new(2, 0)));
        assert!(!g.is_passable(Point::new(2, 1)));
    }

    #[test]
    fn from_cells_rejects_wrong_length() {
        let err = Grid::from_cells(2, 2, vec![true; 3]).unwrap_err();
        assert_eq!(err, GridError::SizeMismatch { expected: 4, found: 3 });
    }

    #[test]
    fn display_draws_obstacles() {
        let mut g = Grid::new(3, 2);
        g.set_passable(Point::new(1, 0), false);
        assert_eq!(g.to_string(), ".#.\n...");
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip_rebuilds_topology() {
        let mut g = Grid::new(3, 2);
        g.set_passable(Point::new(2, 1), false);
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
        assert_eq!(back.neighbors(Point::new(0, 0)).count(), 3);
    }

    #[test]
    fn grid_rejects_mismatched_table() {
        let json = r#"{"width":2,"height":2,"passable":[true]}"#;
        assert!(serde_json::from_str::<Grid>(json).is_err());
    }

    #[test]
    fn point_round_trip() {
        let p = Point::new(3, 7);
        let json = serde_json::to_string(&p).unwrap();
        let back: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
