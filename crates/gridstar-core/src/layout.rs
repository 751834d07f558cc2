//! Grids described as ASCII art.
//!
//! A [`Layout`] is parsed from text where `#` is an obstacle, `.` is a
//! passable cell and any other character is a passable cell carrying a
//! *marker* (typically `S` for the source and `T` for the target):
//!
//! ```text
//! S..#
//! .#.#
//! ...T
//! ```
//!
//! Rows are separated by `'\n'`. Surrounding whitespace on each row is
//! ignored, blank rows are skipped, and every remaining row must have the
//! same width.

use std::str::FromStr;

use crate::error::GridError;
use crate::geom::Point;
use crate::grid::Grid;

/// Character for a blocked cell.
pub const OBSTACLE: char = '#';
/// Character for a plain passable cell.
pub const OPEN: char = '.';

/// A grid parsed from text, plus the positions of any marker characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    grid: Grid,
    markers: Vec<(char, Point)>,
}

impl Layout {
    /// Parse a layout. See the [module documentation](self) for the format.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let rows: Vec<(usize, &str)> = s
            .lines()
            .map(str::trim)
            .enumerate()
            .filter(|(_, l)| !l.is_empty())
            .collect();
        let Some((_, first)) = rows.first() else {
            return Err(GridError::Empty);
        };
        let width = first.chars().count();

        let mut passable = Vec::with_capacity(width * rows.len());
        let mut markers = Vec::new();
        for (y, &(line, row)) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(GridError::InconsistentWidth {
                    line,
                    expected: width,
                    found,
                });
            }
            for (x, ch) in row.chars().enumerate() {
                match ch {
                    OBSTACLE => passable.push(false),
                    OPEN => passable.push(true),
                    other => {
                        markers.push((other, Point::new(x as i32, y as i32)));
                        passable.push(true);
                    }
                }
            }
        }

        let grid = Grid::from_cells(width as i32, rows.len() as i32, passable)?;
        Ok(Self { grid, markers })
    }

    /// The parsed grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Consume the layout, keeping only the grid.
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Position of the first occurrence of marker `ch`.
    pub fn marker(&self, ch: char) -> Option<Point> {
        self.markers.iter().find(|(c, _)| *c == ch).map(|&(_, p)| p)
    }
}

impl FromStr for Layout {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Parses a layout and drops its markers.
impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Layout::parse(s).map(Layout::into_grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM: &str = "
        S..#
        .#.#
        ...T
    ";

    #[test]
    fn parse_size_and_obstacles() {
        let l = Layout::parse(ROOM).unwrap();
        assert_eq!(l.grid().size(), Point::new(4, 3));
        assert_eq!(l.grid().obstacle_count(), 3);
        assert!(!l.grid().is_passable(Point::new(1, 1)));
        assert!(l.grid().is_passable(Point::new(2, 1)));
    }

    #[test]
    fn markers_are_passable_and_located() {
        let l = Layout::parse(ROOM).unwrap();
        assert_eq!(l.marker('S'), Some(Point::new(0, 0)));
        assert_eq!(l.marker('T'), Some(Point::new(3, 2)));
        assert_eq!(l.marker('X'), None);
        assert_eq!(l.markers.len(), 2);
        assert!(l.grid().is_passable(Point::new(3, 2)));
    }

    #[test]
    fn grid_from_str_matches_display() {
        let g: Grid = "#..\n.#.".parse().unwrap();
        assert_eq!(g.to_string(), "#..\n.#.");
    }

    #[test]
    fn inconsistent_width_error() {
        let err = Layout::parse("...\n..").unwrap_err();
        assert_eq!(
            err,
            GridError::InconsistentWidth {
                line: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn inconsistent_width_reports_source_line() {
        let err = Layout::parse("\n...\n\n..").unwrap_err();
        assert_eq!(
            err,
            GridError::InconsistentWidth {
                line: 3,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn empty_layout_error() {
        assert_eq!(Layout::parse("  \n\n").unwrap_err(), GridError::Empty);
    }
}
