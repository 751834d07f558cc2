//! Scene setup and text rendering shared by the gridstar demo binary.
//!
//! This is the presentation side of a search: it decides where obstacles
//! go, picks endpoints and draws the grid with the resulting path.

use gridstar_core::{Grid, Point};
use gridstar_paths::PathResult;
use rand::Rng;

/// Share of cells turned into obstacles by default.
pub const DEFAULT_DENSITY: f64 = 0.25;

pub const CH_OBSTACLE: char = '#';
pub const CH_OPEN: char = '.';
pub const CH_PATH: char = '*';
pub const CH_EXPLORED: char = 'o';
pub const CH_SOURCE: char = 'S';
pub const CH_TARGET: char = 'T';

/// A `width × height` grid where each cell is independently an obstacle
/// with probability `density`.
pub fn random_grid(rng: &mut impl Rng, width: i32, height: i32, density: f64) -> Grid {
    Grid::from_fn(width, height, |_| !rng.random_bool(density))
}

/// A uniformly random cell of `grid`, which must not be empty.
pub fn random_point(rng: &mut impl Rng, grid: &Grid) -> Point {
    Point::new(
        rng.random_range(0..grid.width()),
        rng.random_range(0..grid.height()),
    )
}

/// Parse a point written as `x,y`.
pub fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{s}`"))?;
    let x = x.trim().parse().map_err(|e| format!("bad x in `{s}`: {e}"))?;
    let y = y.trim().parse().map_err(|e| format!("bad y in `{s}`: {e}"))?;
    Ok(Point::new(x, y))
}

/// Draw `grid` with the found path and both endpoints. Cells in the
/// result's expansion trace that the path does not use are marked as
/// explored, so the overlay only shows when the search recorded a trace.
pub fn render(grid: &Grid, result: &PathResult, source: Point, target: Point) -> String {
    let w = grid.width().max(0) as usize;
    let mut rows: Vec<Vec<char>> = grid
        .cells()
        .chunks(w.max(1))
        .map(|row| {
            row.iter()
                .map(|&open| if open { CH_OPEN } else { CH_OBSTACLE })
                .collect()
        })
        .collect();
    let mut put = |p: Point, ch: char| {
        if grid.contains(p) {
            rows[p.y as usize][p.x as usize] = ch;
        }
    };

    for &p in &result.trace {
        put(p, CH_EXPLORED);
    }
    for &p in &result.path {
        put(p, CH_PATH);
    }
    put(source, CH_SOURCE);
    put(target, CH_TARGET);

    rows.into_iter()
        .map(|row| row.into_iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridstar_paths::{SearchConfig, Session};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn parse_point_accepts_pairs() {
        assert_eq!(parse_point("3,4"), Ok(Point::new(3, 4)));
        assert_eq!(parse_point(" 0 , 12 "), Ok(Point::new(0, 12)));
        assert!(parse_point("3").is_err());
        assert!(parse_point("a,1").is_err());
    }

    #[test]
    fn random_grid_respects_extremes() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(random_grid(&mut rng, 6, 4, 0.0).obstacle_count(), 0);
        assert_eq!(random_grid(&mut rng, 6, 4, 1.0).obstacle_count(), 24);
        let g = random_grid(&mut rng, 6, 4, 0.5);
        for _ in 0..50 {
            assert!(g.contains(random_point(&mut rng, &g)));
        }
    }

    #[test]
    fn render_marks_path_and_endpoints() {
        let mut session = Session::new("...\n.#.\n...".parse().unwrap());
        let (s, t) = (Point::new(0, 0), Point::new(2, 2));
        let res = session.search(s, t).unwrap();
        let text = render(session.grid(), &res, s, t);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with('S'));
        assert!(lines[2].ends_with('T'));
        assert_eq!(lines[1].chars().nth(1), Some(CH_OBSTACLE));
        assert_eq!(text.matches(CH_PATH).count(), res.path.len() - 2);
    }

    #[test]
    fn render_shows_explored_cells() {
        let config = SearchConfig::default().with_trace(true);
        let mut session = Session::with_config(Grid::new(8, 3), config);
        let (s, t) = (Point::new(0, 1), Point::new(7, 1));
        let res = session.search(s, t).unwrap();
        let text = render(session.grid(), &res, s, t);
        let explored = text.matches(CH_EXPLORED).count();
        assert_eq!(explored, res.stats.expanded - res.path.len());
    }
}
