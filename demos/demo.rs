//! Run one A* search on a random (or loaded) grid and print it.
//!
//! ```text
//! gridstar-demo --width 60 --height 20 --seed 7 --explored
//! gridstar-demo --map maze.txt          # `S` and `T` mark the endpoints
//! RUST_LOG=debug gridstar-demo          # log search statistics
//! ```

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, bail, ensure};
use clap::Parser;
use gridstar_core::{Layout, Point};
use gridstar_demos::{DEFAULT_DENSITY, parse_point, random_grid, random_point, render};
use gridstar_paths::{EndpointPolicy, SearchConfig, SearchStatus, Session};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Run one A* search on a grid and draw the result")]
struct Args {
    /// Grid width in cells.
    #[arg(long, default_value_t = 40)]
    width: i32,

    /// Grid height in cells.
    #[arg(long, default_value_t = 20)]
    height: i32,

    /// Probability of a cell being an obstacle.
    #[arg(long, default_value_t = DEFAULT_DENSITY)]
    density: f64,

    /// Seed for obstacle and endpoint placement.
    #[arg(long)]
    seed: Option<u64>,

    /// Load the grid from a text file instead (`#` obstacle, `.` open,
    /// `S`/`T` endpoints).
    #[arg(long)]
    map: Option<PathBuf>,

    /// Source cell as `x,y`.
    #[arg(long, value_parser = parse_point)]
    source: Option<Point>,

    /// Target cell as `x,y`.
    #[arg(long, value_parser = parse_point)]
    target: Option<Point>,

    /// Give up after this many expansions.
    #[arg(long)]
    max_expansions: Option<usize>,

    /// Give up after this many milliseconds.
    #[arg(long)]
    time_limit_ms: Option<u64>,

    /// Fail instead of clearing obstacles under the endpoints.
    #[arg(long)]
    reject_obstacles: bool,

    /// Also draw the cells the search expanded.
    #[arg(long)]
    explored: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    ensure!(
        (0.0..=1.0).contains(&args.density),
        "density must be within 0..=1, got {}",
        args.density
    );

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);

    let (grid, marked_source, marked_target) = match &args.map {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            let layout = Layout::parse(&text).with_context(|| format!("parsing {}", path.display()))?;
            let (s, t) = (layout.marker('S'), layout.marker('T'));
            (layout.into_grid(), s, t)
        }
        None => {
            ensure!(
                args.width > 0 && args.height > 0,
                "grid must be at least 1x1, got {}x{}",
                args.width,
                args.height
            );
            (random_grid(&mut rng, args.width, args.height, args.density), None, None)
        }
    };
    if grid.is_empty() {
        bail!("grid has no cells");
    }

    let source = args
        .source
        .or(marked_source)
        .unwrap_or_else(|| random_point(&mut rng, &grid));
    let target = args
        .target
        .or(marked_target)
        .unwrap_or_else(|| random_point(&mut rng, &grid));
    log::info!(
        "seed {seed}, {}x{} grid, {} obstacles, {source} -> {target}",
        grid.width(),
        grid.height(),
        grid.obstacle_count()
    );

    let mut config = SearchConfig::default()
        .with_endpoints(if args.reject_obstacles {
            EndpointPolicy::Reject
        } else {
            EndpointPolicy::Clear
        })
        .with_trace(args.explored);
    config.max_expansions = args.max_expansions;
    config.time_limit = args.time_limit_ms.map(Duration::from_millis);

    let mut session = Session::with_config(grid, config);
    let result = session.search(source, target)?;

    println!("{}", render(session.grid(), &result, source, target));
    println!();
    match result.status {
        SearchStatus::Found => println!(
            "path: {} cells, cost {:.3}, expanded {}",
            result.path.len(),
            result.cost.unwrap_or_default(),
            result.stats.expanded
        ),
        SearchStatus::Exhausted => {
            println!("no path (expanded {})", result.stats.expanded)
        }
        SearchStatus::Interrupted => {
            println!("search stopped after {} expansions", result.stats.expanded)
        }
    }
    Ok(())
}
