use gridstar_core::{Grid, Point};

use crate::astar::endpoint_index;
use crate::config::{EndpointPolicy, SearchConfig};
use crate::distance::Euclidean;
use crate::error::{Endpoint, SearchError};
use crate::interrupt::Limits;
use crate::result::PathResult;
use crate::space::SearchSpace;
use crate::traits::CostModel;

/// One grid together with everything needed to search it.
///
/// A session is the context object an interactive front end holds on to:
/// it edits obstacles through [`set_passable`](Self::set_passable) or
/// [`grid_mut`](Self::grid_mut) and calls [`search`](Self::search) whenever
/// the endpoints or the grid change. Scratch memory is reused between
/// searches. Independent grids need independent sessions.
#[derive(Debug, Clone)]
pub struct Session<C = Euclidean> {
    grid: Grid,
    space: SearchSpace,
    model: C,
    config: SearchConfig,
}

impl Session {
    /// A session with the default configuration.
    pub fn new(grid: Grid) -> Self {
        Self::with_config(grid, SearchConfig::default())
    }

    pub fn with_config(grid: Grid, config: SearchConfig) -> Self {
        Self::with_cost_model(grid, Euclidean, config)
    }
}

impl<C: CostModel> Session<C> {
    /// A session searching with a custom cost model.
    pub fn with_cost_model(grid: Grid, model: C, config: SearchConfig) -> Self {
        let space = SearchSpace::for_grid(&grid);
        Self {
            grid,
            space,
            model,
            config,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable access to the grid, e.g. to regenerate obstacles.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Mark a cell passable or blocked. No-op outside the grid.
    pub fn set_passable(&mut self, p: Point, value: bool) {
        self.grid.set_passable(p, value);
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    /// Scratch state of the last search, for drawing costs or the explored
    /// area.
    pub fn space(&self) -> &SearchSpace {
        &self.space
    }

    /// Best cost from the last search's source to `p`, if it was reached.
    pub fn g_at(&self, p: Point) -> Option<f64> {
        self.space.g_at(p)
    }

    /// Search from `source` to `target` on the current grid.
    ///
    /// Endpoints outside the grid are always rejected. Endpoints on
    /// obstacles are handled according to [`SearchConfig::endpoints`]: with
    /// [`EndpointPolicy::Clear`] the cells are made passable first, and stay
    /// passable afterwards.
    pub fn search(&mut self, source: Point, target: Point) -> Result<PathResult, SearchError> {
        endpoint_index(&self.grid, Endpoint::Source, source)?;
        endpoint_index(&self.grid, Endpoint::Target, target)?;

        if self.config.endpoints == EndpointPolicy::Clear {
            for (endpoint, p) in [(Endpoint::Source, source), (Endpoint::Target, target)] {
                if !self.grid.is_passable(p) {
                    log::debug!("clearing obstacle under {endpoint} {p}");
                    self.grid.set_passable(p, true);
                }
            }
        }

        let mut limits = Limits::from_config(&self.config);
        self.space.astar_with(
            &self.grid,
            source,
            target,
            &self.model,
            &mut limits,
            self.config.record_trace,
        )
    }

    /// Consume the session, returning its grid.
    pub fn into_grid(self) -> Grid {
        self.grid
    }
}
