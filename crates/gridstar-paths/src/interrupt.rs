//! Cooperative cancellation for long searches.
//!
//! The engine calls [`Interrupt::should_stop`] once before every expansion,
//! after checking that the frontier still holds a cell. Returning `true` ends the search with
//! [`SearchStatus::Interrupted`](crate::SearchStatus::Interrupted).

use std::time::{Duration, Instant};

use crate::config::SearchConfig;

/// Decides whether a running search should stop.
pub trait Interrupt {
    /// `expanded` is the number of cells expanded so far.
    fn should_stop(&mut self, expanded: usize) -> bool;
}

/// Never stops: the search runs to completion.
#[derive(Debug, Clone, Copy, Default)]
pub struct Never;

impl Interrupt for Never {
    #[inline]
    fn should_stop(&mut self, _expanded: usize) -> bool {
        false
    }
}

/// Stops once the given number of cells has been expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpansionLimit(pub usize);

impl Interrupt for ExpansionLimit {
    #[inline]
    fn should_stop(&mut self, expanded: usize) -> bool {
        expanded >= self.0
    }
}

/// Stops once a wall-clock instant has passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline(pub Instant);

impl Deadline {
    /// A deadline `timeout` from now.
    pub fn after(timeout: Duration) -> Self {
        Self(Instant::now() + timeout)
    }
}

impl Interrupt for Deadline {
    #[inline]
    fn should_stop(&mut self, _expanded: usize) -> bool {
        Instant::now() >= self.0
    }
}

/// Optional expansion and time budgets, as configured in a
/// [`SearchConfig`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Limits {
    pub expansions: Option<ExpansionLimit>,
    pub deadline: Option<Deadline>,
}

impl Limits {
    /// Budgets from `config`. The time limit starts counting now.
    pub fn from_config(config: &SearchConfig) -> Self {
        Self {
            expansions: config.max_expansions.map(ExpansionLimit),
            deadline: config.time_limit.map(Deadline::after),
        }
    }
}

impl Interrupt for Limits {
    fn should_stop(&mut self, expanded: usize) -> bool {
        self.expansions.as_mut().is_some_and(|l| l.should_stop(expanded))
            || self.deadline.as_mut().is_some_and(|d| d.should_stop(expanded))
    }
}

impl<F: FnMut(usize) -> bool> Interrupt for F {
    #[inline]
    fn should_stop(&mut self, expanded: usize) -> bool {
        self(expanded)
    }
}
