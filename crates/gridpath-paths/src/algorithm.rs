use std::fmt;

use gridpath_core::Point;

use crate::Path;
use crate::astar::heuristic_search_with_stats;
use crate::dijkstra::uniform_cost_search_with_stats;
use crate::search::SearchOutcome;
use crate::traits::TileSource;

/// The shortest-path searches available, for callers that pick one at
/// runtime (benchmarks, comparisons).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// [`heuristic_search`](crate::heuristic_search).
    AStar,
    /// [`uniform_cost_search`](crate::uniform_cost_search).
    Dijkstra,
}

impl Algorithm {
    /// Every algorithm, in benchmark order.
    pub const ALL: [Algorithm; 2] = [Algorithm::AStar, Algorithm::Dijkstra];

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::AStar => "A*",
            Self::Dijkstra => "Dijkstra",
        }
    }

    /// Run the search from `origin` to `destination`.
    pub fn run<T: TileSource + ?Sized>(
        self,
        origin: Point,
        destination: Point,
        tiles: &T,
    ) -> Option<Path> {
        self.run_with_stats(origin, destination, tiles).path
    }

    /// Run the search and keep its counters.
    pub fn run_with_stats<T: TileSource + ?Sized>(
        self,
        origin: Point,
        destination: Point,
        tiles: &T,
    ) -> SearchOutcome {
        match self {
            Self::AStar => heuristic_search_with_stats(origin, destination, tiles),
            Self::Dijkstra => uniform_cost_search_with_stats(origin, destination, tiles),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
