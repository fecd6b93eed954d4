use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use gridpath_core::Point;
use log::trace;

use crate::Path;
use crate::frontier::Frontier;
use crate::reconstruct::{Predecessors, reconstruct};
use crate::traits::TileSource;

/// Counters collected during one search call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Points popped and settled.
    pub expanded: usize,
    /// Entries pushed onto the frontier, the origin included.
    pub pushed: usize,
    /// Popped entries discarded because a cheaper route had superseded them.
    pub stale: usize,
}

/// Result of a search together with its counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub path: Option<Path>,
    pub stats: SearchStats,
}

/// Whether a search between `origin` and `destination` can start at all.
///
/// Equal endpoints, or an endpoint that is missing or blocked, give no path.
pub(crate) fn endpoints_usable<T: TileSource + ?Sized>(
    origin: Point,
    destination: Point,
    tiles: &T,
) -> bool {
    origin != destination && tiles.is_passable(origin) && tiles.is_passable(destination)
}

/// Scratch state of one best-first search: frontier, best-known costs,
/// settled set and predecessor map. Dropped when the call returns.
pub(crate) struct SearchState {
    frontier: Frontier,
    best: HashMap<Point, u32>,
    settled: HashSet<Point>,
    predecessors: Predecessors,
    stats: SearchStats,
}

impl SearchState {
    /// Seed the search with `origin` at cost 0.
    pub(crate) fn new(origin: Point, priority: u32) -> Self {
        let mut state = Self {
            frontier: Frontier::new(),
            best: HashMap::new(),
            settled: HashSet::new(),
            predecessors: Predecessors::new(),
            stats: SearchStats::default(),
        };
        state.best.insert(origin, 0);
        state.frontier.push(origin, 0, priority);
        state.stats.pushed += 1;
        state
    }

    /// Pop the next live entry and mark its point settled.
    ///
    /// Entries whose cost is above the best known for their point, or whose
    /// point is already settled, are discarded.
    pub(crate) fn pop(&mut self) -> Option<(Point, u32)> {
        while let Some(entry) = self.frontier.pop() {
            let best = self.best.get(&entry.pos).copied().unwrap_or(u32::MAX);
            if entry.cost > best || !self.settled.insert(entry.pos) {
                trace!("discarding stale entry {} at cost {}", entry.pos, entry.cost);
                self.stats.stale += 1;
                continue;
            }
            self.stats.expanded += 1;
            return Some((entry.pos, entry.cost));
        }
        None
    }

    /// Offer `to`, reached from `from` with `cost`. Recorded and queued with
    /// `priority` only if strictly cheaper than any route known so far.
    pub(crate) fn relax(&mut self, from: Point, to: Point, cost: u32, priority: u32) {
        match self.best.entry(to) {
            Entry::Occupied(e) if *e.get() <= cost => return,
            Entry::Occupied(mut e) => {
                e.insert(cost);
            }
            Entry::Vacant(e) => {
                e.insert(cost);
            }
        }
        self.predecessors.insert(to, from);
        self.frontier.push(to, cost, priority);
        self.stats.pushed += 1;
    }

    /// Finish after `destination` has been settled.
    pub(crate) fn into_outcome(self, destination: Point) -> SearchOutcome {
        let path = reconstruct(&self.predecessors, destination);
        debug_assert!(path.is_some(), "predecessor chain from {destination} is cyclic");
        SearchOutcome {
            path,
            stats: self.stats,
        }
    }

    /// Finish with the frontier exhausted.
    pub(crate) fn into_unreachable(self) -> SearchOutcome {
        SearchOutcome {
            path: None,
            stats: self.stats,
        }
    }
}
