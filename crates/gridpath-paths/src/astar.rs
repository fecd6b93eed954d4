use gridpath_core::Point;
use log::debug;

use crate::Path;
use crate::distance::manhattan;
use crate::neighbors::Neighbors;
use crate::search::{SearchOutcome, SearchState, endpoints_usable};
use crate::traits::TileSource;

/// Compute a shortest path from `origin` to `destination` using A*.
///
/// Frontier entries are ordered by `g + h`, where `g` is the number of steps
/// from `origin` and `h` the Manhattan distance to `destination`. Since `h`
/// never overestimates on a 4-connected unit-cost grid, the path returned has
/// the minimum number of steps.
///
/// Returns the full path (including both endpoints) or `None` if no path
/// exists. `None` is also returned when the endpoints are equal or not both
/// passable.
pub fn heuristic_search<T: TileSource + ?Sized>(
    origin: Point,
    destination: Point,
    tiles: &T,
) -> Option<Path> {
    heuristic_search_with_stats(origin, destination, tiles).path
}

/// [`heuristic_search`], also reporting how much work the search did.
pub fn heuristic_search_with_stats<T: TileSource + ?Sized>(
    origin: Point,
    destination: Point,
    tiles: &T,
) -> SearchOutcome {
    if !endpoints_usable(origin, destination, tiles) {
        return SearchOutcome {
            path: None,
            stats: Default::default(),
        };
    }

    let mut state = SearchState::new(origin, manhattan(origin, destination));
    let mut nbuf = Neighbors::new();

    while let Some((current, g)) = state.pop() {
        if current == destination {
            let outcome = state.into_outcome(destination);
            debug!(
                "A* {origin} -> {destination}: {} steps, {} expanded",
                outcome.path.as_ref().map_or(0, |p| p.len() - 1),
                outcome.stats.expanded,
            );
            return outcome;
        }

        let tentative_g = g.saturating_add(1);
        for &np in nbuf.passable(current, tiles) {
            let f = tentative_g.saturating_add(manhattan(np, destination));
            state.relax(current, np, tentative_g, f);
        }
    }

    let outcome = state.into_unreachable();
    debug!(
        "A* {origin} -> {destination}: unreachable, {} expanded",
        outcome.stats.expanded
    );
    outcome
}
