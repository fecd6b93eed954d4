use gridpath_core::Point;
use log::debug;

use crate::Path;
use crate::neighbors::Neighbors;
use crate::search::{SearchOutcome, SearchState, endpoints_usable};
use crate::traits::TileSource;

/// Compute a shortest path from `origin` to `destination` using Dijkstra's
/// uniform-cost search.
///
/// Points are settled in strictly non-decreasing order of steps from
/// `origin`; the search stops as soon as `destination` is settled.
///
/// Returns the full path (including both endpoints) or `None` if no path
/// exists. `None` is also returned when the endpoints are equal or not both
/// passable.
pub fn uniform_cost_search<T: TileSource + ?Sized>(
    origin: Point,
    destination: Point,
    tiles: &T,
) -> Option<Path> {
    uniform_cost_search_with_stats(origin, destination, tiles).path
}

/// [`uniform_cost_search`], also reporting how much work the search did.
pub fn uniform_cost_search_with_stats<T: TileSource + ?Sized>(
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

    let mut state = SearchState::new(origin, 0);
    let mut nbuf = Neighbors::new();

    while let Some((current, g)) = state.pop() {
        if current == destination {
            let outcome = state.into_outcome(destination);
            debug!(
                "Dijkstra {origin} -> {destination}: {} steps, {} expanded",
                outcome.path.as_ref().map_or(0, |p| p.len() - 1),
                outcome.stats.expanded,
            );
            return outcome;
        }

        let tentative = g.saturating_add(1);
        for &np in nbuf.passable(current, tiles) {
            state.relax(current, np, tentative, tentative);
        }
    }

    let outcome = state.into_unreachable();
    debug!(
        "Dijkstra {origin} -> {destination}: unreachable, {} expanded",
        outcome.stats.expanded
    );
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_grid::TestGrid;
    use crate::traits::FnTiles;
    use crate::validate::is_path_valid;

    #[test]
    fn open_3x3_corner_to_corner() {
        let g = TestGrid::open(3, 3);
        let path = uniform_cost_search(Point::new(0, 0), Point::new(2, 2), &g).unwrap();
        assert_eq!(path.len(), 5);
        assert!(is_path_valid(&path, |p| g.walkable_at(p)));
    }

    #[test]
    fn adjacent_endpoints() {
        let g = TestGrid::open(2, 1);
        let path = uniform_cost_search(Point::new(1, 0), Point::new(0, 0), &g);
        assert_eq!(path, Some(vec![Point::new(1, 0), Point::new(0, 0)]));
    }

    #[test]
    fn finds_the_only_gap() {
        let g = TestGrid::parse(
            "\
..#..
..#..
.....
..#..",
        );
        let path = uniform_cost_search(Point::new(0, 0), Point::new(4, 0), &g).unwrap();
        assert!(path.contains(&Point::new(2, 2)));
        assert_eq!(path.len(), 9);
    }

    #[test]
    fn barrier_on_unbounded_plane() {
        // A closed ring of walls around the destination: the search settles
        // everything outside the ring and then gives up.
        let ring = |p: Point| p.x.abs().max(p.y.abs()) == 2;
        let tiles = FnTiles::new(
            |p: Point| p.x.abs() <= 6 && p.y.abs() <= 6,
            move |p: Point| !ring(p),
        );
        let out = uniform_cost_search_with_stats(Point::new(5, 5), Point::new(0, 0), &tiles);
        assert_eq!(out.path, None);
        // Everything outside the ring inside the 13x13 box: 169 - 25.
        assert_eq!(out.stats.expanded, 144);
    }

    #[test]
    fn unit_steps_never_leave_stale_entries() {
        // The first route found to any point is already the cheapest.
        let g = TestGrid::open(6, 6);
        let out = uniform_cost_search_with_stats(Point::new(0, 0), Point::new(5, 5), &g);
        assert_eq!(out.stats.stale, 0);
        assert!(out.stats.expanded <= 36);
    }

    #[test]
    fn search_at_the_edge_of_the_plane() {
        let strip = FnTiles::new(
            |p: Point| p.y == 0 && p.x >= i32::MAX - 5,
            |_| true,
        );
        let from = Point::new(i32::MAX, 0);
        let to = Point::new(i32::MAX - 2, 0);
        let path = uniform_cost_search(from, to, &strip).unwrap();
        assert_eq!(path, vec![from, Point::new(i32::MAX - 1, 0), to]);
        assert_eq!(uniform_cost_search(to, from, &strip).map(|p| p.len()), Some(3));
    }

    #[test]
    fn rerun_is_identical() {
        let g = TestGrid::parse(
            "\
......
.##.#.
......
.#.##.
......",
        );
        let from = Point::new(0, 0);
        let to = Point::new(5, 4);
        let first = uniform_cost_search(from, to, &g);
        assert!(first.is_some());
        for _ in 0..5 {
            assert_eq!(uniform_cost_search(from, to, &g), first);
        }
    }
}
