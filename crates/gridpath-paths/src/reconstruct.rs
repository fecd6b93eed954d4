use std::collections::HashMap;

use gridpath_core::Point;

use crate::Path;

/// Maps each reached point to the point it was best reached from.
///
/// The origin has no entry; every chain therefore ends at the origin.
pub type Predecessors = HashMap<Point, Point>;

/// Walk the predecessor chain back from `destination` and return the path in
/// origin → destination order.
///
/// Returns `None` if the chain never reaches a point without a predecessor,
/// i.e. the map contains a cycle. A search never builds such a map.
pub fn reconstruct(predecessors: &Predecessors, destination: Point) -> Option<Path> {
    let mut path = vec![destination];
    let mut cur = destination;
    while let Some(&prev) = predecessors.get(&cur) {
        // A chain visits each entry at most once, plus the origin.
        if path.len() > predecessors.len() {
            return None;
        }
        path.push(prev);
        cur = prev;
    }
    path.reverse();
    Some(path)
}
