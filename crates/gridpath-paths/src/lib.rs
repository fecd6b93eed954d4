//! Shortest paths on implicit 4-connected grids.
//!
//! The grid is never handed to the engine directly. A map is described by two
//! predicates, gathered behind the [`TileSource`] trait:
//!
//! - `tile_exists(p)`: is `p` inside the mapped area;
//! - `is_walkable(p)`: may a path pass through `p`.
//!
//! Two searches are provided, both returning a minimum-step [`Path`]:
//!
//! - **A\*** guided by the Manhattan distance ([`heuristic_search`])
//! - **Dijkstra** uniform-cost search ([`uniform_cost_search`])
//!
//! [`is_path_valid`] re-checks a returned path without sharing any code with
//! the searches, and [`Algorithm`] names both searches for benchmarking.
//!
//! Each call owns its frontier and predecessor map, so calls are independent
//! and never mutate the caller's map.
//!
//! ```
//! use gridpath_core::Point;
//! use gridpath_paths::{FnTiles, TileSource, heuristic_search, is_path_valid};
//!
//! let tiles = FnTiles::new(
//!     |p: Point| (0..3).contains(&p.x) && (0..3).contains(&p.y),
//!     |_| true,
//! );
//! let path = heuristic_search(Point::new(0, 0), Point::new(2, 2), &tiles).unwrap();
//! assert_eq!(path.len(), 5);
//! assert!(is_path_valid(&path, |p| tiles.is_walkable(p)));
//! ```

mod algorithm;
mod astar;
mod dijkstra;
mod distance;
mod frontier;
mod neighbors;
mod reconstruct;
mod search;
mod traits;
mod validate;

#[cfg(test)]
mod test_grid;

use gridpath_core::Point;

pub use algorithm::Algorithm;
pub use astar::{heuristic_search, heuristic_search_with_stats};
pub use dijkstra::{uniform_cost_search, uniform_cost_search_with_stats};
pub use distance::manhattan;
pub use frontier::{Frontier, FrontierEntry};
pub use neighbors::Neighbors;
pub use reconstruct::{Predecessors, reconstruct};
pub use search::{SearchOutcome, SearchStats};
pub use traits::{FnTiles, TileSource};
pub use validate::is_path_valid;

/// A forward-ordered sequence of coordinates from origin to destination.
pub type Path = Vec<Point>;
