//! Walkability maps for gridpath.
//!
//! - [`TileMap`]: a rectangular grid of floor and wall tiles that serves as
//!   the [`TileSource`](gridpath_paths::TileSource) for the searches.
//! - Text maps: one row per line, `#` for walls, `_` or `.` for floor
//!   ([`TileMap::from_file`], [`TileMap::to_text`]).
//! - [`CaveGen`]: seeded cellular-automata caves for benchmarks and tests.

pub mod cavegen;
pub mod error;
pub mod text;
pub mod tilemap;

pub use cavegen::{CaveGen, SmoothingRule, random_walkable};
pub use error::{MapError, Result};
pub use tilemap::{Tile, TileMap};
