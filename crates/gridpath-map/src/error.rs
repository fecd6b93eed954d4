//! Error types for map loading and generation.

use std::path::PathBuf;

use gridpath_core::Point;
use thiserror::Error;

/// Errors raised while reading, parsing or generating a map.
#[derive(Error, Debug)]
pub enum MapError {
    #[error("cannot read map {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("map has no tiles")]
    Empty,

    #[error("map row {row} is {found} tiles wide, expected {expected}")]
    InconsistentWidth {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid tile {ch:?} at {pos}")]
    InvalidTile { ch: char, pos: Point },

    #[error("invalid map size {width}x{height}")]
    InvalidSize { width: i32, height: i32 },
}

pub type Result<T> = std::result::Result<T, MapError>;
