//! Text maps.
//!
//! One line per row, top row first. `#` is a wall, `_` or `.` is floor.
//! Trailing whitespace at the end of the text is ignored, `\r\n` line endings
//! are accepted, and every row must have the same width.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use gridpath_core::Point;
use log::debug;

use crate::error::{MapError, Result};
use crate::tilemap::{Tile, TileMap};

const WALL: char = '#';
const FLOOR: char = '_';
const FLOOR_ALT: char = '.';

impl Tile {
    /// Parse one map character.
    pub fn from_glyph(ch: char) -> Option<Tile> {
        match ch {
            WALL => Some(Tile::Wall),
            FLOOR | FLOOR_ALT => Some(Tile::Floor),
            _ => None,
        }
    }

    /// The canonical character for this tile.
    pub const fn glyph(self) -> char {
        match self {
            Tile::Floor => FLOOR,
            Tile::Wall => WALL,
        }
    }
}

impl TileMap {
    /// Load a map from a text file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| MapError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let map: TileMap = text.parse()?;
        debug!(
            "loaded {}x{} map from {:?} ({} walkable)",
            map.width(),
            map.height(),
            path,
            map.walkable_count()
        );
        Ok(map)
    }

    /// Render the map with the canonical glyphs, one line per row.
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl FromStr for TileMap {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim_end();
        if s.is_empty() {
            return Err(MapError::Empty);
        }

        let mut width: Option<usize> = None;
        let mut tiles = Vec::with_capacity(s.len());
        let mut height = 0;

        for (y, line) in s.lines().enumerate() {
            let mut row_width = 0;
            for (x, ch) in line.chars().enumerate() {
                let tile = Tile::from_glyph(ch).ok_or(MapError::InvalidTile {
                    ch,
                    pos: Point::new(x as i32, y as i32),
                })?;
                tiles.push(tile);
                row_width += 1;
            }
            match width {
                None => width = Some(row_width),
                Some(expected) if expected != row_width => {
                    return Err(MapError::InconsistentWidth {
                        row: y,
                        expected,
                        found: row_width,
                    });
                }
                Some(_) => {}
            }
            height += 1;
        }

        let width = width.unwrap_or(0);
        if width == 0 {
            return Err(MapError::Empty);
        }
        TileMap::from_tiles(width as i32, height, tiles)
    }
}

impl fmt::Display for TileMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height() {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..self.width() {
                let tile = self.at(Point::new(x, y)).unwrap_or(Tile::Wall);
                write!(f, "{}", tile.glyph())?;
            }
        }
        Ok(())
    }
}
