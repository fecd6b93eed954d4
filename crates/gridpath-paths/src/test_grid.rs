//! Small in-memory grid used by the unit tests.

use gridpath_core::{Point, Range};

use crate::traits::TileSource;

/// Rectangular grid parsed from `.` (walkable) and `#` (wall) rows.
pub(crate) struct TestGrid {
    bounds: Range,
    walkable: Vec<bool>,
}

impl TestGrid {
    pub(crate) fn open(width: i32, height: i32) -> Self {
        Self {
            bounds: Range::with_size(width, height),
            walkable: vec![true; (width * height) as usize],
        }
    }

    pub(crate) fn parse(rows: &str) -> Self {
        let lines: Vec<&str> = rows.lines().collect();
        let width = lines.first().map_or(0, |l| l.len()) as i32;
        let height = lines.len() as i32;
        let mut walkable = Vec::with_capacity((width * height) as usize);
        for line in &lines {
            assert_eq!(line.len() as i32, width, "ragged test grid");
            walkable.extend(line.chars().map(|c| c != '#'));
        }
        Self {
            bounds: Range::with_size(width, height),
            walkable,
        }
    }

    pub(crate) fn walkable_at(&self, p: Point) -> bool {
        self.bounds.contains(p) && self.walkable[(p.y * self.bounds.width() + p.x) as usize]
    }
}

impl TileSource for TestGrid {
    fn tile_exists(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    fn is_walkable(&self, p: Point) -> bool {
        self.walkable_at(p)
    }
}
