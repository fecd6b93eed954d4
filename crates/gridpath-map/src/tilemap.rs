//! A rectangular walkability grid.
//!
//! [`TileMap`] is the concrete map the benchmark harness searches. The
//! engine never looks at its storage: it reads it through the
//! [`TileSource`] implementation below.

use gridpath_core::{Point, Range};
use gridpath_paths::TileSource;

use crate::error::{MapError, Result};

/// A map tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    #[default]
    Floor,
    Wall,
}

impl Tile {
    /// Whether a path may cross this tile.
    pub const fn is_walkable(self) -> bool {
        matches!(self, Tile::Floor)
    }
}

/// A `width × height` grid of tiles anchored at (0, 0).
///
/// `width * height` always fits in an `i32`, so tile indices never overflow.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawTileMap"))]
pub struct TileMap {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
}

/// Number of tiles in a `width × height` map, if that is a valid size.
fn area(width: i32, height: i32) -> Result<usize> {
    match width.checked_mul(height) {
        Some(n) if width >= 0 && height >= 0 => Ok(n as usize),
        _ => Err(MapError::InvalidSize { width, height }),
    }
}

impl TileMap {
    /// Create a new map filled with floor.
    ///
    /// # Panics
    ///
    /// If `width * height` overflows `i32`. See [`TileMap::try_filled`].
    pub fn new(width: i32, height: i32) -> Self {
        Self::filled(width, height, Tile::Floor)
    }

    /// Create a new map filled with `tile`. Negative sizes count as 0.
    ///
    /// # Panics
    ///
    /// If `width * height` overflows `i32`. See [`TileMap::try_filled`].
    pub fn filled(width: i32, height: i32, tile: Tile) -> Self {
        match Self::try_filled(width.max(0), height.max(0), tile) {
            Ok(map) => map,
            Err(e) => panic!("{e}"),
        }
    }

    /// Create a new map filled with `tile`, rejecting negative sizes and
    /// sizes whose area overflows `i32`.
    pub fn try_filled(width: i32, height: i32, tile: Tile) -> Result<Self> {
        let n = area(width, height)?;
        Ok(Self {
            width,
            height,
            tiles: vec![tile; n],
        })
    }

    /// Build a map from row-major tiles, checking that there are exactly
    /// `width * height` of them.
    pub(crate) fn from_tiles(width: i32, height: i32, tiles: Vec<Tile>) -> Result<Self> {
        if area(width, height)? != tiles.len() {
            return Err(MapError::InvalidSize { width, height });
        }
        Ok(Self {
            width,
            height,
            tiles,
        })
    }

    /// Returns the size as a Point (width = x, height = y).
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Returns the bounding range of the map.
    pub fn bounds(&self) -> Range {
        Range::with_size(self.width, self.height)
    }

    /// Whether the map has a tile at `p`.
    #[inline]
    pub fn has_tile(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        self.has_tile(p).then(|| (p.y * self.width + p.x) as usize)
    }

    /// Get the tile at a point, or `None` if out of bounds.
    pub fn at(&self, p: Point) -> Option<Tile> {
        self.index(p).map(|i| self.tiles[i])
    }

    /// Whether `p` exists and is floor. Points off the map are not walkable.
    #[inline]
    pub fn is_walkable(&self, p: Point) -> bool {
        self.at(p).is_some_and(Tile::is_walkable)
    }

    /// Set the tile at a point. Does nothing if out of bounds.
    pub fn set(&mut self, p: Point, tile: Tile) {
        if let Some(i) = self.index(p) {
            self.tiles[i] = tile;
        }
    }

    /// Mark `p` as floor or wall. Does nothing if out of bounds.
    pub fn set_walkable(&mut self, p: Point, walkable: bool) {
        self.set(p, if walkable { Tile::Floor } else { Tile::Wall });
    }

    /// Number of floor tiles.
    pub fn walkable_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_walkable()).count()
    }

    /// Row-major iterator over the floor tiles.
    pub fn walkable_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.bounds().iter().filter(|&p| self.is_walkable(p))
    }

    /// Iterate over `(Point, Tile)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Tile)> + '_ {
        self.bounds().iter().zip(self.tiles.iter().copied())
    }
}

impl TileSource for TileMap {
    #[inline]
    fn tile_exists(&self, p: Point) -> bool {
        self.has_tile(p)
    }

    #[inline]
    fn is_walkable(&self, p: Point) -> bool {
        TileMap::is_walkable(self, p)
    }
}

/// Unchecked serialized form of a [`TileMap`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawTileMap {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawTileMap> for TileMap {
    type Error = MapError;

    fn try_from(raw: RawTileMap) -> Result<Self> {
        Self::from_tiles(raw.width, raw.height, raw.tiles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpath_paths::{heuristic_search, uniform_cost_search};

    #[test]
    fn new_and_size() {
        let m = TileMap::new(10, 5);
        assert_eq!(m.size(), Point::new(10, 5));
        assert_eq!(m.width(), 10);
        assert_eq!(m.height(), 5);
        assert_eq!(m.walkable_count(), 50);
    }

    #[test]
    fn oversized_maps_are_rejected() {
        assert!(matches!(
            TileMap::try_filled(100_000, 100_000, Tile::Floor),
            Err(MapError::InvalidSize {
                width: 100_000,
                height: 100_000
            })
        ));
        assert!(TileMap::try_filled(-1, 3, Tile::Wall).is_err());
        assert!(TileMap::from_tiles(2, 2, vec![Tile::Floor; 3]).is_err());
        assert_eq!(TileMap::try_filled(3, 2, Tile::Wall).unwrap().walkable_count(), 0);
    }

    #[test]
    fn negative_size_is_empty() {
        let m = TileMap::new(-3, 4);
        assert_eq!(m.size(), Point::new(0, 4));
        assert!(!m.has_tile(Point::new(0, 0)));
    }

    #[test]
    fn set_and_at() {
        let mut m = TileMap::new(4, 4);
        let p = Point::new(2, 3);
        m.set(p, Tile::Wall);
        assert_eq!(m.at(p), Some(Tile::Wall));
        assert_eq!(m.at(Point::new(0, 0)), Some(Tile::Floor));
        assert_eq!(m.at(Point::new(10, 10)), None);
        m.set(Point::new(-1, 0), Tile::Wall);
        assert_eq!(m.walkable_count(), 15);
    }

    #[test]
    fn off_map_is_not_walkable() {
        let m = TileMap::new(2, 2);
        assert!(m.is_walkable(Point::new(1, 1)));
        assert!(!m.is_walkable(Point::new(2, 1)));
        assert!(!m.is_walkable(Point::new(0, -1)));
    }

    #[test]
    fn walkable_points_row_major() {
        let mut m = TileMap::new(3, 2);
        m.set_walkable(Point::new(0, 0), false);
        m.set_walkable(Point::new(2, 1), false);
        let pts: Vec<_> = m.walkable_points().collect();
        assert_eq!(
            pts,
            vec![
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(0, 1),
                Point::new(1, 1),
            ]
        );
    }

    #[test]
    fn searches_run_on_a_tile_map() {
        let mut m = TileMap::new(5, 5);
        for y in 0..4 {
            m.set_walkable(Point::new(2, y), false);
        }
        let from = Point::new(0, 0);
        let to = Point::new(4, 0);
        let a = heuristic_search(from, to, &m).unwrap();
        let d = uniform_cost_search(from, to, &m).unwrap();
        assert_eq!(a.len(), 13);
        assert_eq!(a.len(), d.len());
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn tile_map_round_trip() {
        let mut m = TileMap::new(4, 3);
        m.set_walkable(Point::new(1, 1), false);
        let json = serde_json::to_string(&m).unwrap();
        let back: TileMap = serde_json::from_str(&json).unwrap();
        assert_eq!(m, back);
    }

    #[test]
    fn tile_count_must_match_size() {
        let short = r#"{"width":3,"height":3,"tiles":[]}"#;
        assert!(serde_json::from_str::<TileMap>(short).is_err());
        let negative = r#"{"width":-1,"height":0,"tiles":[]}"#;
        assert!(serde_json::from_str::<TileMap>(negative).is_err());
    }
}
