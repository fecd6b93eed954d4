use gridpath_core::Point;

use crate::traits::TileSource;

/// Cached neighbor computation helper.
///
/// Enumerates the cardinal (4-way) neighbors of a grid point in the fixed
/// order up, right, down, left, keeping only those a [`TileSource`] allows.
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return 4-directional neighbors of `p`, keeping only those for which
    /// `keep` returns `true`.
    pub fn cardinal(&mut self, p: Point, keep: impl Fn(Point) -> bool) -> &[Point] {
        self.buf.clear();
        for n in p.neighbors_4() {
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }

    /// Return the neighbors of `p` that exist and are walkable in `tiles`.
    ///
    /// `is_walkable` is never asked about a point outside the map.
    pub fn passable<T: TileSource + ?Sized>(&mut self, p: Point, tiles: &T) -> &[Point] {
        self.cardinal(p, |n| tiles.is_passable(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::FnTiles;

    #[test]
    fn cardinal_keeps_order() {
        let mut nb = Neighbors::new();
        let all = nb.cardinal(Point::new(1, 1), |_| true).to_vec();
        assert_eq!(
            all,
            vec![
                Point::new(1, 0),
                Point::new(2, 1),
                Point::new(1, 2),
                Point::new(0, 1),
            ]
        );
    }

    #[test]
    fn passable_filters_edges_and_walls() {
        let tiles = FnTiles::new(
            |p: Point| p.x >= 0 && p.y >= 0,
            |p: Point| p != Point::new(1, 0),
        );
        let mut nb = Neighbors::new();
        assert_eq!(nb.passable(Point::new(0, 0), &tiles), &[Point::new(0, 1)]);
    }
}
