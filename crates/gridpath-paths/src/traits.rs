use gridpath_core::Point;

/// The two boundary predicates a search reads the map through.
///
/// Implementations must be pure for the duration of a search call, and a
/// point that passes [`is_walkable`](Self::is_walkable) must also pass
/// [`tile_exists`](Self::tile_exists).
pub trait TileSource {
    /// Whether `p` lies within the mapped area.
    fn tile_exists(&self, p: Point) -> bool;

    /// Whether a path may pass through `p`. Only called by the engine on
    /// points for which `tile_exists` already returned `true`.
    fn is_walkable(&self, p: Point) -> bool;

    /// `tile_exists(p) && is_walkable(p)`, short-circuiting on the first.
    #[inline]
    fn is_passable(&self, p: Point) -> bool {
        self.tile_exists(p) && self.is_walkable(p)
    }
}

impl<T: TileSource + ?Sized> TileSource for &T {
    #[inline]
    fn tile_exists(&self, p: Point) -> bool {
        (**self).tile_exists(p)
    }

    #[inline]
    fn is_walkable(&self, p: Point) -> bool {
        (**self).is_walkable(p)
    }
}

/// A [`TileSource`] built from a pair of closures.
///
/// Handy for synthetic maps, e.g. an unbounded plane with a barrier:
///
/// ```
/// use gridpath_core::Point;
/// use gridpath_paths::{FnTiles, TileSource};
///
/// let wall = FnTiles::new(|_| true, |p: Point| p.x != 3);
/// assert!(!wall.is_passable(Point::new(3, 10)));
/// ```
#[derive(Clone, Copy)]
pub struct FnTiles<E, W> {
    tile_exists: E,
    is_walkable: W,
}

impl<E, W> FnTiles<E, W>
where
    E: Fn(Point) -> bool,
    W: Fn(Point) -> bool,
{
    /// Wrap `tile_exists` and `is_walkable`.
    pub fn new(tile_exists: E, is_walkable: W) -> Self {
        Self {
            tile_exists,
            is_walkable,
        }
    }
}

impl<E, W> TileSource for FnTiles<E, W>
where
    E: Fn(Point) -> bool,
    W: Fn(Point) -> bool,
{
    #[inline]
    fn tile_exists(&self, p: Point) -> bool {
        (self.tile_exists)(p)
    }

    #[inline]
    fn is_walkable(&self, p: Point) -> bool {
        (self.is_walkable)(p)
    }
}
