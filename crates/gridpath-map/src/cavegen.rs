//! Cave generation for benchmark and test maps.
//!
//! [`CaveGen`] initialises each tile as wall with a fixed probability, then
//! smooths the result with cellular automata rules. The same seed always
//! yields the same map.

use gridpath_core::Point;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, RngExt, SeedableRng};

use crate::error::{MapError, Result};
use crate::tilemap::{Tile, TileMap};

/// A rule for one iteration of cellular automata smoothing.
#[derive(Debug, Clone)]
pub struct SmoothingRule {
    /// If a tile has >= this many wall neighbors in the 1-ring (8 neighbors),
    /// it becomes a wall.
    pub w_cutoff1: i32,
    /// If a tile has <= this many wall neighbors in the 2-ring
    /// (24 neighbors), it becomes a wall.
    pub w_cutoff2: i32,
    /// Whether tiles outside the map count as walls.
    pub walls_out_of_range: bool,
    /// How many times to apply this rule.
    pub reps: usize,
}

impl Default for SmoothingRule {
    fn default() -> Self {
        Self {
            w_cutoff1: 5,
            w_cutoff2: 2,
            walls_out_of_range: true,
            reps: 4,
        }
    }
}

/// Seeded cellular-automata cave generator.
#[derive(Debug, Clone)]
pub struct CaveGen {
    /// Probability that a tile starts out as wall.
    pub wall_fraction: f64,
    /// Rules applied in order after the random fill.
    pub rules: Vec<SmoothingRule>,
    pub seed: u64,
}

impl Default for CaveGen {
    fn default() -> Self {
        Self {
            wall_fraction: 0.45,
            rules: vec![SmoothingRule::default()],
            seed: 0,
        }
    }
}

impl CaveGen {
    /// A generator with the default rules and the given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Generate a `width × height` cave.
    pub fn generate(&self, width: i32, height: i32) -> Result<TileMap> {
        if width <= 0 || height <= 0 {
            return Err(MapError::InvalidSize { width, height });
        }
        let mut map = TileMap::try_filled(width, height, Tile::Floor)?;
        let mut rng = StdRng::seed_from_u64(self.seed);

        for p in map.bounds().iter() {
            let wall = rng.random_bool(self.wall_fraction.clamp(0.0, 1.0));
            map.set_walkable(p, !wall);
        }

        for rule in &self.rules {
            for _ in 0..rule.reps {
                map = smooth(&map, rule);
            }
        }

        debug!(
            "generated {width}x{height} cave (seed {}): {} walkable",
            self.seed,
            map.walkable_count()
        );
        Ok(map)
    }
}

/// Apply one step of `rule` to `map`, returning the next generation.
fn smooth(map: &TileMap, rule: &SmoothingRule) -> TileMap {
    let mut next = map.clone();
    for p in map.bounds().iter() {
        let walls1 = count_walls_ring(map, p, 1, rule.walls_out_of_range);
        let walls2 = count_walls_ring(map, p, 2, rule.walls_out_of_range);
        let wall = walls1 >= rule.w_cutoff1 || walls2 <= rule.w_cutoff2;
        next.set(p, if wall { Tile::Wall } else { Tile::Floor });
    }
    next
}

/// Count wall tiles within Chebyshev distance `radius` of `center`.
fn count_walls_ring(map: &TileMap, center: Point, radius: i32, walls_out_of_range: bool) -> i32 {
    let mut count = 0;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx == 0 && dy == 0 {
                continue;
            }
            match map.at(center.shift(dx, dy)) {
                Some(Tile::Wall) => count += 1,
                Some(Tile::Floor) => {}
                None => {
                    if walls_out_of_range {
                        count += 1;
                    }
                }
            }
        }
    }
    count
}

/// Pick a uniformly random walkable tile, or `None` if there is none.
pub fn random_walkable(map: &TileMap, rng: &mut impl Rng) -> Option<Point> {
    let n = map.walkable_count();
    if n == 0 {
        return None;
    }
    map.walkable_points().nth(rng.random_range(0..n))
}
