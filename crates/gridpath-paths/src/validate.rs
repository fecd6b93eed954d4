use std::collections::HashSet;

use gridpath_core::Point;

/// Check that `path` is a legal traversal.
///
/// A valid path is non-empty, every consecutive pair differs by exactly one
/// unit on exactly one axis, every point satisfies `is_walkable`, and no
/// point appears twice.
///
/// Adjacency is computed here on its own, independently of the neighbor
/// helpers the searches expand with.
pub fn is_path_valid(path: &[Point], is_walkable: impl Fn(Point) -> bool) -> bool {
    if path.is_empty() {
        return false;
    }

    let mut seen = HashSet::with_capacity(path.len());
    for (i, &p) in path.iter().enumerate() {
        if !is_walkable(p) || !seen.insert(p) {
            return false;
        }
        if i > 0 {
            let prev = path[i - 1];
            let dx = (p.x as i64 - prev.x as i64).abs();
            let dy = (p.y as i64 - prev.y as i64).abs();
            if dx + dy != 1 {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(v: &[(i32, i32)]) -> Vec<Point> {
        v.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn accepts_a_monotone_route() {
        let path = pts(&[(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)]);
        assert!(is_path_valid(&path, |_| true));
    }

    #[test]
    fn single_point_is_valid() {
        assert!(is_path_valid(&pts(&[(4, 4)]), |_| true));
    }

    #[test]
    fn rejects_empty() {
        assert!(!is_path_valid(&[], |_| true));
    }

    #[test]
    fn rejects_diagonal_and_jump() {
        assert!(!is_path_valid(&pts(&[(0, 0), (1, 1)]), |_| true));
        assert!(!is_path_valid(&pts(&[(0, 0), (2, 0)]), |_| true));
        assert!(!is_path_valid(&pts(&[(0, 0), (0, 0)]), |_| true));
    }

    #[test]
    fn rejects_unwalkable_point() {
        let path = pts(&[(0, 0), (1, 0), (2, 0)]);
        assert!(!is_path_valid(&path, |p| p != Point::new(1, 0)));
    }

    #[test]
    fn rejects_revisit() {
        let path = pts(&[(0, 0), (1, 0), (1, 1), (0, 1), (0, 0), (0, -1)]);
        assert!(!is_path_valid(&path, |_| true));
    }

    #[test]
    fn extreme_coordinates_do_not_overflow() {
        let path = pts(&[(i32::MIN, 0), (i32::MAX, 0)]);
        assert!(!is_path_valid(&path, |_| true));
    }
}
