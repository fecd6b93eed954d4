use std::cmp::Ordering;
use std::collections::BinaryHeap;

use gridpath_core::Point;

/// One frontier entry: a point, the cost it was reached with, and the
/// priority it is ordered by.
///
/// Entries are never updated in place. A cheaper route to the same point is
/// pushed as a new entry and the old one becomes stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierEntry {
    pub pos: Point,
    pub cost: u32,
    pub priority: u32,
    seq: u64,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest priority first,
        // and among equal priorities the earliest insertion.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue shared by both searches.
///
/// Ties are broken by insertion order, which makes every search fully
/// deterministic: the same inputs yield the same path, coordinate for
/// coordinate.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    next_seq: u64,
}

impl Frontier {
    /// Create an empty frontier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `pos`, reached with `cost`, ordered by `priority`.
    pub fn push(&mut self, pos: Point, cost: u32, priority: u32) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(FrontierEntry {
            pos,
            cost,
            priority,
            seq,
        });
    }

    /// Remove the entry with the lowest priority (earliest on ties).
    pub fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop()
    }

    /// Number of queued entries, stale ones included.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_lowest_priority_first() {
        let mut f = Frontier::new();
        f.push(Point::new(0, 0), 0, 7);
        f.push(Point::new(1, 0), 0, 2);
        f.push(Point::new(2, 0), 0, 5);
        let order: Vec<_> = std::iter::from_fn(|| f.pop()).map(|e| e.priority).collect();
        assert_eq!(order, vec![2, 5, 7]);
        assert!(f.is_empty());
    }

    #[test]
    fn ties_break_by_insertion_order() {
        let mut f = Frontier::new();
        // Points chosen so that coordinate order disagrees with insertion order.
        f.push(Point::new(9, 9), 1, 3);
        f.push(Point::new(0, 0), 1, 3);
        f.push(Point::new(5, 5), 1, 3);
        assert_eq!(f.len(), 3);
        assert_eq!(f.pop().map(|e| e.pos), Some(Point::new(9, 9)));
        assert_eq!(f.pop().map(|e| e.pos), Some(Point::new(0, 0)));
        assert_eq!(f.pop().map(|e| e.pos), Some(Point::new(5, 5)));
        assert_eq!(f.pop(), None);
    }

    #[test]
    fn duplicates_are_kept() {
        let mut f = Frontier::new();
        f.push(Point::new(1, 1), 4, 4);
        f.push(Point::new(1, 1), 2, 2);
        let first = f.pop().unwrap();
        assert_eq!((first.pos, first.cost), (Point::new(1, 1), 2));
        let stale = f.pop().unwrap();
        assert_eq!((stale.pos, stale.cost), (Point::new(1, 1), 4));
    }
}
