//! Reachability by flood fill.

use std::collections::HashSet;

use mazepath_core::Coord;

use crate::traits::Passable;

/// Flood-fill from `start` and return every cell reachable through
/// 4-directional moves over passable cells, `start` included.
///
/// Returns an empty set if `start` itself is not passable.
pub fn reachable_from<P: Passable>(grid: &P, start: Coord) -> HashSet<Coord> {
    let mut seen = HashSet::new();
    if !grid.passable(start) {
        return seen;
    }

    // Iterative DFS.
    let mut stack = vec![start];
    seen.insert(start);
    while let Some(cur) = stack.pop() {
        for n in cur.neighbors_4() {
            if grid.passable(n) && seen.insert(n) {
                stack.push(n);
            }
        }
    }
    seen
}

/// Whether `a` and `b` lie in the same open region.
pub fn connected<P: Passable>(grid: &P, a: Coord, b: Coord) -> bool {
    reachable_from(grid, a).contains(&b)
}
