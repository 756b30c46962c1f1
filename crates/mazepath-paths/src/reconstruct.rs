use std::collections::HashMap;

use mazepath_core::{Coord, Path};

/// Rebuild the start-to-goal path from a predecessor map.
///
/// Walks back from `goal` along the predecessor links until it reaches the
/// `None` sentinel, then reverses. Returns `None` if `goal` was never
/// discovered or if the chain does not end at `start`.
pub fn reconstruct_path(
    predecessors: &HashMap<Coord, Option<Coord>>,
    start: Coord,
    goal: Coord,
) -> Option<Path> {
    let mut cells = Vec::new();
    let mut cur = goal;
    // A well-formed chain visits each discovered cell at most once.
    for _ in 0..=predecessors.len() {
        cells.push(cur);
        match *predecessors.get(&cur)? {
            Some(prev) => cur = prev,
            None => {
                if cur != start {
                    return None;
                }
                cells.reverse();
                return Path::new(cells);
            }
        }
    }
    None
}
