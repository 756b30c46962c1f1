use std::collections::HashMap;

use mazepath_core::{Coord, Maze, Path};

use crate::distance::Manhattan;
use crate::error::{Endpoint, SearchError};
use crate::frontier::Frontier;
use crate::reconstruct::reconstruct_path;
use crate::traits::{Heuristic, Passable};

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Cells taken off the frontier.
    pub expanded: usize,
    /// Cells discovered, the start included.
    pub discovered: usize,
}

/// Result of [`astar_search`]: the path, if any, and the search counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub path: Option<Path>,
    pub stats: SearchStats,
}

/// Compute the shortest path from `start` to `goal` with A* and the
/// Manhattan heuristic.
///
/// Returns `Ok(None)` when the goal cannot be reached. Fails before
/// searching if either endpoint is outside the maze or on a blocked cell.
pub fn astar_path(maze: &Maze, start: Coord, goal: Coord) -> Result<Option<Path>, SearchError> {
    astar_path_with(maze, start, goal, &Manhattan)
}

/// Like [`astar_path`], on any [`Passable`] grid with a custom heuristic.
pub fn astar_path_with<P: Passable, H: Heuristic>(
    grid: &P,
    start: Coord,
    goal: Coord,
    heuristic: &H,
) -> Result<Option<Path>, SearchError> {
    astar_search(grid, start, goal, heuristic).map(|outcome| outcome.path)
}

/// Run A* and report both the path and the [`SearchStats`].
///
/// Neighbours are visited up, right, down, left, and frontier ties are
/// resolved in insertion order, so the returned path is deterministic.
/// A cell's first discovery is final: with unit move costs it already
/// carries the cheapest cost to that cell.
pub fn astar_search<P: Passable, H: Heuristic>(
    grid: &P,
    start: Coord,
    goal: Coord,
    heuristic: &H,
) -> Result<SearchOutcome, SearchError> {
    check_endpoint(grid, Endpoint::Start, start)?;
    check_endpoint(grid, Endpoint::Goal, goal)?;

    let explored = explore(grid, start, goal, heuristic);
    let path = if explored.found {
        reconstruct_path(&explored.predecessors, start, goal)
    } else {
        None
    };
    let stats = SearchStats {
        discovered: explored.g_values.len(),
        ..explored.stats
    };

    log::debug!(
        "astar {start} -> {goal}: {} (expanded {}, discovered {})",
        match &path {
            Some(p) => format!("{} moves", p.moves()),
            None => "no path".to_string(),
        },
        stats.expanded,
        stats.discovered,
    );

    Ok(SearchOutcome { path, stats })
}

/// Bookkeeping left behind by [`explore`].
///
/// `g_values` and `predecessors` always share the same key set.
struct Explored {
    g_values: HashMap<Coord, u32>,
    predecessors: HashMap<Coord, Option<Coord>>,
    stats: SearchStats,
    found: bool,
}

fn explore<P: Passable, H: Heuristic>(grid: &P, start: Coord, goal: Coord, heuristic: &H) -> Explored {
    // (row, col) offsets: up, right, down, left.
    const DIRECTIONS: [(i32, i32); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

    let mut frontier = Frontier::new();
    let mut g_values: HashMap<Coord, u32> = HashMap::from([(start, 0)]);
    let mut predecessors: HashMap<Coord, Option<Coord>> = HashMap::from([(start, None)]);
    let mut stats = SearchStats::default();
    frontier.put(start, 0);

    let mut found = false;
    while let Some(current) = frontier.get() {
        stats.expanded += 1;
        log::trace!("expand {current}");

        if current == goal {
            found = true;
            break;
        }

        let current_g = g_values[&current];
        for (dr, dc) in DIRECTIONS {
            let neighbor = current.shift(dr, dc);
            if !grid.passable(neighbor) || g_values.contains_key(&neighbor) {
                continue;
            }
            let new_cost = current_g + 1;
            g_values.insert(neighbor, new_cost);
            // Heuristics are caller-supplied; clamp rather than wrap.
            let f_value = new_cost.saturating_add(heuristic.estimate(goal, neighbor));
            frontier.put(neighbor, f_value);
            predecessors.insert(neighbor, Some(current));
        }
    }

    Explored {
        g_values,
        predecessors,
        stats,
        found,
    }
}

fn check_endpoint<P: Passable>(grid: &P, which: Endpoint, coord: Coord) -> Result<(), SearchError> {
    if !grid.contains(coord) {
        return Err(SearchError::OutOfBounds { which, coord });
    }
    if !grid.passable(coord) {
        return Err(SearchError::Blocked { which, coord });
    }
    Ok(())
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn stats_json() {
        let stats = SearchStats {
            expanded: 3,
            discovered: 5,
        };
        let json = serde_json::to_string(&stats).unwrap();
        assert_eq!(json, r#"{"expanded":3,"discovered":5}"#);
    }
}
