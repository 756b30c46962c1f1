use std::collections::{HashMap, VecDeque};

use mazepath_core::{Coord, Path};

use crate::reconstruct::reconstruct_path;
use crate::traits::Passable;

/// Breadth-first search from `start` until `goal` is dequeued.
///
/// Returns the predecessor map and the goal's distance, if reached.
fn bfs<P: Passable>(
    grid: &P,
    start: Coord,
    goal: Coord,
) -> (HashMap<Coord, Option<Coord>>, Option<u32>) {
    let mut predecessors: HashMap<Coord, Option<Coord>> = HashMap::new();
    if !grid.passable(start) || !grid.passable(goal) {
        return (predecessors, None);
    }

    let mut dist: HashMap<Coord, u32> = HashMap::from([(start, 0)]);
    let mut queue: VecDeque<Coord> = VecDeque::from([start]);
    predecessors.insert(start, None);

    while let Some(cur) = queue.pop_front() {
        let d = dist[&cur];
        if cur == goal {
            return (predecessors, Some(d));
        }
        for n in cur.neighbors_4() {
            if !grid.passable(n) || dist.contains_key(&n) {
                continue;
            }
            dist.insert(n, d + 1);
            predecessors.insert(n, Some(cur));
            queue.push_back(n);
        }
    }

    (predecessors, None)
}

/// Length in moves of the shortest 4-directional path, or `None` if the
/// goal is unreachable or either endpoint is not passable.
pub fn bfs_distance<P: Passable>(grid: &P, start: Coord, goal: Coord) -> Option<u32> {
    bfs(grid, start, goal).1
}

/// A shortest path found by breadth-first search.
///
/// Independent of the A* engine and used as its baseline.
pub fn bfs_path<P: Passable>(grid: &P, start: Coord, goal: Coord) -> Option<Path> {
    let (predecessors, dist) = bfs(grid, start, goal);
    dist?;
    reconstruct_path(&predecessors, start, goal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazepath_core::{Maze, WALL};

    #[test]
    fn open_grid_distance_is_manhattan() {
        let maze = Maze::new(4, 6);
        assert_eq!(bfs_distance(&maze, Coord::new(0, 0), Coord::new(3, 5)), Some(8));
        assert_eq!(bfs_distance(&maze, Coord::new(2, 2), Coord::new(2, 2)), Some(0));
    }

    #[test]
    fn detours_around_wall() {
        let mut maze = Maze::new(3, 3);
        maze.set(Coord::new(0, 1), WALL);
        maze.set(Coord::new(1, 1), WALL);
        let path = bfs_path(&maze, Coord::new(0, 0), Coord::new(0, 2)).unwrap();
        assert_eq!(path.moves(), 6);
        assert!(path.is_valid_on(&maze));
    }

    #[test]
    fn blocked_endpoints_and_unreachable() {
        let mut maze = Maze::new(3, 3);
        maze.set(Coord::new(1, 0), WALL);
        maze.set(Coord::new(1, 1), WALL);
        maze.set(Coord::new(1, 2), WALL);
        assert_eq!(bfs_distance(&maze, Coord::new(0, 0), Coord::new(2, 2)), None);
        assert_eq!(bfs_distance(&maze, Coord::new(1, 1), Coord::new(0, 0)), None);
        assert!(bfs_path(&maze, Coord::new(0, 0), Coord::new(5, 5)).is_none());
    }
}
