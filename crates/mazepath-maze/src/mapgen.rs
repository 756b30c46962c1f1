//! Random maze generation.
//!
//! Two generators are provided:
//! - **Random fill**: every cell independently becomes a wall with a given
//!   probability. Produces many small disconnected regions, which is useful
//!   for exercising unreachable goals.
//! - **Random walk**: starts from solid rock and carves open space with a
//!   4-directional drunk walk from the centre, so all open cells are
//!   connected.

use mazepath_core::{Coord, Maze, OPEN, WALL};
use rand::{Rng, RngExt};

/// Random maze generator operating on a [`Maze`].
pub struct MazeGen<R: Rng> {
    pub rng: R,
    pub maze: Maze,
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator that will overwrite `maze`.
    pub fn new(maze: Maze, rng: R) -> Self {
        Self { rng, maze }
    }

    /// Make each cell a wall with probability `wall_pct` (0.0–1.0).
    ///
    /// Returns the number of open cells.
    pub fn random_fill(&mut self, wall_pct: f64) -> usize {
        for row in 0..self.maze.rows() {
            for col in 0..self.maze.cols() {
                let r: f64 = self.rng.random();
                let v = if r < wall_pct { WALL } else { OPEN };
                self.maze.set(Coord::new(row, col), v);
            }
        }
        let open = self.maze.count_open();
        log::debug!("random_fill({wall_pct}): {open} open cells");
        open
    }

    /// Fill the maze with walls, then carve open cells with random walks
    /// from the centre until `fill_pct` of the area is open or `walks`
    /// walks have been made.
    ///
    /// Returns the number of cells carved.
    pub fn random_walk(&mut self, fill_pct: f64, walks: usize) -> usize {
        self.maze.fill(WALL);
        let total = self.maze.len();
        if total == 0 {
            return 0;
        }
        let target = ((total as f64 * fill_pct) as usize).clamp(1, total);
        let start = Coord::new(self.maze.rows() / 2, self.maze.cols() / 2);
        let mut carved = 0usize;

        'walks: for _ in 0..walks {
            let mut pos = start;
            // Per-walk step cap.
            for _ in 0..total * 4 {
                if !self.maze.is_open(pos) {
                    self.maze.set(pos, OPEN);
                    carved += 1;
                    if carved >= target {
                        break 'walks;
                    }
                }
                let next = pos.neighbors_4()[self.rng.random_range(0..4usize)];
                if self.maze.in_bounds(next) {
                    pos = next;
                }
            }
        }

        log::debug!("random_walk({fill_pct}, {walks}): carved {carved}/{total}");
        carved
    }
}
