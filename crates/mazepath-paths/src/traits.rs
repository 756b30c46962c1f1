use mazepath_core::{Coord, Maze};

/// Grid legality queries used by every search.
pub trait Passable {
    /// Whether `c` lies inside the grid.
    fn contains(&self, c: Coord) -> bool;

    /// Whether `c` is inside the grid and not blocked.
    fn passable(&self, c: Coord) -> bool;
}

impl Passable for Maze {
    #[inline]
    fn contains(&self, c: Coord) -> bool {
        self.in_bounds(c)
    }

    #[inline]
    fn passable(&self, c: Coord) -> bool {
        self.is_open(c)
    }
}

/// Estimate of the remaining cost between two cells.
///
/// Implementations must be admissible: the estimate may never exceed the
/// true number of unit moves between the cells. A* stays optimal only
/// under that guarantee.
pub trait Heuristic {
    /// Estimated cost from `from` to `to`.
    fn estimate(&self, from: Coord, to: Coord) -> u32;
}
