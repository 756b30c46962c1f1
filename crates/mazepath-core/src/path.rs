use std::fmt;
use std::ops::Deref;

use crate::geom::Coord;
use crate::maze::Maze;

/// An ordered sequence of cells from a start to a goal, both inclusive.
///
/// A path always holds at least one cell; when start and goal coincide it
/// is exactly `[start]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Coord>", into = "Vec<Coord>"))]
pub struct Path(Vec<Coord>);

/// Error returned when building a [`Path`] from an empty cell list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("a path must contain at least one cell")]
pub struct EmptyPath;

impl Path {
    /// Wrap a cell sequence. Returns `None` for an empty sequence.
    pub fn new(cells: Vec<Coord>) -> Option<Self> {
        if cells.is_empty() { None } else { Some(Self(cells)) }
    }

    /// First cell.
    pub fn start(&self) -> Coord {
        self.0[0]
    }

    /// Last cell.
    pub fn goal(&self) -> Coord {
        self.0[self.0.len() - 1]
    }

    /// Number of moves (edges), one less than the number of cells.
    pub fn moves(&self) -> usize {
        self.0.len() - 1
    }

    /// Borrow the cells.
    pub fn cells(&self) -> &[Coord] {
        &self.0
    }

    /// Consume the path, returning its cells.
    pub fn into_cells(self) -> Vec<Coord> {
        self.0
    }

    /// Whether every cell is open in `maze` and consecutive cells are
    /// 4-directionally adjacent.
    pub fn is_valid_on(&self, maze: &Maze) -> bool {
        self.0.iter().all(|&c| maze.is_open(c))
            && self.0.windows(2).all(|w| w[0].is_adjacent_4(w[1]))
    }
}

impl TryFrom<Vec<Coord>> for Path {
    type Error = EmptyPath;

    fn try_from(cells: Vec<Coord>) -> Result<Self, EmptyPath> {
        Self::new(cells).ok_or(EmptyPath)
    }
}

impl From<Path> for Vec<Coord> {
    fn from(p: Path) -> Self {
        p.into_cells()
    }
}

impl Deref for Path {
    type Target = [Coord];

    fn deref(&self) -> &[Coord] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Coord;
    type IntoIter = std::slice::Iter<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
