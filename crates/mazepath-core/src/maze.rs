//! A rectangular traversability grid.
//!
//! [`Maze`] stores one `i32` per cell in row-major order. A value of `0`
//! means the cell is open; any other value marks it blocked.

use crate::error::MazeError;
use crate::geom::Coord;

/// Cell value for an open cell.
pub const OPEN: i32 = 0;

/// Cell value used for walls when the caller does not supply one.
pub const WALL: i32 = 1;

/// Largest number of cells a maze may hold. Flat indices stay within `i32`.
pub const MAX_CELLS: usize = i32::MAX as usize;

/// A 2D grid of traversability markers indexed by [`Coord`].
///
/// With the `serde` feature a maze serializes as its list of rows and is
/// rebuilt through [`Maze::from_rows`] on the way back.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Vec<i32>>", into = "Vec<Vec<i32>>")
)]
pub struct Maze {
    cells: Vec<i32>,
    rows: i32,
    cols: i32,
}

impl Maze {
    /// Create a new maze of the given size with every cell open.
    ///
    /// Negative dimensions are treated as zero.
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` exceeds [`MAX_CELLS`]; use
    /// [`try_new`](Self::try_new) for sizes from untrusted input.
    pub fn new(rows: i32, cols: i32) -> Self {
        match Self::try_new(rows, cols) {
            Ok(maze) => maze,
            Err(e) => panic!("{e}"),
        }
    }

    /// Fallible [`new`](Self::new): rejects sizes above [`MAX_CELLS`].
    pub fn try_new(rows: i32, cols: i32) -> Result<Self, MazeError> {
        let rows = rows.max(0);
        let cols = cols.max(0);
        let len = checked_len(rows as usize, cols as usize)?;
        Ok(Self {
            cells: vec![OPEN; len],
            rows,
            cols,
        })
    }

    /// Build a maze from an array of rows.
    ///
    /// Every row must have the same, non-zero width.
    pub fn from_rows<R: AsRef<[i32]>>(rows: &[R]) -> Result<Self, MazeError> {
        let Some(first) = rows.first() else {
            return Err(MazeError::Empty);
        };
        let width = first.as_ref().len();
        if width == 0 {
            return Err(MazeError::Empty);
        }
        let len = checked_len(rows.len(), width)?;
        let mut cells = Vec::with_capacity(len);
        for (line, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(MazeError::Ragged {
                    line: line + 1,
                    expected: width,
                    found: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }
        Ok(Self {
            cells,
            rows: rows.len() as i32,
            cols: width as i32,
        })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the maze has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `c` lies inside the grid.
    #[inline]
    pub fn in_bounds(&self, c: Coord) -> bool {
        c.row >= 0 && c.row < self.rows && c.col >= 0 && c.col < self.cols
    }

    #[inline]
    fn index(&self, c: Coord) -> Option<usize> {
        if !self.in_bounds(c) {
            return None;
        }
        Some((c.row * self.cols + c.col) as usize)
    }

    /// Get the cell value at `c`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, c: Coord) -> Option<i32> {
        self.index(c).map(|i| self.cells[i])
    }

    /// Whether `c` is in bounds and not blocked.
    #[inline]
    pub fn is_open(&self, c: Coord) -> bool {
        self.at(c) == Some(OPEN)
    }

    /// Set the cell value at `c`. Does nothing if out of bounds.
    pub fn set(&mut self, c: Coord, value: i32) {
        if let Some(i) = self.index(c) {
            self.cells[i] = value;
        }
    }

    /// Fill the entire maze with the given value.
    pub fn fill(&mut self, value: i32) {
        self.cells.fill(value);
    }

    /// Count open cells.
    pub fn count_open(&self) -> usize {
        self.cells.iter().filter(|&&v| v == OPEN).count()
    }

    /// Iterate over `(Coord, value)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, i32)> + '_ {
        let cols = self.cols.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &v)| (Coord::new(i as i32 / cols, i as i32 % cols), v))
    }

    /// Iterate over the rows as slices.
    pub fn row_slices(&self) -> impl Iterator<Item = &[i32]> + '_ {
        self.cells.chunks(self.cols.max(1) as usize)
    }
}

fn checked_len(rows: usize, cols: usize) -> Result<usize, MazeError> {
    rows.checked_mul(cols)
        .filter(|&len| len <= MAX_CELLS)
        .ok_or(MazeError::TooLarge { rows, cols })
}

impl TryFrom<Vec<Vec<i32>>> for Maze {
    type Error = MazeError;

    fn try_from(rows: Vec<Vec<i32>>) -> Result<Self, MazeError> {
        Self::from_rows(&rows)
    }
}

impl From<Maze> for Vec<Vec<i32>> {
    fn from(maze: Maze) -> Self {
        maze.row_slices().map(<[i32]>::to_vec).collect()
    }
}
