use thiserror::Error;

/// Errors raised while building a [`Maze`](crate::Maze) from external input.
#[derive(Debug, Error)]
pub enum MazeError {
    /// The input contained no rows, or only empty rows.
    #[error("maze is empty")]
    Empty,

    /// A row had a different width than the first row.
    #[error("maze row {line} has {found} cells, expected {expected}")]
    Ragged {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// The requested dimensions exceed [`MAX_CELLS`](crate::MAX_CELLS).
    #[error("maze of {rows}x{cols} cells is too large")]
    TooLarge { rows: usize, cols: usize },

    /// A token in a delimited maze was not an integer.
    #[error("invalid cell {token:?} at line {line}, column {column}")]
    InvalidToken {
        line: usize,
        column: usize,
        token: String,
    },

    /// Wrapper for IO errors while reading a maze file.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
