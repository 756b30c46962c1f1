//! **mazepath-core** — foundational types for grid maze pathfinding.
//!
//! This crate provides the value types shared across the *mazepath*
//! workspace: the [`Coord`] cell address, the [`Maze`] traversability grid,
//! and the [`Path`] returned by searches.

pub mod error;
pub mod geom;
pub mod maze;
pub mod path;

pub use error::MazeError;
pub use geom::{Coord, ParseCoordError};
pub use maze::{MAX_CELLS, Maze, OPEN, WALL};
pub use path::{EmptyPath, Path};
