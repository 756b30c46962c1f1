use std::fmt;

use mazepath_core::Coord;
use thiserror::Error;

/// Which endpoint of a search an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Goal => f.write_str("goal"),
        }
    }
}

/// Invalid search input. An unreachable goal is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The endpoint is outside the grid.
    #[error("{which} {coord} is outside the maze")]
    OutOfBounds { which: Endpoint, coord: Coord },

    /// The endpoint is inside the grid but on a blocked cell.
    #[error("{which} {coord} is on a blocked cell")]
    Blocked { which: Endpoint, coord: Coord },
}
