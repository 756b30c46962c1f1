//! Shortest-path search on grid mazes.
//!
//! The centrepiece is [`astar_path`], an A\* search over 4-connected,
//! unit-cost grids:
//!
//! - **A\*** shortest-path search ([`astar_path`], [`astar_search`])
//! - **Frontier** min-priority queue with FIFO tie-breaking ([`Frontier`])
//! - **Path reconstruction** from a predecessor map ([`reconstruct_path`])
//! - **BFS** unweighted baseline ([`bfs_distance`], [`bfs_path`])
//! - **Reachability** flood fill ([`reachable_from`])
//!
//! Every search owns its own state and drops it on return; calls on the
//! same maze are independent.
//!
//! # Trait seams
//!
//! | Trait | Used for |
//! |---|---|
//! | [`Passable`] | Grid legality queries (all searches) |
//! | [`Heuristic`] | Remaining-cost estimate (A\*) |

mod astar;
mod bfs;
mod distance;
mod error;
mod frontier;
mod reach;
mod reconstruct;
mod traits;

pub use astar::{SearchOutcome, SearchStats, astar_path, astar_path_with, astar_search};
pub use bfs::{bfs_distance, bfs_path};
pub use distance::{Manhattan, Zero, manhattan};
pub use error::{Endpoint, SearchError};
pub use frontier::Frontier;
pub use reach::{connected, reachable_from};
pub use reconstruct::reconstruct_path;
pub use traits::{Heuristic, Passable};
