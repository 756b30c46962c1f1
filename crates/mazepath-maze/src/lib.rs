//! Maze utilities for mazepath: text formats, rendering, random generation.

pub mod mapgen;
pub mod render;
pub mod text;

pub use mapgen::MazeGen;
pub use render::{Glyph, RenderStyle, glyphs, render};
pub use text::{Cells, MazeFormat, parse_maze, read_maze};
