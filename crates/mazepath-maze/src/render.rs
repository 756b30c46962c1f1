//! Text rendering of a maze with an optional path overlay.

use std::collections::HashSet;

use mazepath_core::{Coord, Maze, Path};

/// What a rendered cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Open,
    Wall,
    Path,
    Start,
    Goal,
}

/// Characters used for each [`Glyph`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderStyle {
    pub open: char,
    pub wall: char,
    pub path: char,
    pub start: char,
    pub goal: char,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            open: '.',
            wall: '#',
            path: '*',
            start: 'S',
            goal: 'G',
        }
    }
}

impl RenderStyle {
    /// The character for a glyph.
    pub fn char_for(&self, g: Glyph) -> char {
        match g {
            Glyph::Open => self.open,
            Glyph::Wall => self.wall,
            Glyph::Path => self.path,
            Glyph::Start => self.start,
            Glyph::Goal => self.goal,
        }
    }
}

/// Classify every cell, row by row.
///
/// Path cells override the underlying open/wall marker; the path's first
/// and last cells are shown as start and goal.
pub fn glyphs(maze: &Maze, path: Option<&Path>) -> Vec<Vec<Glyph>> {
    let on_path: HashSet<Coord> = path.map(|p| p.iter().copied().collect()).unwrap_or_default();
    let ends = path.map(|p| (p.start(), p.goal()));

    (0..maze.rows())
        .map(|row| {
            (0..maze.cols())
                .map(|col| {
                    let c = Coord::new(row, col);
                    match ends {
                        Some((s, _)) if s == c => Glyph::Start,
                        Some((_, g)) if g == c => Glyph::Goal,
                        _ if on_path.contains(&c) => Glyph::Path,
                        _ if maze.is_open(c) => Glyph::Open,
                        _ => Glyph::Wall,
                    }
                })
                .collect()
        })
        .collect()
}

/// Render the maze as text, one line per row, each terminated by `'\n'`.
pub fn render(maze: &Maze, path: Option<&Path>, style: &RenderStyle) -> String {
    let mut out = String::with_capacity(maze.len() + maze.rows().max(0) as usize);
    for row in glyphs(maze, path) {
        out.extend(row.into_iter().map(|g| style.char_for(g)));
        out.push('\n');
    }
    out
}
