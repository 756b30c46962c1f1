use std::io::{self, Write};

use crossterm::style::{Color, Stylize, style};
use mazepath_core::{Coord, Maze, Path};
use mazepath_maze::{Glyph, RenderStyle, glyphs};
use mazepath_paths::{SearchOutcome, SearchStats};
use serde::Serialize;

/// JSON shape of a `solve` result.
#[derive(Debug, Serialize)]
pub struct SolveReport<'a> {
    pub start: Coord,
    pub goal: Coord,
    pub found: bool,
    pub moves: Option<usize>,
    pub path: Option<&'a Path>,
    pub stats: SearchStats,
}

impl<'a> SolveReport<'a> {
    pub fn new(start: Coord, goal: Coord, outcome: &'a SearchOutcome) -> Self {
        Self {
            start,
            goal,
            found: outcome.path.is_some(),
            moves: outcome.path.as_ref().map(Path::moves),
            path: outcome.path.as_ref(),
            stats: outcome.stats,
        }
    }
}

fn glyph_color(g: Glyph) -> Option<Color> {
    match g {
        Glyph::Open => None,
        Glyph::Wall => Some(Color::DarkGrey),
        Glyph::Path => Some(Color::Yellow),
        Glyph::Start => Some(Color::Green),
        Glyph::Goal => Some(Color::Red),
    }
}

/// Write the maze with the path overlaid, optionally coloured.
pub fn write_maze<W: Write>(
    out: &mut W,
    maze: &Maze,
    path: Option<&Path>,
    render: &RenderStyle,
    color: bool,
) -> io::Result<()> {
    for row in glyphs(maze, path) {
        for g in row {
            let ch = render.char_for(g);
            match glyph_color(g).filter(|_| color) {
                Some(c) => write!(out, "{}", style(ch).with(c))?,
                None => write!(out, "{ch}")?,
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

/// One-line human summary of a search.
pub fn summary(outcome: &SearchOutcome) -> String {
    let SearchStats {
        expanded,
        discovered,
    } = outcome.stats;
    match &outcome.path {
        Some(p) => {
            let moves = p.moves();
            let unit = if moves == 1 { "move" } else { "moves" };
            format!("{moves} {unit} (expanded {expanded}, discovered {discovered})\n{p}")
        }
        None => format!("no path (expanded {expanded}, discovered {discovered})"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazepath_paths::{Manhattan, astar_search};

    fn outcome(maze: &Maze, goal: Coord) -> SearchOutcome {
        astar_search(maze, Coord::new(0, 0), goal, &Manhattan).unwrap()
    }

    #[test]
    fn plain_rendering_has_no_escape_codes() {
        let maze = Maze::new(2, 2);
        let o = outcome(&maze, Coord::new(1, 1));
        let mut buf = Vec::new();
        write_maze(&mut buf, &maze, o.path.as_ref(), &RenderStyle::default(), false).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "S*\n.G\n");
    }

    #[test]
    fn coloured_rendering_keeps_glyphs() {
        let maze = Maze::new(1, 2);
        let o = outcome(&maze, Coord::new(0, 1));
        let mut buf = Vec::new();
        write_maze(&mut buf, &maze, o.path.as_ref(), &RenderStyle::default(), true).unwrap();
        let s = String::from_utf8(buf).unwrap();
        // Escape codes are dropped when NO_COLOR is set.
        let s: String = s.chars().filter(|c| matches!(c, 'S' | 'G' | '\n')).collect();
        assert_eq!(s, "SG\n");
    }

    #[test]
    fn json_report_found() {
        let maze = Maze::new(1, 3);
        let o = outcome(&maze, Coord::new(0, 2));
        let v = serde_json::to_value(SolveReport::new(Coord::new(0, 0), Coord::new(0, 2), &o)).unwrap();
        assert_eq!(v["found"], true);
        assert_eq!(v["moves"], 2);
        assert_eq!(v["path"][1]["col"], 1);
        assert_eq!(v["stats"]["expanded"], 3);
    }

    #[test]
    fn json_report_not_found() {
        let mut maze = Maze::new(1, 3);
        maze.set(Coord::new(0, 1), mazepath_core::WALL);
        let o = outcome(&maze, Coord::new(0, 2));
        let v = serde_json::to_value(SolveReport::new(Coord::new(0, 0), Coord::new(0, 2), &o)).unwrap();
        assert_eq!(v["found"], false);
        assert!(v["path"].is_null());
        assert!(v["moves"].is_null());
    }

    #[test]
    fn summaries() {
        let maze = Maze::new(1, 2);
        let o = outcome(&maze, Coord::new(0, 1));
        assert_eq!(
            summary(&o),
            "1 move (expanded 2, discovered 2)\n(0, 0) -> (0, 1)"
        );

        let maze = Maze::new(1, 3);
        let o = outcome(&maze, Coord::new(0, 2));
        assert_eq!(
            summary(&o),
            "2 moves (expanded 3, discovered 3)\n(0, 0) -> (0, 1) -> (0, 2)"
        );
        let o = outcome(&maze, Coord::new(0, 0));
        assert_eq!(summary(&o), "0 moves (expanded 1, discovered 1)\n(0, 0)");
    }
}
