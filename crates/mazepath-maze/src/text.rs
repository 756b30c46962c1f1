//! Reading mazes from text.
//!
//! Two layouts are understood, selected by [`MazeFormat::cells`]:
//!
//! ```text
//! Cells::Chars          Cells::Tokens
//! .#..                  0 1 0 0
//! ...#                  0 0 0 1
//! ##.#                  1 1 0 1
//! ..#.                  0 0 1 0
//! ```
//!
//! In `Chars` mode every character is one cell; characters listed in
//! [`MazeFormat::open`] are open and everything else is a wall. In `Tokens`
//! mode each line is split on whitespace and commas and every token must be
//! an integer, `0` meaning open.

use std::path::Path as FsPath;

use mazepath_core::{Maze, MazeError, OPEN, WALL};

/// How a line is split into cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Cells {
    /// One character per cell.
    #[default]
    Chars,
    /// Integer tokens separated by whitespace or commas.
    Tokens,
}

/// Parser configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MazeFormat {
    pub cells: Cells,
    /// Characters treated as open in `Chars` mode.
    pub open: String,
}

impl Default for MazeFormat {
    fn default() -> Self {
        Self {
            cells: Cells::Chars,
            open: "0. ".to_string(),
        }
    }
}

/// Parse a maze from a string.
pub fn parse_maze(s: &str, format: &MazeFormat) -> Result<Maze, MazeError> {
    let rows = match format.cells {
        Cells::Chars => parse_chars(s, &format.open)?,
        Cells::Tokens => parse_tokens(s)?,
    };
    Maze::from_rows(&rows)
}

/// Read and parse a maze file.
pub fn read_maze(path: impl AsRef<FsPath>, format: &MazeFormat) -> Result<Maze, MazeError> {
    let path = path.as_ref();
    let s = std::fs::read_to_string(path)?;
    let maze = parse_maze(&s, format)?;
    log::debug!(
        "read {}x{} maze from {}",
        maze.rows(),
        maze.cols(),
        path.display()
    );
    Ok(maze)
}

/// Lines with their 1-based numbers, with blank lines trimmed from both ends.
fn content_lines(s: &str) -> Vec<(usize, &str)> {
    let lines: Vec<(usize, &str)> = s
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim_end_matches('\r')))
        .collect();
    let Some(first) = lines.iter().position(|(_, l)| !l.is_empty()) else {
        return Vec::new();
    };
    let last = lines
        .iter()
        .rposition(|(_, l)| !l.is_empty())
        .unwrap_or(first);
    lines[first..=last].to_vec()
}

fn parse_chars(s: &str, open: &str) -> Result<Vec<Vec<i32>>, MazeError> {
    let mut rows: Vec<Vec<i32>> = Vec::new();
    let mut width = None;
    for (line, text) in content_lines(s) {
        let row: Vec<i32> = text
            .chars()
            .map(|ch| if open.contains(ch) { OPEN } else { WALL })
            .collect();
        check_width(&mut width, line, row.len())?;
        rows.push(row);
    }
    Ok(rows)
}

fn parse_tokens(s: &str) -> Result<Vec<Vec<i32>>, MazeError> {
    let mut rows: Vec<Vec<i32>> = Vec::new();
    let mut width = None;
    for (line, text) in content_lines(s) {
        let text = text.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }
        let row = text
            .split(|ch: char| ch == ',' || ch.is_whitespace())
            .filter(|tok| !tok.is_empty())
            .enumerate()
            .map(|(i, tok)| {
                tok.parse::<i32>().map_err(|_| MazeError::InvalidToken {
                    line,
                    column: i + 1,
                    token: tok.to_string(),
                })
            })
            .collect::<Result<Vec<i32>, MazeError>>()?;
        check_width(&mut width, line, row.len())?;
        rows.push(row);
    }
    Ok(rows)
}

fn check_width(width: &mut Option<usize>, line: usize, found: usize) -> Result<(), MazeError> {
    match *width {
        None => {
            *width = Some(found);
            Ok(())
        }
        Some(expected) if expected != found => Err(MazeError::Ragged {
            line,
            expected,
            found,
        }),
        Some(_) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazepath_core::Coord;

    fn tokens() -> MazeFormat {
        MazeFormat {
            cells: Cells::Tokens,
            ..MazeFormat::default()
        }
    }

    #[test]
    fn chars_default_open_set() {
        let m = parse_maze("\n.#0\n*  \n\n", &MazeFormat::default()).unwrap();
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 3);
        assert!(m.is_open(Coord::new(0, 0)));
        assert!(!m.is_open(Coord::new(0, 1)));
        assert!(m.is_open(Coord::new(0, 2)));
        assert!(!m.is_open(Coord::new(1, 0)));
        assert!(m.is_open(Coord::new(1, 2)));
    }

    #[test]
    fn chars_custom_open_set() {
        let fmt = MazeFormat {
            open: "o".to_string(),
            ..MazeFormat::default()
        };
        let m = parse_maze("o.\r\noo\r\n", &fmt).unwrap();
        assert_eq!(m.count_open(), 3);
        assert!(!m.is_open(Coord::new(0, 1)));
    }

    #[test]
    fn chars_ragged_reports_source_line() {
        let err = parse_maze("\n...\n..\n", &MazeFormat::default()).unwrap_err();
        assert!(matches!(
            err,
            MazeError::Ragged {
                line: 3,
                expected: 3,
                found: 2
            }
        ));
    }

    #[test]
    fn tokens_keep_values() {
        let m = parse_maze("# demo\n0, 1, 0\n2 0 0\n", &tokens()).unwrap();
        assert_eq!(m.at(Coord::new(0, 1)), Some(1));
        assert_eq!(m.at(Coord::new(1, 0)), Some(2));
        assert_eq!(m.count_open(), 4);
    }

    #[test]
    fn tokens_invalid() {
        let err = parse_maze("0 0\n0 x\n", &tokens()).unwrap_err();
        match err {
            MazeError::InvalidToken {
                line,
                column,
                token,
            } => {
                assert_eq!((line, column), (2, 2));
                assert_eq!(token, "x");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_input() {
        assert!(matches!(
            parse_maze("\n\n", &MazeFormat::default()),
            Err(MazeError::Empty)
        ));
        assert!(matches!(parse_maze("# only\n", &tokens()), Err(MazeError::Empty)));
    }

    #[test]
    fn read_missing_file() {
        let err = read_maze("/definitely/not/here.txt", &MazeFormat::default()).unwrap_err();
        assert!(matches!(err, MazeError::Io(_)));
    }

    #[test]
    fn read_from_disk() {
        let path = std::env::temp_dir().join(format!("mazepath-text-{}.txt", std::process::id()));
        std::fs::write(&path, ".#\n..\n").unwrap();
        let m = read_maze(&path, &MazeFormat::default()).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!((m.rows(), m.cols()), (2, 2));
        assert_eq!(m.count_open(), 3);
    }
}
