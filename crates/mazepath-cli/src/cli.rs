use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use mazepath_core::Coord;
use mazepath_maze::{Cells, MazeFormat};

#[derive(Parser, Debug)]
#[command(author, version, about = "Solve grid mazes with A*")]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). `RUST_LOG` overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Find the shortest path through a maze file.
    Solve(SolveArgs),
    /// Print a random maze.
    Generate(GenerateArgs),
}

#[derive(clap::Args, Debug)]
pub struct SolveArgs {
    /// Maze file to read.
    pub file: PathBuf,

    /// Start cell as `row,col`.
    #[arg(long, default_value = "0,0")]
    pub start: Coord,

    /// Goal cell as `row,col`.
    #[arg(long)]
    pub goal: Coord,

    /// Read integer tokens separated by whitespace or commas instead of
    /// one character per cell.
    #[arg(long)]
    pub tokens: bool,

    /// Characters treated as open cells in character mode.
    #[arg(long)]
    pub open: Option<String>,

    /// Heuristic used to order the frontier.
    #[arg(long, value_enum, default_value_t = HeuristicArg::Manhattan)]
    pub heuristic: HeuristicArg,

    /// Emit a JSON report instead of the rendered maze.
    #[arg(long)]
    pub json: bool,

    /// Disable coloured output.
    #[arg(long)]
    pub no_color: bool,
}

impl SolveArgs {
    /// Parser configuration selected by the flags.
    pub fn maze_format(&self) -> MazeFormat {
        let mut format = MazeFormat::default();
        if self.tokens {
            format.cells = Cells::Tokens;
        }
        if let Some(open) = &self.open {
            format.open = open.clone();
        }
        format
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeuristicArg {
    Manhattan,
    /// Uniform-cost search.
    Zero,
}

#[derive(clap::Args, Debug)]
pub struct GenerateArgs {
    #[arg(long, default_value_t = 10)]
    pub rows: i32,

    #[arg(long, default_value_t = 10)]
    pub cols: i32,

    /// Seed for reproducible output.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Wall probability for random fill.
    #[arg(long, default_value_t = 0.3)]
    pub wall_pct: f64,

    /// Carve a connected cave by random walk instead; the value is the
    /// fraction of cells to open.
    #[arg(long)]
    pub walk: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_solve() {
        let cli = Cli::try_parse_from([
            "mazepath", "solve", "maze.txt", "--goal", "3,4", "--tokens", "-v",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 1);
        let Command::Solve(args) = cli.command else {
            panic!("expected solve");
        };
        assert_eq!(args.start, Coord::new(0, 0));
        assert_eq!(args.goal, Coord::new(3, 4));
        assert_eq!(args.heuristic, HeuristicArg::Manhattan);
        assert_eq!(args.maze_format().cells, Cells::Tokens);
    }

    #[test]
    fn goal_is_required() {
        assert!(Cli::try_parse_from(["mazepath", "solve", "maze.txt"]).is_err());
    }

    #[test]
    fn bad_coordinate_is_rejected() {
        assert!(Cli::try_parse_from(["mazepath", "solve", "m.txt", "--goal", "x"]).is_err());
    }

    #[test]
    fn open_chars_override() {
        let cli = Cli::try_parse_from([
            "mazepath", "solve", "m.txt", "--goal", "1,1", "--open", "o",
        ])
        .unwrap();
        let Command::Solve(args) = cli.command else {
            panic!("expected solve");
        };
        let format = args.maze_format();
        assert_eq!(format.cells, Cells::Chars);
        assert_eq!(format.open, "o");
    }

    #[test]
    fn parse_generate_defaults() {
        let cli = Cli::try_parse_from(["mazepath", "generate", "--seed", "4"]).unwrap();
        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!((args.rows, args.cols), (10, 10));
        assert_eq!(args.seed, Some(4));
        assert!(args.walk.is_none());
    }
}
