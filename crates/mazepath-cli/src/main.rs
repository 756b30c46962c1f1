//! `mazepath` — solve or generate grid mazes from the terminal.
//!
//! Run: cargo run -- solve maze.txt --goal 3,3

mod cli;
mod logging;
mod output;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use mazepath_core::Maze;
use mazepath_maze::{MazeGen, RenderStyle, read_maze, render};
use mazepath_paths::{Manhattan, SearchOutcome, Zero, astar_search};
use rand::{RngExt, SeedableRng};
use rand::rngs::StdRng;

use crate::cli::{Cli, Command, GenerateArgs, HeuristicArg, SolveArgs};
use crate::output::{SolveReport, summary, write_maze};

/// Exit status when the goal is unreachable.
const EXIT_NO_PATH: u8 = 2;

/// Largest maze `generate` will build and print.
const MAX_GENERATE_CELLS: usize = 1 << 24;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    let result = match cli.command {
        Command::Solve(args) => handle_solve(&args),
        Command::Generate(args) => handle_generate(&args),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_solve(args: &SolveArgs) -> Result<ExitCode> {
    let maze = read_maze(&args.file, &args.maze_format())
        .with_context(|| format!("failed to load maze from {}", args.file.display()))?;
    tracing::info!(rows = maze.rows(), cols = maze.cols(), "maze loaded");

    let outcome: SearchOutcome = match args.heuristic {
        HeuristicArg::Manhattan => astar_search(&maze, args.start, args.goal, &Manhattan),
        HeuristicArg::Zero => astar_search(&maze, args.start, args.goal, &Zero),
    }
    .context("invalid search endpoints")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        let report = SolveReport::new(args.start, args.goal, &outcome);
        serde_json::to_writer_pretty(&mut out, &report)?;
        writeln!(out)?;
    } else {
        write_maze(
            &mut out,
            &maze,
            outcome.path.as_ref(),
            &RenderStyle::default(),
            !args.no_color,
        )?;
        writeln!(out, "{}", summary(&outcome))?;
    }

    Ok(if outcome.path.is_some() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_NO_PATH)
    })
}

/// Allocate the blank maze for `generate`, checking the requested size.
fn blank_maze(rows: i32, cols: i32) -> Result<Maze> {
    anyhow::ensure!(
        rows > 0 && cols > 0,
        "maze size must be positive, got {rows}x{cols}"
    );
    let cells = (rows as usize).saturating_mul(cols as usize);
    anyhow::ensure!(
        cells <= MAX_GENERATE_CELLS,
        "maze size {rows}x{cols} exceeds the limit of {MAX_GENERATE_CELLS} cells"
    );
    Ok(Maze::try_new(rows, cols)?)
}

fn handle_generate(args: &GenerateArgs) -> Result<ExitCode> {
    let maze = blank_maze(args.rows, args.cols)?;
    let steps = maze.len();
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::rng().random()),
    };
    let mut mg = MazeGen::new(maze, rng);
    let open = match args.walk {
        Some(fill) => mg.random_walk(fill, steps),
        None => mg.random_fill(args.wall_pct),
    };
    tracing::info!(open, "maze generated");

    print!("{}", render(&mg.maze, None, &RenderStyle::default()));
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_maze_checks_size() {
        let maze = blank_maze(3, 5).unwrap();
        assert_eq!((maze.rows(), maze.cols()), (3, 5));
        assert_eq!(maze.count_open(), 15);

        assert!(blank_maze(0, 5).is_err());
        assert!(blank_maze(4, -1).is_err());

        let err = blank_maze(100_000, 100_000).unwrap_err();
        assert!(err.to_string().contains("exceeds the limit"));
        assert!(blank_maze(i32::MAX, i32::MAX).is_err());
    }
}
