#![allow(dead_code, clippy::cast_precision_loss)]

use crate::sudoku::board::{Board, GRID_SIZE};
use crate::sudoku::parser;
use crate::sudoku::solver::{Backtracking, SolveStats, Solver};
use clap::{Args, Parser, Subcommand};
use itertools::Itertools;
use rustc_hash::FxHashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tikv_jemalloc_ctl::{epoch, stats};

/// Defines the command-line interface for the Sudoku solver application.
///
/// Uses `clap` for parsing arguments.
#[derive(Parser, Debug)]
#[command(name = "sudoku_solver", version, about = "An exhaustive backtracking Sudoku solver")]
pub(crate) struct Cli {
    /// An optional global path argument. If provided without a subcommand,
    /// it's treated as the path to a puzzle file to solve.
    #[arg(global = true)]
    pub path: Option<PathBuf>,

    /// Specifies the subcommand to execute (e.g. `file`, `text`, `dir`).
    #[clap(subcommand)]
    pub command: Option<Commands>,

    /// Common options applicable to all commands.
    #[command(flatten)]
    pub common: CommonOptions,
}

/// Enumerates the available subcommands for the Sudoku solver.
#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Solve a single puzzle file.
    File {
        /// Path to the puzzle file. The format is defined by the
        /// `sudoku::parser` module.
        #[arg(long)]
        path: PathBuf,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Solve a puzzle provided as plain text.
    Text {
        /// Inline puzzle input (e.g. "53..7....;6..195...;...").
        /// Rows are separated by newlines or ';'.
        #[arg(short, long)]
        input: String,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Solve every `.sudoku` file under a directory tree.
    Dir {
        /// Path to the directory to walk.
        #[arg(long)]
        path: PathBuf,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Generate shell completion scripts.
    Completions {
        /// The shell to generate completions for.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Defines common command-line options shared across different subcommands.
#[derive(Args, Debug, Default, Clone)]
pub(crate) struct CommonOptions {
    /// Enable debug output, providing more verbose logging during the
    /// solving process.
    #[arg(short, long, default_value_t = false)]
    pub(crate) debug: bool,

    /// Enable verification of a completed grid: re-check that every row,
    /// column, and box contains each digit exactly once.
    #[arg(short, long, default_value_t = true)]
    pub(crate) verify: bool,

    /// Enable printing of performance statistics after solving.
    #[arg(short, long, default_value_t = true)]
    pub(crate) stats: bool,

    /// Enable printing of the solved grid.
    #[arg(short, long, default_value_t = true)]
    pub(crate) print_solution: bool,
}

/// Solve a puzzle file.
///
/// Returns whether the puzzle was solved, or an error message when the file
/// is missing or malformed.
///
/// # Errors
///
/// If the puzzle file doesn't exist or cannot be parsed.
pub(crate) fn solve_file(path: &Path, common: &CommonOptions) -> Result<bool, String> {
    if !path.exists() {
        return Err(format!("Puzzle file does not exist: {}", path.display()));
    }

    if !path.is_file() {
        return Err(format!("Provided path is not a file: {}", path.display()));
    }

    let time = std::time::Instant::now();
    let board =
        parser::parse_file(path).map_err(|e| format!("Error parsing puzzle file: {e}"))?;
    let parse_time = time.elapsed();

    solve_and_report(board, common, Some(path), parse_time)
}

/// Solve a puzzle given inline on the command line.
///
/// # Errors
///
/// If the input cannot be parsed.
pub(crate) fn solve_text(input: &str, common: &CommonOptions) -> Result<bool, String> {
    let time = std::time::Instant::now();
    let board = parser::parse_text(input).map_err(|e| format!("Error parsing puzzle: {e}"))?;
    let parse_time = time.elapsed();

    solve_and_report(board, common, None, parse_time)
}

/// Solves a directory of puzzle files.
///
/// This function walks the directory tree, solving every `.sudoku` file it
/// finds, and prints a per-file summary at the end.
///
/// # Errors
///
/// If any puzzle file cannot be read or parsed.
pub(crate) fn solve_dir(path: &Path, common: &CommonOptions) -> Result<(), String> {
    if !path.is_dir() {
        eprintln!("Provided path is not a directory: {}", path.display());
        std::process::exit(1);
    }

    let mut outcomes: FxHashMap<PathBuf, bool> = FxHashMap::default();

    for entry in walkdir::WalkDir::new(path)
        .into_iter()
        .filter_map(Result::ok)
    {
        let file_path = entry.path().to_path_buf();
        if file_path.extension().is_none_or(|ext| ext != "sudoku") {
            continue;
        }

        if !file_path.is_file() {
            continue;
        }

        let solved = solve_file(&file_path, common)?;
        outcomes.insert(file_path, solved);
    }

    let solved_count = outcomes.values().filter(|&&solved| solved).count();
    println!("\nSolved {solved_count}/{} puzzles", outcomes.len());
    for (file, solved) in outcomes.iter().sorted() {
        let verdict = if *solved { "SOLVED" } else { "UNSOLVABLE" };
        println!("  {:<50} {verdict}", file.display());
    }

    Ok(())
}

/// Solves a parsed board and reports results including stats and
/// verification.
///
/// Inconsistent input (a digit already repeated within a row, column, or
/// box) is rejected before the search starts.
///
/// # Errors
///
/// If the starting grid is inconsistent.
pub(crate) fn solve_and_report(
    mut board: Board,
    common: &CommonOptions,
    label: Option<&Path>,
    parse_time: Duration,
) -> Result<bool, String> {
    if let Some(name) = label {
        println!("Solving: {}", name.display());
    }

    println!("Parsed puzzle:\n{board}");

    if !board.is_consistent() {
        return Err(String::from(
            "Puzzle is inconsistent: a digit repeats within a row, column, or box",
        ));
    }

    let clues = clue_count(&board);

    if common.debug {
        println!("Clues: {clues}");
        println!("Empty cells: {}", GRID_SIZE * GRID_SIZE - clues);
    }

    epoch::advance().unwrap();

    let time = std::time::Instant::now();

    let mut solver = Backtracking::new();
    let solved = solver.solve(&mut board);

    let elapsed = time.elapsed();

    if common.debug {
        println!("Solved: {solved}");
        println!("Time: {elapsed:?}");
    }

    epoch::advance().unwrap();

    let allocated_bytes = stats::allocated::mib().unwrap().read().unwrap();
    let resident_bytes = stats::resident::mib().unwrap().read().unwrap();

    let allocated_mib = allocated_bytes as f64 / (1024.0 * 1024.0);
    let resident_mib = resident_bytes as f64 / (1024.0 * 1024.0);

    if common.verify && solved {
        verify_board(&board);
    }

    if common.stats {
        print_stats(
            parse_time,
            elapsed,
            clues,
            &solver.stats(),
            allocated_mib,
            resident_mib,
            solved,
        );
    }

    if solved {
        if common.print_solution {
            println!("Solution:\n{board}");
        }
    } else {
        println!("No solution found");
    }

    Ok(solved)
}

/// Verifies that a completed `board` satisfies all three constraints.
///
/// Prints whether the verification was successful; panics if it fails.
pub(crate) fn verify_board(board: &Board) {
    let ok = board.is_solved();
    println!("Verified: {ok:?}");
    assert!(ok, "Solution failed verification!");
}

/// Counts the filled cells of a board.
fn clue_count(board: &Board) -> usize {
    board
        .grid()
        .iter()
        .flatten()
        .filter(|&&value| value != 0)
        .count()
}

/// Helper function to print a single statistic line in a formatted table row.
///
/// # Arguments
/// * `label` - The description of the statistic.
/// * `value` - The value of the statistic, implementing `std::fmt::Display`.
pub(crate) fn stat_line(label: &str, value: impl std::fmt::Display) {
    println!("|  {label:<28} {value:>18}  |");
}

/// Helper function to print a statistic line that includes a rate
/// (value/second).
///
/// # Arguments
/// * `label` - The description of the statistic.
/// * `value` - The raw count for the statistic.
/// * `elapsed` - The elapsed time in seconds, used to calculate the rate.
pub(crate) fn stat_line_with_rate(label: &str, value: usize, elapsed: f64) {
    let rate = if elapsed > 0.0 {
        value as f64 / elapsed
    } else {
        0.0
    };
    println!("|  {label:<20} {value:>12} ({rate:>9.0}/sec)  |");
}

/// Prints a summary of problem and search statistics.
///
/// # Arguments
/// * `parse_time` - Duration spent parsing the input.
/// * `elapsed` - Duration spent by the solver.
/// * `clues` - Number of filled cells in the starting grid.
/// * `s` - `SolveStats` collected by the solver.
/// * `allocated` - Allocated memory in MiB.
/// * `resident` - Resident memory in MiB.
/// * `solved` - Whether a solution was found.
pub(crate) fn print_stats(
    parse_time: Duration,
    elapsed: Duration,
    clues: usize,
    s: &SolveStats,
    allocated: f64,
    resident: f64,
    solved: bool,
) {
    let elapsed_secs = elapsed.as_secs_f64();

    println!("\n=======================[ Problem Statistics ]=========================");
    stat_line("Parse time (s)", format!("{:.3}", parse_time.as_secs_f64()));
    stat_line("Clues", clues);
    stat_line("Empty cells", GRID_SIZE * GRID_SIZE - clues);

    println!("========================[ Search Statistics ]========================");
    stat_line_with_rate("Decisions", s.decisions, elapsed_secs);
    stat_line_with_rate("Backtracks", s.backtracks, elapsed_secs);
    stat_line("Memory usage (MiB)", format!("{allocated:.2}"));
    stat_line("Resident memory (MiB)", format!("{resident:.2}"));
    stat_line("CPU time (s)", format!("{elapsed_secs:.3}"));
    println!("=====================================================================");

    if solved {
        println!("\nSOLVED");
    } else {
        println!("\nUNSOLVABLE");
    }
}
