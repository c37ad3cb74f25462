//! # `sudoku_solver`
//!
//! `sudoku_solver` is a command-line solver for standard 9x9 Sudoku puzzles.
//! It parses puzzles from a small plain-text format and fills them by
//! exhaustive depth-first backtracking, reporting either the completed grid
//! or that no solution exists.
//!
//! ## Usage
//!
//! ### General Syntax
//!
//! ```sh
//! sudoku_solver [GLOBAL_OPTIONS] [SUBCOMMAND]
//! ```
//!
//! ### Global Argument
//!
//! -   `path`: If provided as the *only* argument (without a subcommand),
//!     it's treated as a path to a puzzle file to be solved.
//!
//!     ```sh
//!     sudoku_solver <path_to_puzzle_file>
//!     ```
//!
//! ### Subcommands
//!
//! 1.  **`file`**: Solve a single puzzle file.
//!     ```sh
//!     sudoku_solver file --path <path_to_puzzle_file> [OPTIONS]
//!     ```
//!
//! 2.  **`text`**: Solve a puzzle provided as plain text, with rows
//!     separated by newlines or `;`.
//!     ```sh
//!     sudoku_solver text --input "53..7....;6..195...;.98....6.;..."
//!     ```
//!
//! 3.  **`dir`**: Solve every `.sudoku` file under a directory tree and
//!     print a per-file summary.
//!     ```sh
//!     sudoku_solver dir --path <path_to_directory> [OPTIONS]
//!     ```
//!
//! 4.  **`completions`**: Generate shell completion scripts.
//!     ```sh
//!     sudoku_solver completions bash
//!     ```
//!
//! ### Common Options
//!
//! -   `-d, --debug`: Enable debug output (default: `false`).
//! -   `-v, --verify`: Re-check that a completed grid satisfies all three
//!     constraints (default: `true`).
//! -   `-s, --stats`: Enable printing of statistics (default: `true`).
//! -   `-p, --print-solution`: Enable printing of the solved grid
//!     (default: `true`).
//!
//! This file (`main.rs`) contains the main entry point and dispatches to the
//! `command_line` module, which orchestrates parsing, solving, verification,
//! and reporting.

use crate::command_line::cli::{Cli, Commands, solve_dir, solve_file, solve_text};
use clap::{CommandFactory, Parser};

mod command_line;
mod sudoku;

/// Global allocator using `tikv-jemallocator` for potentially better
/// performance and memory usage tracking.
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

/// Main entry point of the Sudoku solver application.
///
/// Parses command-line arguments, dispatches to the appropriate command
/// handler, and manages the overall execution flow.
fn main() {
    let cli = Cli::parse();

    // Handle the case where a path is provided globally without a
    // subcommand. This defaults to solving a single puzzle file.
    if let Some(path) = cli.path.clone() {
        if cli.command.is_none() {
            exit_on_error(solve_file(&path, &cli.common));
            return;
        }
    }

    match cli.command {
        Some(Commands::File { path, common }) => {
            exit_on_error(solve_file(&path, &common));
        }

        Some(Commands::Text { input, common }) => {
            exit_on_error(solve_text(&input, &common));
        }

        Some(Commands::Dir { path, common }) => {
            exit_on_error(solve_dir(&path, &common));
        }

        Some(Commands::Completions { shell }) => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "sudoku_solver",
                &mut std::io::stdout(),
            );
        }

        None => {
            // This case is reached if no subcommand was provided and
            // `cli.path` was also None.
            if cli.path.is_none() {
                eprintln!("No command provided. Use --help for more information.");
                std::process::exit(1);
            }
        }
    }
}

/// Prints an error message and exits nonzero when a command handler fails.
fn exit_on_error<T>(result: Result<T, String>) {
    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
