#![deny(missing_docs)]
//! This crate provides an exhaustive backtracking solver for standard 9x9
//! Sudoku puzzles: a fixed-size board model with total, boolean constraint
//! queries, and a depth-first search that fills a grid in place or reports
//! that no solution exists.

/// The `sudoku` module implements the board model, the puzzle parser, and
/// the backtracking solver.
pub mod sudoku;
