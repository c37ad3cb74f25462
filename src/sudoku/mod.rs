#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! This module provides functionality for solving Sudoku puzzles.

/// The `board` module defines the 9x9 grid, its constraint queries, and the
/// validating setters.
pub mod board;

/// The `parser` module reads puzzles from the plain-text puzzle format.
pub mod parser;

/// The `solver` module contains the exhaustive backtracking search.
pub mod solver;
