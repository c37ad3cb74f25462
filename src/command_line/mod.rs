//! Command-line interface for the Sudoku solver binary.

pub(crate) mod cli;
