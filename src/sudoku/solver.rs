//! The exhaustive backtracking Sudoku solver.
//!
//! This module provides the [`Backtracking`] struct, which fills the empty
//! cells of a [`Board`] by depth-first search. At each step the first empty
//! cell in row-major order becomes the decision cell; candidate digits are
//! tried in ascending order, each placement checked against the board's
//! row/column/box predicates, and undone again when the branch below it is
//! exhausted.
//!
//! The search is deliberately the simplest correct one: no candidate
//! propagation, no most-constrained-cell ordering, no restarts. The tree is
//! bounded by 81 decision cells with at most nine candidates each, so it
//! always terminates; ordinary puzzles solve in well under a second.
//!
//! The solver mutates the borrowed board in place. On success the board is
//! left fully solved; on failure every tentative placement has been undone,
//! so the caller sees the exact pre-call state.

use crate::sudoku::board::{Board, GRID_SIZE, MAX_DIGIT};
use itertools::Itertools;
use smallvec::SmallVec;

/// Counters describing the work a solve performed.
///
/// Mirrors what the statistics report prints: one decision per tentative
/// placement, one backtrack per placement undone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveStats {
    /// Tentative digit placements committed during the search.
    pub decisions: usize,
    /// Placements undone after the branch below them was exhausted.
    pub backtracks: usize,
}

/// A Sudoku solving strategy operating on a mutably borrowed [`Board`].
pub trait Solver {
    /// Creates a fresh solver instance.
    fn new() -> Self;

    /// Attempts to fill every empty cell of `board` with a digit 1-9 such
    /// that all placements remain valid.
    ///
    /// Returns `true` and leaves the board fully solved when a solution
    /// exists; returns `false` and leaves the board exactly as it started
    /// when none does.
    fn solve(&mut self, board: &mut Board) -> bool;

    /// Returns the counters accumulated by the most recent solve.
    fn stats(&self) -> SolveStats;
}

/// Depth-first backtracking over the empty cells of a board.
///
/// A grid that is structurally valid but already violates a constraint (a
/// digit repeated within a row, column, or box) is rejected up front: `solve`
/// returns `false` without touching the board, rather than searching from an
/// unsatisfiable start and reporting a grid that breaks the rules.
#[derive(Debug, Clone, Default)]
pub struct Backtracking {
    stats: SolveStats,
}

impl Solver for Backtracking {
    fn new() -> Self {
        Self::default()
    }

    fn solve(&mut self, board: &mut Board) -> bool {
        self.stats = SolveStats::default();

        if !board.is_consistent() {
            return false;
        }

        self.search(board)
    }

    fn stats(&self) -> SolveStats {
        self.stats
    }
}

impl Backtracking {
    /// One level of the search: pick the decision cell, try its candidates.
    ///
    /// Failed branches undo their own placements, so an overall failure
    /// leaves the board bit-for-bit as it was on entry.
    fn search(&mut self, board: &mut Board) -> bool {
        let Some((row, col)) = first_empty(board) else {
            // No empty cell left: the grid is completely and validly filled.
            return true;
        };

        for value in candidates(board, row, col) {
            board.set_point(value, row, col);
            self.stats.decisions += 1;

            if self.search(board) {
                return true;
            }

            board.set_point(0, row, col);
            self.stats.backtracks += 1;
        }

        false
    }
}

/// The first empty cell in row-major order.
///
/// The scan restarts from the top-left at every recursion step rather than
/// resuming after the previous decision cell; that costs a constant factor,
/// not correctness.
fn first_empty(board: &Board) -> Option<(usize, usize)> {
    (0..GRID_SIZE)
        .cartesian_product(0..GRID_SIZE)
        .find(|&(row, col)| board.grid()[row][col] == 0)
}

/// Digits placeable at `(row, col)` under the current grid, ascending.
fn candidates(board: &Board, row: usize, col: usize) -> SmallVec<[u8; GRID_SIZE]> {
    (1..=MAX_DIGIT)
        .filter(|&value| board.is_valid_placement(value, row, col))
        .collect()
}
