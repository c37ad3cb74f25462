use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use sudoku_solver::sudoku::board::{Board, EXAMPLE, GRID_SIZE};
use sudoku_solver::sudoku::solver::{Backtracking, Solver};

/// A 21-clue puzzle cut from the example's solution; sparse grids push the
/// search deeper than typical newspaper puzzles.
const SPARSE: [[u8; GRID_SIZE]; GRID_SIZE] = [
    [5, 0, 0, 0, 7, 0, 0, 0, 2],
    [0, 0, 0, 1, 0, 0, 0, 4, 0],
    [0, 0, 8, 0, 0, 0, 5, 0, 0],
    [0, 5, 0, 0, 0, 1, 0, 0, 0],
    [4, 0, 0, 0, 5, 0, 0, 0, 1],
    [0, 0, 0, 9, 0, 0, 0, 5, 0],
    [0, 0, 1, 0, 0, 0, 2, 0, 0],
    [0, 8, 0, 0, 0, 9, 0, 0, 0],
    [3, 0, 0, 0, 8, 0, 0, 0, 9],
];

fn solve_cloned(board: &Board) -> bool {
    let mut board = board.clone();
    let mut solver = Backtracking::new();
    solver.solve(&mut board)
}

fn bench_example(c: &mut Criterion) {
    let board = Board::from(EXAMPLE);

    c.bench_function("solve - example puzzle", |b| {
        b.iter(|| {
            let solved = solve_cloned(&board);
            black_box(solved);
        })
    });
}

fn bench_empty(c: &mut Criterion) {
    let board = Board::default();

    c.bench_function("solve - empty grid", |b| {
        b.iter(|| {
            let solved = solve_cloned(&board);
            black_box(solved);
        })
    });
}

fn bench_sparse(c: &mut Criterion) {
    let board = Board::from(SPARSE);

    c.bench_function("solve - sparse 21-clue puzzle", |b| {
        b.iter(|| {
            let solved = solve_cloned(&board);
            black_box(solved);
        })
    });
}

criterion_group!(benches, bench_example, bench_empty, bench_sparse);
criterion_main!(benches);
