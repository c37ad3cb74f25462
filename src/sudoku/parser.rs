#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! A parser for the plain-text Sudoku puzzle format.
//!
//! The format is line-oriented:
//! - Comment lines start with 'c' and are skipped.
//! - A line starting with '%' marks end-of-data (anything after it is
//!   ignored).
//! - Blank lines are skipped.
//! - Each of the nine data lines holds one grid row, written either as a
//!   single nine-character token (digits `0`-`9`, with `.` or `_` standing
//!   for an empty cell) or as nine whitespace-separated tokens.
//!
//! For example, both of these encode the same row:
//!
//! ```text
//! 53..7....
//! 5 3 0 0 7 0 0 0 0
//! ```
//!
//! The final shape and range gate goes through [`Board::set_grid`], so the
//! parser accepts exactly the grids the validating setter accepts.

use crate::sudoku::board::{Board, GRID_SIZE, MAX_DIGIT};
use itertools::Itertools;
use std::io::{self, BufRead};
use std::path::Path;

/// Parses puzzle data from a `BufRead` source into a [`Board`].
///
/// # Errors
///
/// Returns an error if reading from `reader` fails, or an
/// [`io::ErrorKind::InvalidData`] error when the input is malformed: a row
/// with the wrong number of cells, a token that is not a digit or
/// empty-cell marker, or a row count other than nine.
pub fn parse_grid<R: BufRead>(reader: R) -> io::Result<Board> {
    let mut rows: Vec<Vec<u8>> = Vec::with_capacity(GRID_SIZE);

    for line_result in reader.lines() {
        let line = line_result?;
        let mut parts = line.split_whitespace().peekable();

        match parts.peek() {
            Some(&"%") => break,
            None | Some(&"c") => {}
            Some(_) => rows.push(parse_row(&line)?),
        }
    }

    let mut board = Board::default();
    if board.set_grid(&rows) {
        Ok(board)
    } else {
        Err(invalid_data(format!(
            "expected {GRID_SIZE} rows of {GRID_SIZE} cells, got {} rows",
            rows.len()
        )))
    }
}

/// Parses the puzzle file at `path`.
///
/// This is a convenience wrapper that opens the file, buffers it, and calls
/// [`parse_grid`].
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read, or if its content
/// is malformed (see [`parse_grid`]).
pub fn parse_file(path: &Path) -> io::Result<Board> {
    let file = std::fs::File::open(path)?;
    parse_grid(io::BufReader::new(file))
}

/// Parses a puzzle supplied inline as a string.
///
/// Rows may be separated by newlines or by `;`, which makes the format easy
/// to pass as a single shell argument.
///
/// # Errors
///
/// Returns an error when the input is malformed (see [`parse_grid`]).
pub fn parse_text(input: &str) -> io::Result<Board> {
    parse_grid(io::Cursor::new(input.replace(';', "\n")))
}

/// Parses one data line into a grid row.
fn parse_row(line: &str) -> io::Result<Vec<u8>> {
    let tokens = line.split_whitespace().collect_vec();

    let row: Vec<u8> = if tokens.len() == 1 && tokens[0].len() == GRID_SIZE {
        tokens[0].chars().map(parse_cell_char).try_collect()?
    } else {
        tokens.iter().map(|token| parse_cell_token(token)).try_collect()?
    };

    if row.len() == GRID_SIZE {
        Ok(row)
    } else {
        Err(invalid_data(format!(
            "expected {GRID_SIZE} cells in row, got {}: {line:?}",
            row.len()
        )))
    }
}

/// One character of a contiguous row: a digit, or `.`/`_` for empty.
fn parse_cell_char(c: char) -> io::Result<u8> {
    match c {
        '.' | '_' => Ok(0),
        _ => c
            .to_digit(10)
            .and_then(|digit| u8::try_from(digit).ok())
            .ok_or_else(|| invalid_data(format!("invalid cell character {c:?}"))),
    }
}

/// One whitespace-separated token: a digit `0`-`9`, or `.`/`_` for empty.
fn parse_cell_token(token: &str) -> io::Result<u8> {
    match token {
        "." | "_" => Ok(0),
        _ => token
            .parse::<u8>()
            .ok()
            .filter(|&value| value <= MAX_DIGIT)
            .ok_or_else(|| invalid_data(format!("invalid cell token {token:?}"))),
    }
}

fn invalid_data(message: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sudoku::board::EXAMPLE;
    use std::io::Cursor;

    const EXAMPLE_CONTIGUOUS: &str = "\
c the example puzzle
530070000
600195000
098000060
800060003
400803001
700020006
060000280
000419005
000080079
";

    #[test]
    fn test_parse_contiguous_rows() {
        let board = parse_grid(Cursor::new(EXAMPLE_CONTIGUOUS)).unwrap();
        assert_eq!(board, Board::from(EXAMPLE));
    }

    #[test]
    fn test_parse_dotted_and_spaced_rows() {
        let input = "\
53..7....
6..195...
.98....6.
8 . . . 6 . . . 3
4 _ _ 8 _ 3 _ _ 1
7...2...6
.6....28.
...419..5
....8..79
";
        let board = parse_grid(Cursor::new(input)).unwrap();
        assert_eq!(board, Board::from(EXAMPLE));
    }

    #[test]
    fn test_parse_skips_comments_blank_lines_and_end_marker() {
        let input = format!("c header\n\n{}\n%\nnot a row at all\n", {
            let mut body = String::new();
            for _ in 0..GRID_SIZE {
                body.push_str("000000000\n");
            }
            body
        });

        let board = parse_grid(Cursor::new(input)).unwrap();
        assert_eq!(board, Board::default());
    }

    #[test]
    fn test_parse_text_with_semicolon_rows() {
        let input = "530070000;600195000;098000060;800060003;400803001;\
                     700020006;060000280;000419005;000080079";
        let board = parse_text(input).unwrap();
        assert_eq!(board, Board::from(EXAMPLE));
    }

    #[test]
    fn test_parse_rejects_wrong_row_count() {
        let input = "530070000\n600195000\n";
        let err = parse_grid(Cursor::new(input)).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_parse_rejects_short_row() {
        let input = "53007000\n";
        let err = parse_grid(Cursor::new(input)).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_parse_rejects_bad_character() {
        let input = "53x070000\n";
        let err = parse_grid(Cursor::new(input)).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_parse_rejects_out_of_range_token() {
        let input = "5 3 0 0 7 0 0 0 12\n";
        let err = parse_grid(Cursor::new(input)).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
