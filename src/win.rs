//! Four-in-a-row detection

use crate::{board::*, HEIGHT, WIDTH, WINDOW_LENGTH};

/// The `(row, column)` cells of an alignment, in scan order
pub type WinningLine = [(usize, usize); WINDOW_LENGTH];

/// Direction steps `(row, column)` in the order lines are scanned
const DIRECTIONS: [(isize, isize); 4] = [
    (0, 1),  // horizontal, left to right
    (1, 0),  // vertical, bottom to top
    (1, 1),  // diagonal /
    (-1, 1), // diagonal \
];

/// Finds an alignment of `WINDOW_LENGTH` copies of `piece`
///
/// Lines are scanned horizontally, then vertically, then along both
/// diagonals, and the first alignment found is returned. Within a direction
/// the starting column is the outer loop and the starting row the inner one,
/// so among simultaneous wins the result is always the same line.
pub fn find_winning_line(board: &Board, piece: Piece) -> Option<WinningLine> {
    if piece.is_empty() {
        return None;
    }

    for &(d_row, d_column) in DIRECTIONS.iter() {
        let (columns, rows) = start_ranges(d_row, d_column);
        for column in columns {
            for row in rows.clone() {
                let line = line_from(row, column, d_row, d_column);
                if line.iter().all(|&(r, c)| board.get(r, c) == piece) {
                    return Some(line);
                }
            }
        }
    }
    None
}

/// Whether `piece` has an alignment anywhere on the board
pub fn has_won(board: &Board, piece: Piece) -> bool {
    find_winning_line(board, piece).is_some()
}

/// A board is terminal once either side has won or no column is open
pub fn is_terminal(board: &Board) -> bool {
    has_won(board, Piece::Player) || has_won(board, Piece::Ai) || board.is_full()
}

// the start cells from which a full line fits on the board
fn start_ranges(
    d_row: isize,
    d_column: isize,
) -> (std::ops::Range<usize>, std::ops::Range<usize>) {
    let span = WINDOW_LENGTH - 1;
    let columns = if d_column == 0 { 0..WIDTH } else { 0..WIDTH - span };
    let rows = match d_row {
        0 => 0..HEIGHT,
        1 => 0..HEIGHT - span,
        _ => span..HEIGHT,
    };
    (columns, rows)
}

fn line_from(row: usize, column: usize, d_row: isize, d_column: isize) -> WinningLine {
    let mut line = [(0, 0); WINDOW_LENGTH];
    for (i, cell) in line.iter_mut().enumerate() {
        *cell = (
            (row as isize + i as isize * d_row) as usize,
            (column as isize + i as isize * d_column) as usize,
        );
    }
    line
}
