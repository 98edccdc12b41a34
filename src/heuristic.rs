//! Static evaluation of non-terminal positions
//!
//! A position is scored by sliding a window of `WINDOW_LENGTH` cells along
//! every row, column and diagonal and rewarding windows that the scoring
//! side could still complete, with a small bonus for holding the center
//! column.

use crate::{board::*, HEIGHT, WIDTH, WINDOW_LENGTH};

/// Consecutive cells of a line, in line order
pub type Window = [Piece; WINDOW_LENGTH];

/// Bonus for each piece in the center column
pub const CENTER_WEIGHT: i32 = 3;
/// A completed alignment
pub const FOUR_SCORE: i32 = 100;
/// Three pieces and a gap
pub const THREE_SCORE: i32 = 5;
/// Two pieces and two gaps
pub const TWO_SCORE: i32 = 2;
/// The opponent's three pieces and a gap
pub const OPPONENT_THREE_SCORE: i32 = -4;

/// Scores a single window for `piece`
pub fn score_window(window: &Window, piece: Piece) -> i32 {
    let opponent = piece.opponent();
    let count = |p: Piece| window.iter().filter(|&&cell| cell == p).count();
    let (own, empty, theirs) = (count(piece), count(Piece::Empty), count(opponent));

    let mut score = match (own, empty) {
        (4, _) => FOUR_SCORE,
        (3, 1) => THREE_SCORE,
        (2, 2) => TWO_SCORE,
        _ => 0,
    };
    if theirs == 3 && empty == 1 {
        score += OPPONENT_THREE_SCORE;
    }
    score
}

/// Scores the whole board for `piece`
pub fn score_position(board: &Board, piece: Piece) -> i32 {
    let center = board.center_count(piece) as i32 * CENTER_WEIGHT;
    center
        + windows(board)
            .map(|window| score_window(&window, piece))
            .sum::<i32>()
}

/// Every window on the board: rows, then columns, then `/` diagonals, then
/// `\` diagonals
pub fn windows(board: &Board) -> impl Iterator<Item = Window> + '_ {
    let span = WINDOW_LENGTH - 1;

    let horizontal = (0..HEIGHT).flat_map(move |row| {
        (0..WIDTH - span).map(move |column| window_from(board, row, column, 0, 1))
    });
    let vertical = (0..WIDTH).flat_map(move |column| {
        (0..HEIGHT - span).map(move |row| window_from(board, row, column, 1, 0))
    });
    let diagonal_up = (0..HEIGHT - span).flat_map(move |row| {
        (0..WIDTH - span).map(move |column| window_from(board, row, column, 1, 1))
    });
    // starts on the top row of the window and walks down to the right
    let diagonal_down = (0..HEIGHT - span).flat_map(move |row| {
        (0..WIDTH - span).map(move |column| window_from(board, row + span, column, -1, 1))
    });

    horizontal
        .chain(vertical)
        .chain(diagonal_up)
        .chain(diagonal_down)
}

fn window_from(board: &Board, row: usize, column: usize, d_row: isize, d_column: isize) -> Window {
    let mut window = [Piece::Empty; WINDOW_LENGTH];
    for (i, cell) in window.iter_mut().enumerate() {
        let r = (row as isize + i as isize * d_row) as usize;
        let c = (column as isize + i as isize * d_column) as usize;
        *cell = board.get(r, c);
    }
    window
}
