use anyhow::{anyhow, Result};

use std::fmt;

use crate::{CENTER_COLUMN, HEIGHT, WIDTH};

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Piece {
    Empty,
    Player,
    Ai,
}

impl Piece {
    /// The piece of the other side, `Empty` stays `Empty`
    pub fn opponent(self) -> Self {
        match self {
            Piece::Player => Piece::Ai,
            Piece::Ai => Piece::Player,
            Piece::Empty => Piece::Empty,
        }
    }

    pub fn is_empty(self) -> bool {
        matches!(self, Piece::Empty)
    }

    fn symbol(self) -> char {
        match self {
            Piece::Player => 'X',
            Piece::Ai => 'O',
            Piece::Empty => '.',
        }
    }
}

/// A 6x7 Connect 4 grid
///
/// Row 0 is the bottom of the board. Pieces in a column are always stacked
/// from row 0 upwards without gaps. The board is `Copy`, so every search
/// branch works on its own copy.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Board {
    cells: [[Piece; WIDTH]; HEIGHT], // cells are stored bottom-to-top, left-to-right
}

impl Board {
    /// Creates an empty board
    pub fn new() -> Self {
        Self {
            cells: [[Piece::Empty; WIDTH]; HEIGHT],
        }
    }

    /// Builds a position from a string of 1-indexed columns, the player
    /// moving first and the computer replying
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self> {
        let mut board = Self::new();
        let mut piece = Piece::Player;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column @ 1..=WIDTH) => {
                    board.play(column - 1, piece)?;
                    piece = piece.opponent();
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(board)
    }

    /// Builds a position from a picture of the board, top row first
    ///
    /// `X` is a player piece, `O` a computer piece and `.` an empty cell.
    pub fn from_rows(rows: &[&str]) -> Result<Self> {
        if rows.len() != HEIGHT {
            return Err(anyhow!("expected {} rows, found {}", HEIGHT, rows.len()));
        }
        let mut board = Self::new();

        for (index, line) in rows.iter().enumerate() {
            let row = HEIGHT - 1 - index;
            let symbols: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if symbols.len() != WIDTH {
                return Err(anyhow!(
                    "expected {} cells in row {}, found {}",
                    WIDTH,
                    row,
                    symbols.len()
                ));
            }
            for (column, symbol) in symbols.into_iter().enumerate() {
                board.cells[row][column] = match symbol {
                    'X' | 'x' => Piece::Player,
                    'O' | 'o' => Piece::Ai,
                    '.' => Piece::Empty,
                    _ => return Err(anyhow!("could not parse '{}' as a cell", symbol)),
                };
            }
        }

        // every piece must rest on the floor or on another piece
        for row in 1..HEIGHT {
            for column in 0..WIDTH {
                if !board.cells[row][column].is_empty() && board.cells[row - 1][column].is_empty() {
                    return Err(anyhow!(
                        "Invalid position, floating piece at row {} column {}",
                        row,
                        column + 1
                    ));
                }
            }
        }
        Ok(board)
    }

    pub fn get(&self, row: usize, column: usize) -> Piece {
        self.cells[row][column]
    }

    /// Whether `column` can accept another piece
    pub fn is_valid_location(&self, column: usize) -> bool {
        column < WIDTH && self.cells[HEIGHT - 1][column].is_empty()
    }

    /// The lowest empty row of `column`, `None` if the column is full
    pub fn next_open_row(&self, column: usize) -> Option<usize> {
        (0..HEIGHT).find(|&row| self.cells[row][column].is_empty())
    }

    /// Places `piece` at the given cell without any validation
    ///
    /// The caller is expected to have taken `row` from `next_open_row`.
    pub fn drop_piece(&mut self, row: usize, column: usize, piece: Piece) {
        debug_assert!(
            self.cells[row][column].is_empty(),
            "cell ({}, {}) is already occupied",
            row,
            column
        );
        debug_assert!(
            row == 0 || !self.cells[row - 1][column].is_empty(),
            "cell ({}, {}) has nothing beneath it",
            row,
            column
        );
        self.cells[row][column] = piece;
    }

    /// Drops `piece` into `column` after checking the move, returning the
    /// row it landed in
    pub fn play(&mut self, column: usize, piece: Piece) -> Result<usize> {
        if column >= WIDTH {
            return Err(anyhow!(
                "Invalid move, column {} out of range. Columns must be between 1 and {}",
                column + 1,
                WIDTH
            ));
        }
        let row = self
            .next_open_row(column)
            .ok_or_else(|| anyhow!("Invalid move, column {} full", column + 1))?;
        self.drop_piece(row, column, piece);
        Ok(row)
    }

    /// Columns that accept a piece, in ascending order
    pub fn valid_locations(&self) -> Vec<usize> {
        (0..WIDTH)
            .filter(|&column| self.is_valid_location(column))
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells[HEIGHT - 1].iter().all(|cell| !cell.is_empty())
    }

    pub fn num_pieces(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }

    /// Occurrences of `piece` in the center column
    pub fn center_count(&self, piece: Piece) -> usize {
        (0..HEIGHT)
            .filter(|&row| self.cells[row][CENTER_COLUMN] == piece)
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.iter().rev() {
            let line: String = row.iter().map(|cell| cell.symbol()).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
