//! A computer opponent for the board game 'Connect 4'
//!
//! The agent uses a depth-limited minimax search with alpha-beta pruning,
//! scoring non-terminal positions with a sliding-window heuristic.
//! Everything here is a pure function of an explicitly passed [`Board`];
//! the [`Game`] wrapper holds the little session state a front end needs.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_minimax::{board::Board, search::Engine};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! // the player threatens four in a row up the fifth column
//! let board = Board::from_moves("52535")?;
//! let mut engine = Engine::with_seed(7);
//! let column = engine.choose_computer_move(&board, 3)?;
//!
//! assert_eq!(column, 4);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod win;

pub mod heuristic;

pub mod search;

pub mod game;


pub use board::{Board, Piece};
pub use game::{Game, GameState};
pub use search::{Engine, SearchResult};
pub use win::{find_winning_line, WinningLine};

/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The number of aligned pieces needed to win
pub const WINDOW_LENGTH: usize = 4;

/// The column favoured by the heuristic
pub const CENTER_COLUMN: usize = WIDTH / 2;

/// The search depth the computer plays at unless told otherwise
pub const DEFAULT_DEPTH: u32 = 5;

/// Score of a position the computer has won
pub const WIN_SCORE: i32 = 1_000_000;

/// Score of a position the computer has lost
pub const LOSS_SCORE: i32 = -WIN_SCORE;

/// Number of windows of `WINDOW_LENGTH` cells on the board, in every direction
pub const NUM_WINDOWS: usize = HEIGHT * (WIDTH - WINDOW_LENGTH + 1)
    + WIDTH * (HEIGHT - WINDOW_LENGTH + 1)
    + 2 * (HEIGHT - WINDOW_LENGTH + 1) * (WIDTH - WINDOW_LENGTH + 1);

/// Upper bound of `heuristic::score_position` over any board
pub const MAX_HEURISTIC_SCORE: i32 = (HEIGHT as i32) * heuristic::CENTER_WEIGHT
    + (NUM_WINDOWS as i32) * heuristic::FOUR_SCORE;

const_assert!(WINDOW_LENGTH <= WIDTH);
const_assert!(WINDOW_LENGTH <= HEIGHT);
// a decided game must outrank any heuristic evaluation
const_assert!(WIN_SCORE > MAX_HEURISTIC_SCORE);
const_assert!(LOSS_SCORE < -MAX_HEURISTIC_SCORE);
