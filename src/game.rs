//! Session bookkeeping for a front end
//!
//! The engine itself is stateless; a `Game` keeps the board together with
//! whose pieces won and where, so a caller can render and restart.

use anyhow::{anyhow, Result};
use tracing::{debug, info};

use crate::{board::*, search::Engine, win::*};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameState {
    Playing,
    PlayerWin,
    AiWin,
    Draw,
}

#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    state: GameState,
    winning_line: Option<WinningLine>,
    moves: String,
}

impl Game {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            state: GameState::Playing,
            winning_line: None,
            moves: String::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// The 1-indexed columns played so far
    pub fn moves(&self) -> &str {
        &self.moves
    }

    /// The cells of the alignment that ended the game, if any
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    pub fn is_over(&self) -> bool {
        self.state != GameState::Playing
    }

    /// Plays `piece` into the 0-indexed `column` and updates the game state
    pub fn play(&mut self, column: usize, piece: Piece) -> Result<GameState> {
        if self.is_over() {
            return Err(anyhow!("Invalid move, the game is over"));
        }
        if piece.is_empty() {
            return Err(anyhow!("Invalid move, cannot play an empty cell"));
        }

        let row = self.board.play(column, piece)?;
        self.moves.push_str(&(column + 1).to_string());
        debug!(?piece, row, column, "piece dropped");

        // only the side that just moved can have completed a line
        if let Some(line) = find_winning_line(&self.board, piece) {
            self.winning_line = Some(line);
            self.state = match piece {
                Piece::Player => GameState::PlayerWin,
                _ => GameState::AiWin,
            };
        } else if self.board.is_full() {
            self.state = GameState::Draw;
        }

        if self.is_over() {
            info!(state = ?self.state, moves = %self.moves, "game over");
        }
        Ok(self.state)
    }

    /// Lets `engine` choose and play the computer's move
    pub fn play_computer(&mut self, engine: &mut Engine, depth: u32) -> Result<(usize, GameState)> {
        if self.is_over() {
            return Err(anyhow!("Invalid move, the game is over"));
        }
        let column = engine.choose_computer_move(&self.board, depth)?;
        let state = self.play(column, Piece::Ai)?;
        Ok((column, state))
    }

    /// Starts over on an empty board
    pub fn restart(&mut self) {
        *self = Self::new();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
