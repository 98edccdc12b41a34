//! The computer player: minimax with alpha-beta pruning

use anyhow::{anyhow, Result};
use rand::{seq::SliceRandom, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::{board::*, heuristic::score_position, win::has_won, LOSS_SCORE, WIN_SCORE};

/// The outcome of a search: the recommended column and its score
///
/// `column` is `None` only for leaves (a decided game, a full board or an
/// exhausted depth), where there is no move left to recommend.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct SearchResult {
    pub column: Option<usize>,
    pub score: i32,
}

impl SearchResult {
    fn leaf(score: i32) -> Self {
        Self {
            column: None,
            score,
        }
    }
}

/// A depth-limited minimax searcher
///
/// # Notes
/// Scores are always from the computer's point of view: the computer is the
/// maximizing side and the player the minimizing side. A won position scores
/// `WIN_SCORE`, a lost one `LOSS_SCORE`, a drawn one 0, and a position at the
/// depth limit is scored by the heuristic.
///
/// Each node starts from a random open column as its best move, so the
/// engine owns a seedable random source to keep games reproducible.
#[derive(Clone, Debug)]
pub struct Engine {
    rng: ChaCha8Rng,

    /// The number of nodes searched by this `Engine` so far (for diagnostics only)
    pub node_count: usize,
}

impl Engine {
    /// Creates an `Engine` seeded from the operating system
    pub fn new() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
            node_count: 0,
        }
    }

    /// Creates an `Engine` whose tie-breaks are reproducible
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            node_count: 0,
        }
    }

    /// Performs game tree search
    ///
    /// Returns the best column for the side to move and the score of the
    /// position after it. Children are explored in ascending column order
    /// on private copies of `board`, and exploration of a node stops as soon
    /// as `alpha >= beta`.
    pub fn search(
        &mut self,
        board: &Board,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> SearchResult {
        self.node_count += 1;

        let valid_locations = board.valid_locations();
        let ai_won = has_won(board, Piece::Ai);
        let player_won = has_won(board, Piece::Player);

        if ai_won {
            return SearchResult::leaf(WIN_SCORE);
        }
        if player_won {
            return SearchResult::leaf(LOSS_SCORE);
        }
        if valid_locations.is_empty() {
            return SearchResult::leaf(0);
        }
        if depth == 0 {
            return SearchResult::leaf(score_position(board, Piece::Ai));
        }

        let (piece, mut value) = if maximizing {
            (Piece::Ai, i32::MIN)
        } else {
            (Piece::Player, i32::MAX)
        };
        let mut best_column = valid_locations.choose(&mut self.rng).copied();

        // every valid location has an open row
        let moves = valid_locations
            .iter()
            .filter_map(|&column| board.next_open_row(column).map(|row| (column, row)));
        for (column, row) in moves {
            let mut next = *board;
            next.drop_piece(row, column, piece);

            let score = self.search(&next, depth - 1, alpha, beta, !maximizing).score;
            if maximizing {
                if score > value {
                    value = score;
                    best_column = Some(column);
                }
                alpha = alpha.max(value);
            } else {
                if score < value {
                    value = score;
                    best_column = Some(column);
                }
                beta = beta.min(value);
            }
            // the other side will never allow this node to be reached
            if alpha >= beta {
                break;
            }
        }

        SearchResult {
            column: best_column,
            score: value,
        }
    }

    /// Picks the computer's move, searching `depth` plies ahead
    ///
    /// Fails if the board has no open column, as there is no move to make.
    pub fn choose_computer_move(&mut self, board: &Board, depth: u32) -> Result<usize> {
        if board.is_full() {
            return Err(anyhow!("Invalid position, no open column left to play"));
        }

        // the root always looks at least one move ahead
        let depth = depth.max(1);
        let nodes_before = self.node_count;
        let result = self.search(board, depth, i32::MIN, i32::MAX, true);
        let column = result
            .column
            .ok_or_else(|| anyhow!("Invalid position, the game is already over"))?;

        debug!(
            column,
            score = result.score,
            depth,
            nodes = self.node_count - nodes_before,
            "computer move chosen"
        );
        Ok(column)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

/// Picks the computer's move with a freshly seeded `Engine`
pub fn choose_computer_move(board: &Board, depth: u32) -> Result<usize> {
    Engine::new().choose_computer_move(board, depth)
}
