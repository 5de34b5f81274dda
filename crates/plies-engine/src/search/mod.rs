//! Move selection strategies.

pub mod minimax;

use std::time::Duration;

use plies_core::{Board, Move};

/// Picks a move for the side to move.
pub trait MoveStrategy {
    /// Return the chosen move, or [`Move::Null`] if the side to move has none.
    fn execute(&self, board: &Board) -> Move;
}

/// Result of a completed search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, or [`Move::Null`] if no move could be made.
    pub best_move: Move,
    /// Score of the best move from White's perspective.
    pub score: i32,
    /// Positions reached through successful moves.
    pub nodes: u64,
    /// Depth searched, in plies.
    pub depth: u32,
    /// Wall-clock time spent.
    pub elapsed: Duration,
}
