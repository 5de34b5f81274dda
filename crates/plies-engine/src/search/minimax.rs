//! Fixed-depth minimax without pruning.
//!
//! Scores are always from White's perspective, so White maximizes and Black
//! minimizes. Every node builds its children through
//! [`Player::make_move`](plies_core::Player::make_move) and skips moves that
//! are rejected.

use std::time::Instant;

use plies_core::{Board, Color, Move};
use tracing::{debug, info};

use crate::error::SearchError;
use crate::eval::{BoardEvaluator, StandardEvaluator};
use crate::search::{MoveStrategy, SearchResult};

/// Deepest search [`MiniMax`] accepts.
pub const MAX_DEPTH: u32 = 20;

/// Per-search counters.
struct SearchContext {
    nodes: u64,
}

/// Minimax searcher with a fixed depth and a pluggable evaluator.
#[derive(Debug, Clone)]
pub struct MiniMax<E = StandardEvaluator> {
    depth: u32,
    evaluator: E,
}

impl MiniMax<StandardEvaluator> {
    /// Create a searcher using the [`StandardEvaluator`].
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidDepth`] if `depth` is zero or above
    /// [`MAX_DEPTH`].
    pub fn new(depth: u32) -> Result<Self, SearchError> {
        MiniMax::with_evaluator(depth, StandardEvaluator)
    }
}

impl<E: BoardEvaluator> MiniMax<E> {
    /// Create a searcher with a custom evaluator.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidDepth`] if `depth` is zero or above
    /// [`MAX_DEPTH`].
    pub fn with_evaluator(depth: u32, evaluator: E) -> Result<Self, SearchError> {
        if depth == 0 || depth > MAX_DEPTH {
            return Err(SearchError::InvalidDepth {
                depth,
                max: MAX_DEPTH,
            });
        }
        Ok(MiniMax { depth, evaluator })
    }

    /// Return the search depth in plies.
    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Search `board` for the side to move.
    ///
    /// White keeps the last move with the highest score, Black the last move
    /// with the lowest. When no move can be made the result holds
    /// [`Move::Null`].
    pub fn search(&self, board: &Board) -> SearchResult {
        let start = Instant::now();
        let player = board.current_player();
        let color = player.color();
        let mut ctx = SearchContext { nodes: 0 };

        info!(
            depth = self.depth,
            side = %color,
            candidates = player.legal_moves().len(),
            "search started"
        );

        let mut best_move = Move::Null;
        let mut best_score = match color {
            Color::White => i32::MIN,
            Color::Black => i32::MAX,
        };

        for mv in player.legal_moves() {
            let transition = player.make_move(mv);
            if !transition.status().is_done() {
                continue;
            }
            ctx.nodes += 1;
            let child = transition.to_board();
            let score = match color {
                Color::White => self.min(child, self.depth - 1, &mut ctx),
                Color::Black => self.max(child, self.depth - 1, &mut ctx),
            };
            debug!(%mv, score, "root move");

            let improves = match color {
                Color::White => score >= best_score,
                Color::Black => score <= best_score,
            };
            if improves {
                best_score = score;
                best_move = mv.clone();
            }
        }

        let elapsed = start.elapsed();
        if best_move.is_null() {
            best_score = self.evaluator.evaluate(board, self.depth);
        }
        info!(
            best = %best_move,
            score = best_score,
            nodes = ctx.nodes,
            elapsed_ms = elapsed.as_millis() as u64,
            "search finished"
        );

        SearchResult {
            best_move,
            score: best_score,
            nodes: ctx.nodes,
            depth: self.depth,
            elapsed,
        }
    }

    /// Best score Black can force from `board`, Black to move.
    fn min(&self, board: &Board, depth: u32, ctx: &mut SearchContext) -> i32 {
        if depth == 0 || is_end_game(board) {
            return self.evaluator.evaluate(board, depth);
        }
        let player = board.current_player();
        let mut lowest = i32::MAX;
        for mv in player.legal_moves() {
            let transition = player.make_move(mv);
            if transition.status().is_done() {
                ctx.nodes += 1;
                lowest = lowest.min(self.max(transition.to_board(), depth - 1, ctx));
            }
        }
        lowest
    }

    /// Best score White can force from `board`, White to move.
    fn max(&self, board: &Board, depth: u32, ctx: &mut SearchContext) -> i32 {
        if depth == 0 || is_end_game(board) {
            return self.evaluator.evaluate(board, depth);
        }
        let player = board.current_player();
        let mut highest = i32::MIN;
        for mv in player.legal_moves() {
            let transition = player.make_move(mv);
            if transition.status().is_done() {
                ctx.nodes += 1;
                highest = highest.max(self.min(transition.to_board(), depth - 1, ctx));
            }
        }
        highest
    }
}

impl<E: BoardEvaluator> MoveStrategy for MiniMax<E> {
    fn execute(&self, board: &Board) -> Move {
        self.search(board).best_move
    }
}

/// Checkmate or stalemate for the side to move.
fn is_end_game(board: &Board) -> bool {
    let player = board.current_player();
    player.is_in_checkmate() || player.is_in_stalemate()
}
